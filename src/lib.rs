//! Chop mono 16 bit wave files into 4 bit wavetables.
//!
//! ```no_run
//! use wavslice::{input, slicer::{self, SliceSpec}};
//!
//! let wave = input::file::load("voice.wav")?;
//! let slices = slicer::slice(&wave.samples, &SliceSpec::new(16, 32))?;
//! for slice in &slices {
//! 	println!("{:?}", slice.levels());
//! }
//! # Ok::<(), wavslice::Error>(())
//! ```

pub mod cfg;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod music;
pub mod slicer;

pub use error::{Error, FormatError, Result};
pub use input::{decode, FormatDescriptor, SampleStream, Waveform};
pub use slicer::{quantize, slice, Slice, SliceSpec};
