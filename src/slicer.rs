//! Chop a [`SampleStream`] into equally long, 4 bit quantized slices.
//!
//! Slices sit on a grid: slice `i` of `n` starts at `len * i / n`. Each one
//! reads `samples_per_slice` samples from there and picks `resolution` of them
//! by nearest neighbour (`samples_per_slice * j / resolution`), no interpolation.

use derive_more::Deref;

use crate::error::{FormatError, Result};
use crate::input::SampleStream;

/// number of distinct quantized levels
pub const LEVELS: u8 = 16;

/// Reduce an unsigned amplitude to its 4 most significant bits.
///
/// Graphs, hex dumps and instrument files all go through this, so they always agree.
#[inline]
pub fn quantize(amplitude: u16) -> u8 {
	(amplitude >> 12) as u8
}

/// How to slice a stream. Build it once, it doesn't change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSpec {
	slice_count: usize,
	samples_per_slice: Option<usize>,
	resolution: usize,
	extend_edge: bool,
}

impl Default for SliceSpec {
	fn default() -> Self {
		SliceSpec::new(16, 16)
	}
}

impl SliceSpec {
	pub fn new(slice_count: usize, resolution: usize) -> Self {
		SliceSpec { slice_count, resolution, samples_per_slice: None, extend_edge: false }
	}

	/// samples read for each slice, by default the whole grid cell
	pub fn with_samples_per_slice(mut self, samples: usize) -> Self {
		self.samples_per_slice = Some(samples);
		self
	}

	/// pull the last window back so it ends on the last sample
	pub fn with_extend_edge(mut self, extend: bool) -> Self {
		self.extend_edge = extend;
		self
	}

	pub fn slice_count(&self) -> usize { self.slice_count }
	pub fn resolution(&self) -> usize { self.resolution }
	pub fn extend_edge(&self) -> bool { self.extend_edge }
	pub fn requested_samples_per_slice(&self) -> Option<usize> { self.samples_per_slice }

	/// Samples per slice for a stream of `len` samples, applying the default.
	pub fn samples_per_slice(&self, len: usize) -> usize {
		match self.samples_per_slice {
			Some(n) => n,
			None if self.slice_count == 0 => 0,
			None => len / self.slice_count,
		}
	}

	/// Checks that don't depend on the stream.
	pub fn validate(&self) -> std::result::Result<(), FormatError> {
		if self.slice_count == 0 {
			return Err(FormatError::NoSlices);
		}
		if self.resolution == 0 {
			return Err(FormatError::NoResolution);
		}
		Ok(())
	}
}

/// A borrowed range of the stream, `len` samples from `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
	pub start: usize,
	pub len: usize,
}

impl Window {
	pub fn end(&self) -> usize {
		self.start + self.len
	}
}

/// `resolution` levels in `0..16`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
#[deref(forward)]
pub struct Slice(Vec<u8>);

impl Slice {
	pub fn levels(&self) -> &[u8] {
		&self.0
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}
}

/// Windows for every slice, all known to fit inside the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicePlan {
	windows: Vec<Window>,
	resolution: usize,
}

impl SlicePlan {
	pub fn windows(&self) -> &[Window] {
		&self.windows
	}

	pub fn resolution(&self) -> usize {
		self.resolution
	}

	pub fn samples_per_slice(&self) -> usize {
		self.windows.first().map(|w| w.len).unwrap_or(0)
	}

	/// Sample every window. `stream` must be the one the plan was made for.
	pub fn sample(&self, stream: &SampleStream) -> Result<Vec<Slice>> {
		self.windows
			.iter()
			.enumerate()
			.map(|(index, w)| -> Result<Slice> {
				let window = stream.window(w.start, w.len).ok_or(FormatError::WindowOverrun {
					index, start: w.start, end: w.end(), len: stream.len(),
				})?;
				Ok(resample(window, self.resolution))
			})
			.collect()
	}
}

fn grid_start(len: usize, index: usize, count: usize) -> usize {
	(len as u128 * index as u128 / count as u128) as usize
}

/// Work out and validate every window before anything gets sampled.
pub fn plan(stream: &SampleStream, spec: &SliceSpec) -> Result<SlicePlan> {
	spec.validate()?;
	let len = stream.len();
	let count = spec.slice_count;
	let samples = spec.samples_per_slice(len);

	if samples == 0 {
		return Err(FormatError::EmptySlice { samples: len, slices: count }.into());
	}
	if spec.extend_edge {
		if samples > len {
			return Err(FormatError::SliceTooLong { requested: samples, available: len }.into());
		}
	} else if samples > len / count {
		return Err(FormatError::SliceTooLong { requested: samples, available: len / count }.into());
	}

	let mut windows = Vec::with_capacity(count);
	for index in 0..count {
		let start = if spec.extend_edge && index == count - 1 {
			len - samples
		} else {
			grid_start(len, index, count)
		};
		let window = Window { start, len: samples };
		if window.end() > len {
			return Err(FormatError::WindowOverrun { index, start, end: window.end(), len }.into());
		}
		windows.push(window);
	}

	log::debug!(
		"planned {} slices of {} samples over {} ({} levels each{})",
		count, samples, len, spec.resolution,
		if spec.extend_edge { ", extended" } else { "" },
	);

	Ok(SlicePlan { windows, resolution: spec.resolution })
}

/// Nearest neighbour pick of `resolution` samples out of `window`, quantized.
pub fn resample(window: &[u16], resolution: usize) -> Slice {
	let len = window.len();
	if len == 0 {
		return Slice(vec![0; resolution]);
	}
	Slice(
		(0..resolution)
			.map(|j| window[len * j / resolution])
			.map(quantize)
			.collect()
	)
}

/// Validate `spec` against `stream` and produce every slice, in order.
pub fn slice(stream: &SampleStream, spec: &SliceSpec) -> Result<Vec<Slice>> {
	plan(stream, spec)?.sample(stream)
}
