//! FamiTracker instrument files.
//!
//! Slices become the waves of an N163 instrument. Layout, all integers little
//! endian:
//!
//! ```text
//! "FTI2.4"  u8 type (5)  u32 name length  name  u8 sequence count (5)  5 x u8 (0)
//! u32 wave size  u32 wave position (0)  u32 wave count  waves, one level per byte
//! ```

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{FormatError, Result};
use crate::slicer::Slice;

pub const FTI_HEADER: &[u8; 6] = b"FTI2.4";
pub const INSTRUMENT_N163: u8 = 5;
pub const SEQUENCE_COUNT: u8 = 5;
pub const DEFAULT_NAME: &str = "New Instrument";

pub struct FtiInstrument<'a> {
	name: &'a str,
	slices: &'a [Slice],
}

fn field(name: &'static str, value: usize) -> std::result::Result<u32, FormatError> {
	u32::try_from(value).map_err(|_| FormatError::ExportOverflow { field: name, value })
}

impl<'a> FtiInstrument<'a> {
	pub fn new(name: &'a str, slices: &'a [Slice]) -> Self {
		FtiInstrument { name, slices }
	}

	pub fn wave_size(&self) -> usize {
		self.slices.first().map(|s| s.len()).unwrap_or(0)
	}

	/// Everything that could make the file invalid, checked before a single byte is written
	fn check(&self) -> std::result::Result<(), FormatError> {
		if self.slices.is_empty() {
			return Err(FormatError::NoSlices);
		}
		let expected = self.wave_size();
		if let Some((index, s)) = self.slices.iter().enumerate().find(|(_, s)| s.len() != expected) {
			return Err(FormatError::RaggedSlices { index, found: s.len(), expected });
		}
		field("instrument name", self.name.len())?;
		field("wave size", expected)?;
		field("wave count", self.slices.len())?;
		Ok(())
	}

	pub fn write_to(&self, mut out: impl Write) -> Result<()> {
		self.check()?;
		out.write_all(FTI_HEADER)?;
		out.write_u8(INSTRUMENT_N163)?;
		out.write_u32::<LittleEndian>(field("instrument name", self.name.len())?)?;
		out.write_all(self.name.as_bytes())?;
		out.write_u8(SEQUENCE_COUNT)?;
		out.write_all(&[0; SEQUENCE_COUNT as usize])?;
		out.write_u32::<LittleEndian>(field("wave size", self.wave_size())?)?;
		out.write_u32::<LittleEndian>(0)?; // wave position
		out.write_u32::<LittleEndian>(field("wave count", self.slices.len())?)?;
		for slice in self.slices {
			out.write_all(slice.levels())?;
		}
		Ok(())
	}

	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let mut out = Vec::new();
		self.write_to(&mut out)?;
		Ok(out)
	}

	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		self.check()?;
		let mut out = BufWriter::new(File::create(path.as_ref())?);
		self.write_to(&mut out)?;
		out.flush()?;
		log::info!("wrote {} waves of {} to {}", self.slices.len(), self.wave_size(), path.as_ref().display());
		Ok(())
	}
}
