pub mod format;

pub mod file;

use std::{fmt, io::{self, Cursor, Read}};

use byteorder::{LittleEndian, ReadBytesExt};
use derive_more::Deref;

use crate::error::{FormatError, Result};
use format::{SampleParser, Signed16PCM};

/// 4 byte chunk identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
	pub const RIFF: ChunkTag = ChunkTag(*b"RIFF");
	pub const WAVE: ChunkTag = ChunkTag(*b"WAVE");
	pub const FMT:  ChunkTag = ChunkTag(*b"fmt ");
	pub const DATA: ChunkTag = ChunkTag(*b"data");

	fn read(reader: &mut impl Read) -> io::Result<Self> {
		let mut tag = [0u8; 4];
		reader.read_exact(&mut tag)?;
		Ok(ChunkTag(tag))
	}

	fn expect(self, expected: ChunkTag) -> std::result::Result<(), FormatError> {
		if self == expected {
			Ok(())
		} else {
			Err(FormatError::UnexpectedTag { expected, found: self })
		}
	}
}

impl fmt::Display for ChunkTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for b in self.0 {
			if b.is_ascii_graphic() || b == b' ' {
				write!(f, "{}", b as char)?;
			} else {
				write!(f, "\\x{:02x}", b)?;
			}
		}
		Ok(())
	}
}

impl fmt::Debug for ChunkTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ChunkTag(\"{}\")", self)
	}
}

#[derive(Debug, Clone, Copy)]
struct ChunkHeader {
	tag: ChunkTag,
	len: u32,
}

impl ChunkHeader {
	fn read(reader: &mut impl Read) -> io::Result<Self> {
		let tag = ChunkTag::read(reader)?;
		let len = reader.read_u32::<LittleEndian>()?;
		Ok(ChunkHeader { tag, len })
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
	pub format_code: u16,
	pub channels: u16,
	pub sample_rate: u32,
	pub byte_rate: u32,
	pub block_align: u16,
	pub bits_per_sample: u16,
}

impl FormatDescriptor {
	pub const PCM: u16 = 1;
	/// size of the fields we care about, anything after is extension data
	pub const SIZE: u32 = 16;

	fn read(reader: &mut impl Read) -> io::Result<Self> {
		Ok(FormatDescriptor {
			format_code: reader.read_u16::<LittleEndian>()?,
			channels: reader.read_u16::<LittleEndian>()?,
			sample_rate: reader.read_u32::<LittleEndian>()?,
			byte_rate: reader.read_u32::<LittleEndian>()?,
			block_align: reader.read_u16::<LittleEndian>()?,
			bits_per_sample: reader.read_u16::<LittleEndian>()?,
		})
	}

	/// Only mono, 16 bit, uncompressed PCM gets through.
	pub fn validate(&self) -> std::result::Result<(), FormatError> {
		let checks = [
			("format code", self.format_code, Self::PCM),
			("channel count", self.channels, 1),
			("block alignment", self.block_align, 2),
			("bits per sample", self.bits_per_sample, 16),
		];
		for (field, value, expected) in checks {
			if value != expected {
				return Err(FormatError::UnsupportedProfile {
					field, value: value as u32, expected: expected as u32,
				});
			}
		}
		Ok(())
	}
}

/// Unsigned amplitudes, one per frame, 0x8000 being silence. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
#[deref(forward)]
pub struct SampleStream(Vec<u16>);

impl SampleStream {
	pub fn new(samples: Vec<u16>) -> std::result::Result<Self, FormatError> {
		if samples.is_empty() {
			return Err(FormatError::EmptyData(0));
		}
		Ok(SampleStream(samples))
	}

	/// Parse raw little endian signed 16 bit frames. A dangling odd byte is dropped.
	pub fn from_le_bytes(data: &[u8]) -> std::result::Result<Self, FormatError> {
		let samples : Vec<u16> = data
			.chunks_exact(Signed16PCM::WIDTH)
			.map(Signed16PCM::parse)
			.collect();
		if samples.is_empty() {
			return Err(FormatError::EmptyData(data.len() as u32));
		}
		if data.len() % Signed16PCM::WIDTH != 0 {
			log::warn!("ignoring trailing odd byte in data chunk");
		}
		Ok(SampleStream(samples))
	}

	pub fn samples(&self) -> &[u16] {
		&self.0
	}

	/// Borrow `len` samples starting at `start`, None if it doesn't fit
	pub fn window(&self, start: usize, len: usize) -> Option<&[u16]> {
		self.0.get(start..start.checked_add(len)?)
	}

	pub fn into_inner(self) -> Vec<u16> {
		self.0
	}
}

/// What's left of a wave file once it passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
	pub format: FormatDescriptor,
	pub samples: SampleStream,
}

impl Waveform {
	pub fn duration_secs(&self) -> f64 {
		if self.format.sample_rate == 0 {
			return 0.0;
		}
		self.samples.len() as f64 / self.format.sample_rate as f64
	}
}

/// borrow the next `len` bytes, failing like a short read if they're not there
fn take<'a>(cursor: &mut Cursor<&'a [u8]>, len: u32) -> io::Result<&'a [u8]> {
	let data: &'a [u8] = *cursor.get_ref();
	let start = cursor.position() as usize;
	let out = start.checked_add(len as usize)
		.and_then(|end| data.get(start..end))
		.ok_or_else(|| io::Error::new(
			io::ErrorKind::UnexpectedEof,
			format!("chunk wants {} bytes but only {} are left", len, data.len().saturating_sub(start)),
		))?;
	cursor.set_position((start + out.len()) as u64);
	Ok(out)
}

/// Validate a RIFF/WAVE container and pull its samples out.
///
/// Chunks must come exactly as `RIFF` `WAVE` `fmt ` `data`: nothing is skipped
/// and the first violation ends decoding. Short reads are reported as
/// [`crate::Error::Resource`], everything else as [`crate::Error::Format`].
pub fn decode(bytes: &[u8]) -> Result<Waveform> {
	if bytes.len() < 8 {
		return Err(FormatError::TooShort(bytes.len()).into());
	}
	let mut cursor = Cursor::new(bytes);

	let riff = ChunkHeader::read(&mut cursor)?;
	riff.tag.expect(ChunkTag::RIFF)?;
	if riff.len < 4 {
		return Err(FormatError::RiffTooSmall(riff.len).into());
	}

	ChunkTag::read(&mut cursor)?.expect(ChunkTag::WAVE)?;
	if riff.len < 12 {
		return Err(FormatError::RiffTooSmall(riff.len).into());
	}

	let fmt = ChunkHeader::read(&mut cursor)?;
	fmt.tag.expect(ChunkTag::FMT)?;
	if fmt.len < FormatDescriptor::SIZE {
		return Err(FormatError::FormatTooSmall(fmt.len).into());
	}
	let mut record = take(&mut cursor, fmt.len)?;
	let format = FormatDescriptor::read(&mut record)?;
	if !record.is_empty() {
		log::debug!("skipping {} bytes of format extension", record.len());
	}
	log::debug!("format chunk: {:?}", format);
	format.validate()?;

	let data = ChunkHeader::read(&mut cursor)?;
	data.tag.expect(ChunkTag::DATA)?;
	if data.len == 0 {
		return Err(FormatError::EmptyData(0).into());
	}
	let payload = take(&mut cursor, data.len)?;
	let samples = SampleStream::from_le_bytes(payload)?;
	log::debug!("decoded {} samples at {} Hz", samples.len(), format.sample_rate);

	Ok(Waveform { format, samples })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn header(tag: &[u8; 4], len: u32) -> Vec<u8> {
		let mut out = tag.to_vec();
		out.extend_from_slice(&len.to_le_bytes());
		out
	}

	fn minimal(samples: &[i16]) -> Vec<u8> {
		let mut out = header(b"RIFF", 36 + samples.len() as u32 * 2);
		out.extend_from_slice(b"WAVE");
		out.extend(header(b"fmt ", 16));
		out.extend_from_slice(&1u16.to_le_bytes());
		out.extend_from_slice(&1u16.to_le_bytes());
		out.extend_from_slice(&8000u32.to_le_bytes());
		out.extend_from_slice(&16000u32.to_le_bytes());
		out.extend_from_slice(&2u16.to_le_bytes());
		out.extend_from_slice(&16u16.to_le_bytes());
		out.extend(header(b"data", samples.len() as u32 * 2));
		for s in samples {
			out.extend_from_slice(&s.to_le_bytes());
		}
		out
	}

	#[test]
	fn tag_display_escapes_binary() {
		assert_eq!(ChunkTag::FMT.to_string(), "fmt ");
		assert_eq!(ChunkTag([b'a', 0, b'b', 0xFF]).to_string(), "a\\x00b\\xff");
	}

	#[test]
	fn decode_minimal() {
		let wave = decode(&minimal(&[0, -1, 1])).unwrap();
		assert_eq!(wave.samples.samples(), &[0x8000, 0x7FFF, 0x8001]);
		assert_eq!(wave.format.sample_rate, 8000);
		assert_eq!(wave.format.byte_rate, 16000);
	}

	#[test]
	fn short_buffer_is_format_error() {
		let err = decode(b"RIFF").unwrap_err();
		assert_eq!(err.as_format(), Some(&FormatError::TooShort(4)));
	}

	#[test]
	fn tiny_riff_size_rejected() {
		let mut bytes = minimal(&[0]);
		bytes[4..8].copy_from_slice(&3u32.to_le_bytes());
		assert_eq!(decode(&bytes).unwrap_err().as_format(), Some(&FormatError::RiffTooSmall(3)));
		bytes[4..8].copy_from_slice(&11u32.to_le_bytes());
		assert_eq!(decode(&bytes).unwrap_err().as_format(), Some(&FormatError::RiffTooSmall(11)));
	}

	#[test]
	fn single_byte_data_is_empty() {
		let mut bytes = minimal(&[]);
		let len = bytes.len();
		bytes[len - 4..].copy_from_slice(&1u32.to_le_bytes());
		bytes.push(0x42);
		assert_eq!(decode(&bytes).unwrap_err().as_format(), Some(&FormatError::EmptyData(1)));
	}

	#[test]
	fn odd_trailing_byte_dropped() {
		let stream = SampleStream::from_le_bytes(&[0x00, 0x00, 0x12]).unwrap();
		assert_eq!(stream.samples(), &[0x8000]);
	}

	#[test]
	fn window_bounds() {
		let stream = SampleStream::new(vec![1, 2, 3, 4]).unwrap();
		assert_eq!(stream.window(1, 2), Some(&[2u16, 3][..]));
		assert_eq!(stream.window(2, 2), Some(&[3u16, 4][..]));
		assert_eq!(stream.window(3, 2), None);
		assert_eq!(stream.window(usize::MAX, 2), None);
	}

	#[test]
	fn empty_stream_rejected() {
		assert_eq!(SampleStream::new(vec![]), Err(FormatError::EmptyData(0)));
	}
}
