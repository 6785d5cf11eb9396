/// Added to every signed sample to move silence to the middle of the unsigned range
pub const DC_OFFSET: u16 = 0x8000;

/// Move a signed 16 bit sample into unsigned range, 0x8000 being silence.
///
/// Every unsigned amplitude in this crate comes out of here, so there's only
/// one place where the offset convention lives.
#[inline]
pub fn to_unsigned(sample: i16) -> u16 {
	(sample as u16).wrapping_add(DC_OFFSET)
}

/// Inverse of [`to_unsigned`], mostly handy to build test signals
#[inline]
pub fn to_signed(amplitude: u16) -> i16 {
	amplitude.wrapping_sub(DC_OFFSET) as i16
}

pub trait SampleParser<T> {
	fn parse(data: &[u8]) -> T;
}

/// little endian signed 16 bit samples, normalized to unsigned amplitudes
pub struct Signed16PCM;

impl Signed16PCM {
	/// bytes per sample
	pub const WIDTH: usize = 2;
}

impl SampleParser<u16> for Signed16PCM {
	fn parse(chunk: &[u8]) -> u16 {
		to_unsigned(i16::from_le_bytes([chunk[0], chunk[1]]))
	}
}
