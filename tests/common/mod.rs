//! Builds wave files byte by byte, so tests can break them on purpose

#![allow(dead_code)]

pub const RIFF_TAG: usize = 0;
pub const RIFF_SIZE: usize = 4;
pub const WAVE_TAG: usize = 8;
pub const FMT_TAG: usize = 12;
pub const FMT_SIZE: usize = 16;
pub const FORMAT_CODE: usize = 20;
pub const CHANNELS: usize = 22;
pub const SAMPLE_RATE: usize = 24;
pub const BYTE_RATE: usize = 28;
pub const BLOCK_ALIGN: usize = 32;
pub const BITS_PER_SAMPLE: usize = 34;
pub const DATA_TAG: usize = 36;
pub const DATA_SIZE: usize = 40;
pub const DATA: usize = 44;

/// mono 16 bit PCM
pub fn wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
	let data_size = (samples.len() * 2) as u32;
	let mut buf = Vec::with_capacity(DATA + samples.len() * 2);

	buf.extend_from_slice(b"RIFF");
	buf.extend_from_slice(&(36 + data_size).to_le_bytes());
	buf.extend_from_slice(b"WAVE");

	buf.extend_from_slice(b"fmt ");
	buf.extend_from_slice(&16u32.to_le_bytes());
	buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
	buf.extend_from_slice(&1u16.to_le_bytes()); // mono
	buf.extend_from_slice(&sample_rate.to_le_bytes());
	buf.extend_from_slice(&(sample_rate * 2).to_le_bytes());
	buf.extend_from_slice(&2u16.to_le_bytes());
	buf.extend_from_slice(&16u16.to_le_bytes());

	buf.extend_from_slice(b"data");
	buf.extend_from_slice(&data_size.to_le_bytes());
	for &s in samples {
		buf.extend_from_slice(&s.to_le_bytes());
	}

	buf
}

pub fn set_u16(buf: &mut [u8], at: usize, value: u16) {
	buf[at..at + 2].copy_from_slice(&value.to_le_bytes());
}

pub fn set_u32(buf: &mut [u8], at: usize, value: u32) {
	buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn set_tag(buf: &mut [u8], at: usize, tag: &[u8; 4]) {
	buf[at..at + 4].copy_from_slice(tag);
}
