use std::{fs::File, io::Read, path::Path};

use super::{decode, Waveform};

/// Read a whole wave file in memory and decode it.
///
/// The file handle only lives inside this call, whatever way it exits.
pub fn load(path: impl AsRef<Path>) -> crate::Result<Waveform> {
	let path = path.as_ref();
	let buffer = {
		let mut file = File::open(path)?;
		let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
		let mut buffer = Vec::with_capacity(size);
		file.read_to_end(&mut buffer)?;
		buffer
	};
	log::debug!("read {} bytes from {}", buffer.len(), path.display());
	decode(&buffer)
}
