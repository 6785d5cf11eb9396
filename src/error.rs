use crate::input::ChunkTag;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0}")]
	Resource(#[from] std::io::Error),

	#[error("{0}")]
	Format(#[from] FormatError),
}

impl Error {
	pub fn is_format(&self) -> bool {
		matches!(self, Error::Format(_))
	}

	pub fn is_resource(&self) -> bool {
		matches!(self, Error::Resource(_))
	}

	pub fn as_format(&self) -> Option<&FormatError> {
		match self {
			Error::Format(e) => Some(e),
			Error::Resource(_) => None,
		}
	}
}

/// Anything wrong with the input itself, or with how it was asked to be sliced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
	#[error("container is {0} bytes, too short for a RIFF header")]
	TooShort(usize),

	#[error("expected '{expected}' chunk, found '{found}'")]
	UnexpectedTag { expected: ChunkTag, found: ChunkTag },

	#[error("RIFF chunk declares {0} bytes, too small to hold a wave")]
	RiffTooSmall(u32),

	#[error("format chunk declares {0} bytes, at least 16 required")]
	FormatTooSmall(u32),

	#[error("unsupported {field}: {value} (only {expected} is supported)")]
	UnsupportedProfile { field: &'static str, value: u32, expected: u32 },

	#[error("data chunk holds no whole sample ({0} bytes)")]
	EmptyData(u32),

	#[error("slice count must be positive")]
	NoSlices,

	#[error("resolution must be positive")]
	NoResolution,

	#[error("slices would hold no samples ({samples} samples across {slices} slices)")]
	EmptySlice { samples: usize, slices: usize },

	#[error("requested {requested} samples per slice but slices only hold {available}")]
	SliceTooLong { requested: usize, available: usize },

	#[error("window {index} ({start}..{end}) runs past the end of audio ({len} samples)")]
	WindowOverrun { index: usize, start: usize, end: usize, len: usize },

	#[error("{field} does not fit the instrument file ({value})")]
	ExportOverflow { field: &'static str, value: usize },

	#[error("slice {index} has {found} levels, expected {expected}")]
	RaggedSlices { index: usize, found: usize, expected: usize },
}
