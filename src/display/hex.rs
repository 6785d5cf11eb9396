use crate::{cfg::OutputOptions, slicer::Slice};

use super::DisplayMode;

/// Levels as space separated, 2 column wide numbers, ready to paste in a tracker
#[derive(Debug, Clone, Default)]
pub struct Hex;

impl DisplayMode for Hex {
	fn from_args(_opts: &OutputOptions) -> Self {
		Hex
	}

	fn mode_str(&self) -> &'static str {
		"hex"
	}

	fn render(&self, slice: &Slice) -> String {
		let mut out = slice
			.iter()
			.map(|level| format!("{:<2}", level))
			.collect::<Vec<_>>()
			.join(" ");
		out.push('\n');
		out
	}
}
