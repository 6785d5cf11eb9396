use crossterm::style::Stylize;

use crate::{cfg::OutputOptions, slicer::{Slice, LEVELS}};

use super::DisplayMode;

const CELL: &str = "   ";
const PLAIN_CELL: &str = "###";

/// Vertical bar chart, one 3 column bar per level, tallest at the top
#[derive(Debug, Clone, Default)]
pub struct Graph {
	pub color: bool,
}

impl Graph {
	fn filled(&self) -> String {
		if self.color {
			CELL.white().on_white().to_string()
		} else {
			PLAIN_CELL.into()
		}
	}
}

impl DisplayMode for Graph {
	fn from_args(opts: &OutputOptions) -> Self {
		Graph { color: !opts.no_color }
	}

	fn mode_str(&self) -> &'static str {
		"graph"
	}

	fn render(&self, slice: &Slice) -> String {
		let filled = self.filled();
		let mut out = String::new();
		for row in (0..LEVELS).rev() {
			for &level in slice.iter() {
				out.push_str(if level > row { filled.as_str() } else { CELL });
			}
			out.push('\n');
		}
		out
	}
}
