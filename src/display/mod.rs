pub mod graph;
pub mod hex;

use crate::cfg::OutputOptions;
use crate::slicer::Slice;

pub use graph::Graph;
pub use hex::Hex;

pub trait DisplayMode {
	fn from_args(opts: &OutputOptions) -> Self where Self : Sized;
	fn render(&self, slice: &Slice) -> String;
	fn mode_str(&self) -> &'static str;
}

/// Every display mode the options ask for, in printing order
pub fn modes(opts: &OutputOptions) -> Vec<Box<dyn DisplayMode>> {
	let mut out : Vec<Box<dyn DisplayMode>> = Vec::new();
	if !opts.no_graph {
		out.push(Box::new(Graph::from_args(opts)));
	}
	if !opts.no_hex {
		out.push(Box::new(Hex::from_args(opts)));
	}
	out
}

/// Render one slice through every mode, followed by an empty line
pub fn render_all(modes: &[Box<dyn DisplayMode>], slice: &Slice) -> String {
	let mut out = String::new();
	for mode in modes {
		out.push_str(&mode.render(slice));
	}
	out.push('\n');
	out
}
