use std::path::PathBuf;

use clap::Parser;

use crate::{export::DEFAULT_NAME, input::FormatDescriptor, music::Note, slicer::SliceSpec};

const HELP_TEMPLATE : &str = "{before-help}\
{name} {version} -- by {author}
{about}

{usage-heading} {usage}

{all-args}{after-help}
";

/// chop a mono 16 bit wave file into 4 bit wavetables
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, help_template = HELP_TEMPLATE)]
pub struct WavsliceArgs {
	/// wave file to slice
	pub path: PathBuf,

	#[command(flatten)]
	pub slicing: SliceOptions,

	#[command(flatten)]
	pub output: OutputOptions,
}

#[derive(Debug, Clone, Parser)]
pub struct SliceOptions {
	/// amount of slices to chop the file into
	#[arg(short, long, value_name = "N", default_value_t = 16)]
	pub count: usize,

	/// samples read for each slice, defaults to the whole slice
	#[arg(short, long, value_name = "SAMPLES")]
	pub length: Option<usize>,

	/// levels in each generated waveform
	#[arg(short, long, value_name = "N", default_value_t = 16)]
	pub size: usize,

	/// extend right edge of rightmost slice to end of audio
	#[arg(short, long, default_value_t = false)]
	pub extend: bool,

	/// read exactly one period of given note for each slice (overrides length option)
	#[arg(long, value_name = "NOTE")]
	pub tune: Option<Note>,
}

impl Default for SliceOptions {
	fn default() -> Self {
		SliceOptions { count: 16, length: None, size: 16, extend: false, tune: None }
	}
}

impl SliceOptions {
	/// Samples per slice, from a tuned note if any. Needs the sample rate for that.
	pub fn length(&self, format: &FormatDescriptor) -> Option<usize> {
		match &self.tune {
			Some(note) => {
				let period = note.period(format.sample_rate);
				log::debug!("tuned to {} ({} Hz): {} samples per slice", note, note.freq(), period);
				Some(period)
			},
			None => self.length,
		}
	}

	pub fn spec(&self, format: &FormatDescriptor) -> SliceSpec {
		let spec = SliceSpec::new(self.count, self.size).with_extend_edge(self.extend);
		match self.length(format) {
			Some(length) => spec.with_samples_per_slice(length),
			None => spec,
		}
	}
}

#[derive(Debug, Clone, Parser)]
pub struct OutputOptions {
	/// write slices as waves of a FamiTracker N163 instrument
	#[arg(short, long, value_name = "PATH")]
	pub output: Option<PathBuf>,

	/// instrument name
	#[arg(long, default_value = DEFAULT_NAME)]
	pub name: String,

	/// don't draw bar graphs
	#[arg(long, default_value_t = false)]
	pub no_graph: bool,

	/// don't print levels
	#[arg(long, default_value_t = false)]
	pub no_hex: bool,

	/// draw graphs with plain characters
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl Default for OutputOptions {
	fn default() -> Self {
		OutputOptions {
			output: None,
			name: DEFAULT_NAME.into(),
			no_graph: false,
			no_hex: false,
			no_color: false,
		}
	}
}
