use std::str::FromStr;

use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum Tone {
	C, Db, D, Eb, E, F, Gb, G, Ab, A, Bb, B,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unrecognized note '{0}'")]
pub struct InvalidNote(pub String);

impl Tone {
	/// frequency in octave 0
	pub fn freq(&self) -> f32 {
		match self {
			Tone::C  => 16.35,
			Tone::Db => 17.32,
			Tone::D  => 18.35,
			Tone::Eb => 19.45,
			Tone::E  => 20.60,
			Tone::F  => 21.83,
			Tone::Gb => 23.12,
			Tone::G  => 24.50,
			Tone::Ab => 25.96,
			Tone::A  => 27.50,
			Tone::Bb => 29.14,
			Tone::B  => 30.87,
		}
	}
}

impl FromStr for Tone {
	type Err = InvalidNote;

	fn from_str(txt: &str) -> Result<Self, Self::Err> {
		match txt {
			"C"          => Ok(Tone::C),
			"C#" | "Db"  => Ok(Tone::Db),
			"D"          => Ok(Tone::D),
			"D#" | "Eb"  => Ok(Tone::Eb),
			"E"          => Ok(Tone::E),
			"F"          => Ok(Tone::F),
			"F#" | "Gb"  => Ok(Tone::Gb),
			"G"          => Ok(Tone::G),
			"G#" | "Ab"  => Ok(Tone::Ab),
			"A"          => Ok(Tone::A),
			"A#" | "Bb"  => Ok(Tone::Bb),
			"B"          => Ok(Tone::B),
			_            => Err(InvalidNote(txt.into())),
		}
	}
}

/// A tone in a given octave, written like `A4`, `Db2` or `F#` (octave 4)
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
#[display(fmt = "{}{}", tone, octave)]
pub struct Note {
	pub tone: Tone,
	pub octave: u32,
}

impl Note {
	pub const DEFAULT_OCTAVE: u32 = 4;
	pub const MAX_OCTAVE: u32 = 9;

	pub fn freq(&self) -> f32 {
		self.tone.freq() * 2f32.powi(self.octave as i32)
	}

	/// How many samples one cycle of this note lasts at `sample_rate`
	pub fn period(&self, sample_rate: u32) -> usize {
		(sample_rate as f32 / self.freq()).round() as usize
	}
}

impl FromStr for Note {
	type Err = InvalidNote;

	fn from_str(txt: &str) -> Result<Self, Self::Err> {
		let split = txt.find(|c: char| c.is_ascii_digit()).unwrap_or(txt.len());
		let (tone, octave) = txt.split_at(split);
		let tone = tone.parse::<Tone>().map_err(|_| InvalidNote(txt.into()))?;
		let octave = if octave.is_empty() {
			Note::DEFAULT_OCTAVE
		} else {
			octave.parse::<u32>().map_err(|_| InvalidNote(txt.into()))?
		};
		if octave > Note::MAX_OCTAVE {
			return Err(InvalidNote(txt.into()));
		}
		Ok(Note { tone, octave })
	}
}
