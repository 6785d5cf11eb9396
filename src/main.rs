use std::{io::{self, Write}, process::ExitCode};

use clap::Parser;

use wavslice::{
	cfg::WavsliceArgs,
	display,
	export::FtiInstrument,
	input,
	slicer,
	Error,
};

fn main() -> ExitCode {
	env_logger::init();
	let args = WavsliceArgs::parse();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(Error::Resource(e)) if e.kind() == io::ErrorKind::NotFound => {
			eprintln!("[!] Nonexistent file: {}", args.path.display());
			ExitCode::FAILURE
		},
		Err(Error::Format(e)) => {
			eprintln!("[!] Unsupported input {}: {}", args.path.display(), e);
			ExitCode::FAILURE
		},
		Err(e) => {
			eprintln!("[!] Error slicing {}: {}", args.path.display(), e);
			ExitCode::FAILURE
		},
	}
}

fn run(args: &WavsliceArgs) -> wavslice::Result<()> {
	let wave = input::file::load(&args.path)?;
	log::info!(
		"loaded {} samples ({:.2}s at {} Hz)",
		wave.samples.len(), wave.duration_secs(), wave.format.sample_rate,
	);

	let spec = args.slicing.spec(&wave.format);
	let slices = slicer::slice(&wave.samples, &spec)?;

	let modes = display::modes(&args.output);
	if !modes.is_empty() {
		let mut stdout = io::stdout().lock();
		for slice in &slices {
			stdout.write_all(display::render_all(&modes, slice).as_bytes())?;
		}
		stdout.flush()?;
	}

	if let Some(path) = &args.output.output {
		FtiInstrument::new(&args.output.name, &slices).save(path)?;
	}

	Ok(())
}
