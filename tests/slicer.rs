mod common;

use common::wav;
use wavslice::{
	decode,
	input::format::to_signed,
	slicer::{plan, quantize, slice, SliceSpec, LEVELS},
	FormatError, SampleStream,
};

fn sine(len: usize, cycles: f64) -> SampleStream {
	SampleStream::new(
		(0..len)
			.map(|i| {
				let phase = i as f64 / len as f64 * cycles * std::f64::consts::TAU;
				(32767.5 + phase.sin() * 32767.0) as u16
			})
			.collect()
	).unwrap()
}

#[test]
fn test_ramp_through_container() {
	// raw signed values chosen so the unsigned stream climbs 0x0000, 0x2000, ...
	let raw: Vec<i16> = (0..8u16).map(|i| to_signed(i * 0x2000)).collect();
	let wave = decode(&wav(&raw, 8000)).unwrap();
	let spec = SliceSpec::new(1, 4).with_samples_per_slice(8);
	let slices = slice(&wave.samples, &spec).unwrap();
	assert_eq!(slices.len(), 1);
	assert_eq!(slices[0].levels(), &[0, 4, 8, 12]);
}

#[test]
fn test_silence_quantizes_to_midpoint() {
	let wave = decode(&wav(&[0; 64], 8000)).unwrap();
	let slices = slice(&wave.samples, &SliceSpec::new(4, 8)).unwrap();
	assert!(slices.iter().all(|s| s.iter().all(|&l| l == 8)));
}

#[test]
fn test_slicing_is_deterministic() {
	let stream = sine(4410, 13.0);
	let spec = SliceSpec::new(9, 32).with_samples_per_slice(300).with_extend_edge(true);
	assert_eq!(slice(&stream, &spec).unwrap(), slice(&stream, &spec).unwrap());
}

#[test]
fn test_window_starts() {
	let stream = sine(100, 1.0);
	let starts = |spec: SliceSpec| -> Vec<usize> {
		plan(&stream, &spec).unwrap().windows().iter().map(|w| w.start).collect()
	};
	assert_eq!(starts(SliceSpec::new(3, 16)), vec![0, 33, 66]);
	assert_eq!(
		starts(SliceSpec::new(3, 16).with_samples_per_slice(40).with_extend_edge(true)),
		vec![0, 33, 60],
	);
	assert_eq!(starts(SliceSpec::new(7, 16)), vec![0, 14, 28, 42, 57, 71, 85]);
}

#[test]
fn test_levels_match_quantized_samples() {
	let stream = sine(1000, 3.0);
	let spec = SliceSpec::new(5, 10);
	let plan = plan(&stream, &spec).unwrap();
	let slices = plan.sample(&stream).unwrap();
	for (window, slice) in plan.windows().iter().zip(&slices) {
		for (j, &level) in slice.iter().enumerate() {
			let index = window.start + window.len * j / spec.resolution();
			assert_eq!(level, quantize(stream[index]));
			assert!(level < LEVELS);
		}
	}
}

#[test]
fn test_errors_before_output() {
	let stream = sine(100, 1.0);
	let err = slice(&stream, &SliceSpec::new(3, 16).with_samples_per_slice(34)).unwrap_err();
	assert!(err.is_format());
	assert_eq!(err.as_format(), Some(&FormatError::SliceTooLong { requested: 34, available: 33 }));
}
