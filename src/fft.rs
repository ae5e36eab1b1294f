use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::pattern::PatternGenerator;
use crate::signal::Signal;

pub const DEFAULT_PHASES: usize = 100;

/// One output digit: the input weighted by the generator's stream.
fn output_digit(input: &[u8], pg: &mut PatternGenerator) -> u8 {
    let sum: i64 = input
        .iter()
        .map(|&d| d as i64 * pg.next_value() as i64)
        .sum();
    (sum.abs() % 10) as u8
}

/// Apply a single phase, threading one generator through every output.
pub fn transform(input: &[u8]) -> Vec<u8> {
    let mut pg = PatternGenerator::new();
    let mut next_phase = Vec::with_capacity(input.len());

    for _ in 0..input.len() {
        next_phase.push(output_digit(input, &mut pg));
        pg.advance_to_next_output();
    }

    next_phase
}

/// Same result as [`transform`], with output positions computed on the rayon pool.
pub fn transform_parallel(input: &[u8]) -> Vec<u8> {
    (0..input.len())
        .into_par_iter()
        .map(|i| output_digit(input, &mut PatternGenerator::for_output(i)))
        .collect()
}

pub fn run(signal: Signal, passes: usize) -> Signal {
    run_with_progress(signal, passes, false, |_| {})
}

pub fn run_parallel(signal: Signal, passes: usize) -> Signal {
    run_with_progress(signal, passes, true, |_| {})
}

/// Apply `passes` phases in sequence. `progress` receives the number of
/// completed phases after each one.
pub fn run_with_progress<F>(signal: Signal, passes: usize, parallel: bool, mut progress: F) -> Signal
where
    F: FnMut(usize),
{
    let started = Instant::now();
    let mut phase = signal.into_digits();

    for phase_idx in 0..passes {
        phase = if parallel {
            transform_parallel(&phase)
        } else {
            transform(&phase)
        };
        debug!("Phase {}/{} done", phase_idx + 1, passes);
        progress(phase_idx + 1);
    }

    info!(
        "Ran {} phases over {} digits in {:.2?}{}",
        passes,
        phase.len(),
        started.elapsed(),
        if parallel { " (parallel)" } else { "" }
    );
    Signal::from_digits(phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn signal(text: &str) -> Signal {
        text.parse().unwrap()
    }

    #[test]
    fn test_single_phase_example() {
        assert_eq!(transform(&[1, 2, 3, 4, 5, 6, 7, 8]), vec![4, 8, 2, 2, 6, 1, 5, 8]);
    }

    #[test]
    fn test_four_phase_example() {
        let out = run(signal("12345678"), 4);
        assert_eq!(out.digits(), &[0, 1, 0, 2, 9, 4, 9, 8]);
    }

    #[test]
    fn test_hundred_phase_examples() {
        let cases = [
            ("80871224585914546619083218645595", "24176176"),
            ("19617804207202209144916044189917", "73745418"),
            ("69317163492948606335995924319873", "52432133"),
        ];
        for (input, expected) in cases {
            let out = run(signal(input), DEFAULT_PHASES);
            assert_eq!(out.first_digits(8), expected, "input {}", input);
        }
    }

    #[test]
    fn test_single_digit_is_kept() {
        for d in 0..10u8 {
            assert_eq!(transform(&[d]), vec![d]);
        }
    }

    #[test]
    fn test_length_preserved() {
        assert!(transform(&[]).is_empty());
        assert!(transform_parallel(&[]).is_empty());
        for len in 1..20 {
            let input = vec![7u8; len];
            assert_eq!(transform(&input).len(), len);
        }
    }

    #[test]
    fn test_zero_passes_is_identity() {
        let input = signal("5551234");
        assert_eq!(run(input.clone(), 0), input);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let copy = input.clone();
        let _ = transform(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let len = rng.gen_range(1..200);
            let input: Vec<u8> = (0..len).map(|_| rng.gen_range(0..10)).collect();
            assert_eq!(transform_parallel(&input), transform(&input));
        }

        let input = signal("80871224585914546619083218645595");
        assert_eq!(run_parallel(input.clone(), 10), run(input, 10));
    }

    #[test]
    fn test_progress_reports_each_phase() {
        let mut seen = Vec::new();
        run_with_progress(signal("12345678"), 3, false, |done| seen.push(done));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
