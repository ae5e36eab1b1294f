pub mod fft;
pub mod message;
pub mod pattern;
pub mod runner;
pub mod signal;

pub use fft::{run, run_parallel, transform, transform_parallel, DEFAULT_PHASES};
pub use pattern::PatternGenerator;
pub use signal::{load_signal, parse, Signal, SignalError};
