use std::io::Write;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::Serialize;

use crate::fft::{self, DEFAULT_PHASES};
use crate::message::{self, MESSAGE_LEN};
use crate::signal::load_signal;

pub const DEFAULT_INPUT_PATH: &str = "day16_input.txt";

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub input_path: String,
    pub phases: usize,
    pub parallel: bool,
    pub decode_message: bool,
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            phases: DEFAULT_PHASES,
            parallel: false,
            decode_message: false,
            json: false,
        }
    }
}

impl RunConfig {
    /// Build a config from the process arguments (`args[0]` is the program name).
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = RunConfig::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--input" => {
                    i += 1;
                    config.input_path = args.get(i).cloned().ok_or_else(|| anyhow!("missing input path"))?;
                }
                "--phases" => {
                    i += 1;
                    config.phases = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing phase count"))?
                        .parse::<usize>()
                        .context("invalid phase count")?;
                }
                "--parallel" => {
                    config.parallel = true;
                }
                "--message" => {
                    config.decode_message = true;
                }
                "--json" => {
                    config.json = true;
                }
                other => {
                    return Err(anyhow!("unknown arg: {}", other));
                }
            }
            i += 1;
        }

        Ok(config)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub input_path: String,
    pub length: usize,
    pub phases: usize,
    pub parallel: bool,
    pub digits: String,
    pub head: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub elapsed_ms: u128,
}

impl RunReport {
    /// Label line followed by the final digits.
    pub fn render_text(&self) -> String {
        let mut out = format!("After {} phases:\n{}", self.phases, self.digits);
        if let Some(message) = &self.message {
            out.push_str(&format!("\nMessage: {}", message));
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load the input, run the configured phases and collect the results.
/// `progress` is fed the completed fraction of phases.
pub fn execute<F>(config: &RunConfig, mut progress: F) -> Result<RunReport>
where
    F: FnMut(f32),
{
    let started = Instant::now();
    let signal = load_signal(&config.input_path)?;

    let message = if config.decode_message {
        let decoded = message::decode_message(&signal, config.phases)
            .with_context(|| format!("decoding message from {}", config.input_path))?;
        Some(decoded)
    } else {
        None
    };

    let length = signal.len();
    let total = config.phases.max(1) as f32;
    let result = fft::run_with_progress(signal, config.phases, config.parallel, |done| {
        progress(done as f32 / total)
    });

    Ok(RunReport {
        input_path: config.input_path.clone(),
        length,
        phases: config.phases,
        parallel: config.parallel,
        digits: result.to_string(),
        head: result.first_digits(MESSAGE_LEN),
        message,
        elapsed_ms: started.elapsed().as_millis(),
    })
}

/// Write the report to `out`. The text form ends right after the last digit.
pub fn write_report<W: Write>(report: &RunReport, json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", report.render_json()?)?;
    } else {
        write!(out, "{}", report.render_text())?;
    }
    out.flush()?;
    Ok(())
}

pub fn print_usage() {
    eprintln!("Usage: fft-signal-decoder [--input day16_input.txt] [--phases 100] [--parallel] [--message] [--json]");
}

/// Parse `args`, run the decoder and write the result to `out`.
pub fn run_cli<W: Write>(args: &[String], out: &mut W) -> Result<()> {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let config = RunConfig::from_args(args)?;
    debug!("{:?}", config);

    let report = execute(&config, |_| {})?;
    write_report(&report, config.json, out)
}
