use std::env;
use std::io;

use anyhow::Result;

use fft_signal_decoder::runner::run_cli;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    run_cli(&args, &mut io::stdout().lock())
}
