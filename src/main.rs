//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use hufftext::compression::compress::compress;
use hufftext::compression::decompress::{decompress, test_container};
use hufftext::tools::cli::{init_huff_opts, Mode};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> ExitCode {
    // Log to stderr so --stdout output stays clean. The real level is set from the command line.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger unavailable: {}", e);
    }

    let options = init_huff_opts();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Encode => compress(&options).map(|_| ()),
        Mode::Decode => decompress(&options).map(|_| ()),
        Mode::Test => test_container(&options).map(|_| ()),
    };

    match result {
        Ok(()) => {
            info!("Done.\n");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}: {}", options.file, e);
            ExitCode::FAILURE
        }
    }
}
