use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the numeric -v level onto a verbosity. 3 is the default.
    pub fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Encode, Decode, Test
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Encode,
    Decode,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Suffix added to encoded files when no output name is given.
pub const SUFFIX: &str = ".huff";

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman text coder: writes codewords as literal 0/1 characters behind a code table header",
    long_about = None)]
pub struct Args {
    /// File to read for input
    #[clap()]
    filename: String,

    /// File to write. Defaults to <filename>.huff when encoding
    #[clap()]
    output: Option<String>,

    /// Encode the input file (default)
    #[clap(short = 'z', long = "encode", conflicts_with_all = &["decode", "test"])]
    encode: bool,

    /// Decode the input container
    #[clap(short = 'd', long = "decode", conflicts_with = "test")]
    decode: bool,

    /// Check that a container decodes cleanly, write nothing
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. 0 silent, 1 errors, 2 warnings, 3 info, 4 debug, 5 traces the tree
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Defines all user settable options to control program behavior
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Name of file to read for input
    pub file: String,
    /// Optional name of the file to write
    pub out_file: Option<String>,
    /// Encode/Decode/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            out_file: None,
            op_mode: Mode::Encode,
            output: Output::File,
            verbose: Verbosity::Info,
        }
    }

    /// Copy parsed command line arguments into our internal structure.
    pub fn from_args(args: Args) -> Self {
        let mut opts = HuffOpts::new(&args.filename);
        opts.out_file = args.output;
        if args.encode {
            opts.op_mode = Mode::Encode
        };
        if args.decode {
            opts.op_mode = Mode::Decode
        };
        if args.test {
            opts.op_mode = Mode::Test
        };
        if args.stdout {
            opts.output = Output::Stdout
        };
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_level(args.v)
        };
        opts
    }

    /// Name of the file that receives the output. An explicit name wins. Otherwise encoding
    /// appends ".huff", and decoding strips it (or appends ".out" when it is missing).
    pub fn output_name(&self) -> String {
        if let Some(name) = &self.out_file {
            return name.clone();
        }
        match self.op_mode {
            Mode::Encode => format!("{}{}", self.file, SUFFIX),
            Mode::Decode | Mode::Test => match self.file.strip_suffix(SUFFIX) {
                Some(stem) if !stem.is_empty() => stem.to_string(),
                _ => format!("{}.out", self.file),
            },
        }
    }
}

/// Parse the command line, set the log level, and report what we are about to do.
pub fn init_huff_opts() -> HuffOpts {
    let opts = HuffOpts::from_args(Args::parse());

    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file);
    match opts.output {
        Output::Stdout => warn!("Sending output to stdout"),
        Output::File if opts.op_mode != Mode::Test => {
            info!("Sending output to the file {}", opts.output_name())
        }
        Output::File => {}
    }
    info!("---- Initialization End ----\n");
    opts
}
