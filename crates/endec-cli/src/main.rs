/// `endec` command-line tool: decode fixed-width and LEB128 integers from
/// hex-encoded byte buffers.
///
/// # Command overview
///
/// ```text
/// endec <COMMAND> [OPTIONS]
///
/// Commands:
///   demo    Decode the built-in example buffer (E5 8E 26 01)
///   read    Decode a comma-separated field layout from a hex buffer
///   peek    Read one field at an explicit position without consuming
///   help    Print help information
///
/// Global options:
///   --endian <little|big>   Byte order for fixed-width fields [default: little]
///   -v, --verbose           Raise log level (-v debug, -vv trace)
///   -h, --help              Print help
///   -V, --version           Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                       |
/// |------|-----------------------------------------------|
/// | 0    | Success                                       |
/// | 1    | Error (bad hex, bad layout, truncated input)  |
///
/// Errors and log output go to stderr so stdout can be piped cleanly.
/// `RUST_LOG` overrides the level chosen by `-v`.
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use endec_wire::Endian;

mod cmd_demo;
mod cmd_peek;
mod cmd_read;
mod field;
mod input;

use field::Field;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "endec", version, about = "Bounds-checked binary integer decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Byte order for fixed-width fields: `little` or `big`.
    #[arg(long, global = true, default_value = "little")]
    endian: Endian,

    /// Raise log verbosity (repeat for more).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode the built-in example buffer and print the totals.
    Demo,
    /// Decode a field layout from a hex buffer, consuming front to back.
    Read(ReadArgs),
    /// Read a single field at a position without consuming.
    Peek(PeekArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `endec read`.
///
/// ```text
/// ┌─────────────┬──────────────────────────────────────────────────────┐
/// │ Flag        │ Effect                                               │
/// ├─────────────┼──────────────────────────────────────────────────────┤
/// │ --layout    │ Fields to decode, e.g. `uleb32,u8,bytes:4`           │
/// │ --offset N  │ Start the cursor N bytes into the buffer             │
/// └─────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ReadArgs {
    /// Input bytes as hex (spaces, `:` and `_` are ignored).
    pub hex: String,

    /// Comma-separated field layout.
    #[arg(short, long)]
    pub layout: String,

    /// Initial cursor position.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

/// Arguments for `endec peek`.
#[derive(clap::Args)]
pub struct PeekArgs {
    /// Input bytes as hex.
    pub hex: String,

    /// Byte position to read at.
    #[arg(long)]
    pub at: usize,

    /// Field type to read, e.g. `u32` or `sleb64`.
    #[arg(long = "as", value_name = "FIELD")]
    pub field: Field,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Demo => cmd_demo::run(cli.endian),
        Commands::Read(args) => cmd_read::run(&args, cli.endian),
        Commands::Peek(args) => cmd_peek::run(&args, cli.endian),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
