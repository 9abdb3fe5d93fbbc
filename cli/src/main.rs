#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

use clap::Parser;
use error_chain::{ChainedError, ExitCode};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod io;
mod omnitigs;
mod verify;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        Omnitigs(::omnitigs::error::Error, ::omnitigs::error::ErrorKind);
    }

    errors {
        Parse(line: usize, message: String) {
            description("the input graph file could not be parsed")
            display("the input graph file could not be parsed in line {}: {}", line, message)
        }

        MalformedFastgHeader(header: String, reason: String) {
            description("a FASTG header is not of the form NAME:SUCCESSOR,...; or NAME;")
            display("malformed FASTG header '{}': {}", header, reason)
        }

        UnknownNode(name: String) {
            description("a node name was referenced that does not exist in the graph")
            display("unknown node name: '{}'", name)
        }

        UnknownFileFormat(format: String) {
            description("the given file format is not supported")
            display("unknown file format: '{}', expected one of 'fastg' or 'edgelist'", format)
        }
    }
}

#[derive(Parser)]
#[clap(name = "Safe Walk Omnitigs", version = env!("CARGO_PKG_VERSION"), author = "Sebastian Schmidt <sebastian.schmidt@helsinki.fi>")]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Prints statistics about the input graph, and saves it back to disc as edge list if --output is given."
    )]
    Verify(verify::VerifyCommand),
    #[clap(about = "Computes the maximal safe walks of the input graph by safe walk extension.")]
    ComputeOmnitigs(omnitigs::ComputeOmnitigsCommand),
}

// The main is unpacked from an error-chain macro.
// The real main is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    match &options.subcommand {
        Command::Verify(subcommand) => verify::verify(options, subcommand),
        Command::ComputeOmnitigs(subcommand) => omnitigs::compute_omnitigs(options, subcommand),
    }?;

    info!("Done");
    Ok(())
}
