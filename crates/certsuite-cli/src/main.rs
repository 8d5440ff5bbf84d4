use clap::Parser;

mod cli;
mod cmd;
mod error;
mod io;
mod logging;

pub use cli::{ClaimCommand, Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Claim {
            command: ClaimCommand::Compare { claim1, claim2 },
        } => {
            if *claim1 == PathOrStdin::Stdin && *claim2 == PathOrStdin::Stdin {
                return Err(CliError::BothStdin);
            }
            let content1 = io::read_input(claim1, cli.max_file_size)?;
            let content2 = io::read_input(claim2, cli.max_file_size)?;
            cmd::claim_compare::run(&content1, &content2, cli.format)
        }
    }
}
