mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};
use commands::CommandHandler;
use enconv::error;
use io::{InputSource, OutputDest};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Detect { r#in, locale, json } => Box::new(commands::DetectCommand {
            input: InputSource::parse(&r#in),
            locale: locale.into(),
            json,
        }),

        Command::Candidates {
            locale,
            detected,
            r#in,
            json,
        } => Box::new(commands::CandidatesCommand {
            locale: locale.into(),
            detected,
            input: r#in.as_deref().map(InputSource::parse),
            json,
        }),

        Command::Convert {
            r#in,
            out,
            encoding,
            locale,
            data_uri,
            force,
        } => Box::new(commands::ConvertCommand {
            input: InputSource::parse(&r#in),
            output: OutputDest::parse(&out),
            encoding,
            locale: locale.into(),
            data_uri,
            force,
        }),

        Command::Preview {
            r#in,
            encoding,
            locale,
            lines,
        } => Box::new(commands::PreviewCommand {
            input: InputSource::parse(&r#in),
            encoding,
            locale: locale.into(),
            lines,
        }),

        Command::Info { name, json } => Box::new(commands::InfoCommand { name, json }),
    };

    handler.execute()
}
