mod args;
mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use args::MeetingArgs;
use clap::{Parser, Subcommand};
use commands::Plan;
use config::Defaults;
use meetslice_core::Format;

#[derive(Parser)]
#[command(name = "meetslice")]
#[command(
    about = "Slice a time window into back-to-back meetings and export them as ICS, CSV or HTML"
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how many meetings fit in the window
    Count {
        #[command(flatten)]
        meeting: MeetingArgs,

        /// Print only the number
        #[arg(short, long)]
        quiet: bool,
    },
    /// List the generated meeting slots
    Slots {
        #[command(flatten)]
        meeting: MeetingArgs,

        /// Print slots as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the meetings as an ICS, CSV or HTML document
    Render {
        /// Output format: ics, csv or html
        format: Format,

        #[command(flatten)]
        meeting: MeetingArgs,

        /// Strict RFC 5545 ICS (escaped text, CRLF, folded lines)
        #[arg(long)]
        strict: bool,

        /// Wrap HTML rows in a complete table
        #[arg(long)]
        standalone: bool,

        /// Print a base64 data: URI instead of the document
        #[arg(long)]
        data_uri: bool,

        /// Save to <output_dir>/<summary>.<format>
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Write the document to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show config file location and defaults
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let defaults = Defaults::load()?;

    match cli.command {
        Commands::Count { meeting, quiet } => {
            let plan = Plan::build(&meeting, &defaults)?;
            commands::count::run(&plan, quiet)
        }
        Commands::Slots { meeting, json } => {
            let plan = Plan::build(&meeting, &defaults)?;
            commands::slots::run(&plan, json)
        }
        Commands::Render {
            format,
            meeting,
            strict,
            standalone,
            data_uri,
            save,
            output,
        } => {
            let plan = Plan::build(&meeting, &defaults)?;
            let output = commands::render::Output {
                strict,
                standalone,
                data_uri,
                save,
                path: output,
            };
            commands::render::run(format, &plan, &output, &defaults)
        }
        Commands::Config => commands::config::run(&defaults),
    }
}
