use clap::Parser;

use tsvcmd::prompt::PromptEngine;
use tsvcmd::runner::{self, RunOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "tsvcmd")]
#[command(version = VERSION)]
#[command(about = "Run a shell command for each line in a tsv file")]
#[command(after_help = "Examples:
  tsvcmd table.tsv                       print the available fields
  tsvcmd table.tsv 'mv {0}.pdf {1}.pdf'  rename pdf files")]
struct Cli {
    /// Input text file in tsv format; the first line is the header
    tsv_file: String,

    /// Shell command to perform; {0} is the line number, {1}.. the fields
    command: Option<String>,

    /// Assume yes: perform the commands without confirm
    #[arg(long)]
    yes: bool,

    /// Keep looping if a command fails
    #[arg(long)]
    force: bool,

    /// Adjust the fields so it's safe to use them as paths (replace spaces with _ etc.)
    #[arg(long)]
    escape: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let opts = RunOptions {
        auto_confirm: cli.yes,
        continue_on_failure: cli.force,
        sanitize_fields: cli.escape,
    };

    let prompt = if cli.yes {
        PromptEngine::non_interactive()
    } else {
        PromptEngine::new()
    };

    match runner::run(&cli.tsv_file, cli.command.as_deref(), &opts, &prompt) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tsvcmd: {}", err);
            std::process::ExitCode::from(err.exit_code())
        }
    }
}
