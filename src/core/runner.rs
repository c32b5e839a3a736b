//! The preview / confirm / execute loop over a tsv file.

use crate::error::{Error, Result};
use crate::executor;
use crate::render;
use crate::tsv::{self, Table};
use crate::utils::prompt::{PromptEngine, YesNoPrompt};

/// Options threaded from the CLI into the run loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip the preview and confirmation step (`--yes`).
    pub auto_confirm: bool,
    /// Keep looping when a command exits nonzero (`--force`).
    pub continue_on_failure: bool,
    /// Sanitize field values before substitution (`--escape`).
    pub sanitize_fields: bool,
}

/// Drive the full pipeline for one tsv file.
///
/// Without a template this prints the available placeholders and stops.
/// With one, every row's command is previewed and confirmed (unless
/// `auto_confirm` is set), then executed in file order. A declined
/// confirmation runs nothing and is not an error.
pub fn run(
    path: &str,
    template: Option<&str>,
    opts: &RunOptions,
    prompt: &PromptEngine,
) -> Result<()> {
    let table = tsv::load(path)?;

    let Some(template) = template else {
        println!("{}", render::available_fields(table.header()));
        return Ok(());
    };

    let confirmed = opts.auto_confirm || confirm_preview(&table, template, opts, prompt);
    if !confirmed {
        return Ok(());
    }

    execute_rows(&table, template, opts)
}

/// Print every rendered command and the field summary, then ask.
fn confirm_preview(table: &Table, template: &str, opts: &RunOptions, prompt: &PromptEngine) -> bool {
    for (ordinal, fields) in table.rows() {
        println!(
            "{}",
            render::inject_fields(template, ordinal, fields, opts.sanitize_fields)
        );
    }
    println!("{}", render::available_fields(table.header()));

    prompt.yes_no(&YesNoPrompt {
        question: "Perform (y/N)?".to_string(),
        default: false,
    })
}

/// Run every row's command in file order. A nonzero exit aborts the
/// remaining rows unless `continue_on_failure` is set.
fn execute_rows(table: &Table, template: &str, opts: &RunOptions) -> Result<()> {
    for (ordinal, fields) in table.rows() {
        let command = render::inject_fields(template, ordinal, fields, opts.sanitize_fields);
        println!("\u{bb} {}", command);

        let code = executor::run_shell(&command);
        if code != 0 {
            if !opts.continue_on_failure {
                return Err(Error::CommandFailed(code));
            }
            log_status!("run", "row {} returned code {}, continuing", ordinal, code);
        }
    }

    Ok(())
}
