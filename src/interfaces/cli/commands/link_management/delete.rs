//! Delete link command

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::DashboardContext;
use crate::services::MSG_DELETE_FAILED;

pub async fn delete_link(ctx: &DashboardContext, code: &str, yes: bool) -> Result<(), CliError> {
    ctx.view.request_delete(code);

    if !yes {
        print!(
            "{} {} {}",
            "Delete short link".yellow(),
            code.cyan(),
            "? [y/N] ".yellow()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            ctx.view.cancel_delete();
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    match ctx.view.confirm_delete().await {
        Ok(Some(deleted)) => {
            println!(
                "{} Deleted short link: {}",
                "✓".bold().green(),
                deleted.cyan()
            );
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => Err(CliError::CommandError(format!(
            "{}: {}",
            MSG_DELETE_FAILED, e
        ))),
    }
}
