//! Create link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::DashboardContext;
use crate::services::SubmitOutcome;

pub async fn create_link(ctx: &DashboardContext, url: &str, code: &str) -> Result<(), CliError> {
    let outcome = ctx.submitter.submit(url, code).await;
    let message = outcome.message().unwrap_or_default();

    match outcome {
        SubmitOutcome::Created(link) => {
            println!("{} {}", "✓".bold().green(), message);
            println!(
                "  {} -> {}",
                link.short_code.cyan(),
                link.original_url.blue().underline()
            );
            println!(
                "  {} {}",
                "Short URL:".dimmed(),
                ctx.view.resolver().resolve(&link.short_code).magenta()
            );
            Ok(())
        }
        SubmitOutcome::Invalid(_) => Err(CliError::InputError(message)),
        SubmitOutcome::CodeTaken => Err(CliError::CommandError(message)),
        SubmitOutcome::Failed(e) => {
            Err(CliError::CommandError(format!("{} ({})", message, e)))
        }
        SubmitOutcome::Busy => Err(CliError::CommandError(
            "Another create is still in progress".to_string(),
        )),
    }
}
