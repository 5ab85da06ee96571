//! Link statistics command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::DashboardContext;
use crate::services::StatsState;
use crate::utils::TimeParser;

pub async fn link_stats(ctx: &DashboardContext, code: &str) -> Result<(), CliError> {
    match ctx.stats.lookup(code).await {
        StatsState::Found(link) => {
            println!("{}", "Link statistics:".bold().green());
            println!();
            println!("  {:<14}{}", "Short code:", link.short_code.cyan());
            println!("  {:<14}{}", "Target:", link.original_url.blue().underline());
            println!(
                "  {:<14}{}",
                "Short URL:",
                ctx.view.resolver().resolve(&link.short_code).magenta()
            );
            println!(
                "  {:<14}{}",
                "Clicks:",
                link.click_count.to_string().green().bold()
            );
            let last = link
                .last_clicked_at
                .map(TimeParser::format_absolute)
                .unwrap_or_else(|| "Never clicked".to_string());
            println!("  {:<14}{}", "Last clicked:", last.yellow());
            println!(
                "  {:<14}{}",
                "Created:",
                TimeParser::format_absolute(link.created_at)
            );
            Ok(())
        }
        _ => Err(CliError::CommandError(format!(
            "Link not found: {}",
            code
        ))),
    }
}
