//! List links command

use chrono::Utc;
use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::DashboardContext;
use crate::utils::TimeParser;

pub async fn list_links(ctx: &DashboardContext, search: &str) -> Result<(), CliError> {
    ctx.store.refresh().await?;
    let links = ctx.view.visible(search);

    if links.is_empty() {
        if search.is_empty() {
            println!("{} No short links found", "ℹ".bold().blue());
        } else {
            println!(
                "{} No links match {}",
                "ℹ".bold().blue(),
                format!("\"{}\"", search).cyan()
            );
        }
        return Ok(());
    }

    let now = Utc::now();
    println!("{}", "Short link list:".bold().green());
    println!();
    for link in &links {
        let mut info_parts = vec![format!(
            "{} -> {}",
            link.short_code.cyan(),
            link.original_url.blue().underline()
        )];

        info_parts.push(
            format!("(clicks: {})", link.click_count)
                .dimmed()
                .cyan()
                .to_string(),
        );

        if link.last_clicked_at.is_some() {
            info_parts.push(
                format!(
                    "(last clicked {})",
                    TimeParser::format_last_clicked(link.last_clicked_at, now)
                )
                .dimmed()
                .to_string(),
            );
        }

        println!("  {}", info_parts.join(" "));
    }
    println!();
    if search.is_empty() {
        println!(
            "{} Total {} short links",
            "ℹ".bold().blue(),
            links.len().to_string().green()
        );
    } else {
        println!(
            "{} {} of {} short links match",
            "ℹ".bold().blue(),
            links.len().to_string().green(),
            ctx.store.len()
        );
    }
    Ok(())
}
