use owo_colors::OwoColorize;
use seoscope_core::{BatchSummary, ScoreBand, SeoHealthReport};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Seoscope".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Audit the SEO health of blog articles\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print a score with its badge colour
pub fn print_score(label: &str, report: &SeoHealthReport) {
    let score = format!("{}/100", report.seo_score);
    let badge = match report.band() {
        ScoreBand::Good => score.bright_green().to_string(),
        ScoreBand::Fair => score.bright_yellow().to_string(),
        ScoreBand::Poor => score.bright_red().to_string(),
    };
    eprintln!(
        "  {} {} {}",
        format!("{}:", label).dimmed(),
        badge.bold(),
        format!("({} missing, {} suggestions)", report.missing_fields.len(), report.suggestions.len()).dimmed()
    );
}

/// Print batch summary
pub fn print_summary(summary: &BatchSummary) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Batch Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!(
        "  {} {}",
        "Articles:".dimmed(),
        summary.count.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Average:".dimmed(),
        format!("{:.1}", summary.average_score).bright_white()
    );
    eprintln!(
        "  {} {} / {} / {}\n",
        "Good/Fair/Poor:".dimmed(),
        summary.good.to_string().green(),
        summary.fair.to_string().yellow(),
        summary.poor.to_string().red()
    );
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let indicator = if ms < 50.0 {
        "fast".dimmed().to_string()
    } else if ms < 100.0 {
        "moderate".bright_yellow().to_string()
    } else {
        "slow".bright_red().to_string()
    };

    eprintln!("  {} {:>8.2}ms ({})", format!("{}:", label).dimmed(), ms, indicator);
}
