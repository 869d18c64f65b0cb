use account_check::{AccountStatus, Verdict};
use colored::Colorize;
use std::io::{self, Write};

/// Print a status message for a step that is about to run
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// One-line coloured rendering of a verdict
pub fn verdict_line(verdict: &Verdict) -> String {
    let name = format!("@{}", verdict.username());
    match verdict.status() {
        AccountStatus::Live => format!("{} {}", "LIVE".green().bold(), name),
        AccountStatus::NotAvailable => format!(
            "{} {} ({})",
            "NOT_AVAILABLE".red().bold(),
            name,
            verdict.error_message().unwrap_or_default()
        ),
        AccountStatus::Error => format!(
            "{} {} ({})",
            "ERROR".yellow().bold(),
            name,
            verdict.error_message().unwrap_or_default()
        ),
    }
}
