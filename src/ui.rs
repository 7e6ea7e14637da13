use colored::Colorize;

/// Print a status message with a spinner-like indicator
pub fn status_message(message: &str) {
    eprintln!("{} {} ... ", "⏳".yellow(), message.bright_white());
}

/// Print a success message
pub fn success_message(message: &str) {
    eprintln!("{} {}", "✅".green(), message.green());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print one sidebar link, highlighted when it is the current entry
pub fn link_line(is_current: bool, label: &str, target: &str) {
    if is_current {
        println!("{} {} {}", "▶".green().bold(), label.green().bold(), target.dimmed());
    } else {
        println!("  {} {}", label, target.dimmed());
    }
}
