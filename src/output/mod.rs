//! Terminal output for the action log
//!
//! Plain progress lines are styled with colors. Warnings, errors, debug lines
//! and log groups are emitted as GitHub workflow commands so the runner turns
//! them into annotations and collapsible sections.

use owo_colors::OwoColorize;

/// Escape message data of a workflow command
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format a workflow command line such as `::warning::message`
pub fn workflow_command(command: &str, message: &str) -> String {
    format!("::{}::{}", command, escape_data(message))
}

/// Print a success message with a green checkmark
pub fn success(message: &str) {
    // Pastel mint green: RGB(152, 225, 152)
    println!(
        "{} {}",
        "✓".truecolor(152, 225, 152).bold(),
        message.bright_white()
    );
}

/// Print an info message with a blue info symbol
pub fn info(message: &str) {
    // Pastel sky blue: RGB(160, 200, 255)
    println!(
        "{} {}",
        "ℹ".truecolor(160, 200, 255).bold(),
        message.bright_white()
    );
}

/// Emit a warning annotation
pub fn warning(message: &str) {
    println!("{}", workflow_command("warning", message));
}

/// Emit an error annotation
pub fn error(message: &str) {
    println!("{}", workflow_command("error", message));
}

/// Emit a debug line, only shown when step debugging is enabled
pub fn debug(message: &str) {
    println!("{}", workflow_command("debug", message));
}

/// Start a collapsible log group
pub fn group(title: &str) {
    println!("{}", workflow_command("group", title));
}

/// End the current log group
pub fn end_group() {
    println!("::endgroup::");
}

/// Print a key-value pair with styled key and value
pub fn key_value(key: &str, value: &str) {
    println!("{}", format_key_value(key, value));
}

/// Key-value line with key and value escaped like workflow command data,
/// always a single log line
pub fn format_key_value(key: &str, value: &str) -> String {
    // Brighter grey: RGB(160, 160, 160)
    format!(
        "  {} {}",
        format!("{}:", escape_data(key)).truecolor(160, 160, 160),
        escape_data(value).bright_white()
    )
}

/// Print text verbatim
pub fn raw(text: &str) {
    println!("{}", text);
}
