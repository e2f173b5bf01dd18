use std::fmt::Display;
use std::time::Duration;

use colored::*;
use fleetscope_common::fleet::Resolved;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().cyan());
    println!("{} {}", idx_str.bright_black(), name.bright_white().bold());
}

pub fn as_tree_one_level(key_value_pairs: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pairs
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pairs.iter().enumerate() {
        let last: bool = i + 1 == key_value_pairs.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: ColoredString = ".".repeat(key_width + 1 - key.len()).bright_black();
        println!(" {} {}{}{} {}", branch, key, dots, ":".bright_black(), value);
    }
}

/// Renders a derived field, appending an explicit marker when its lookup
/// degraded so a fallback zero is never mistaken for a real one.
pub fn resolved_value<T: Display>(field: &Resolved<T>) -> ColoredString {
    match field {
        Resolved::Complete(value) => value.to_string().normal(),
        Resolved::Degraded { fallback, cause } => {
            format!("{fallback} (incomplete: {cause})").yellow()
        }
    }
}

pub fn no_results() {
    println!("{}", "no matching records".red().bold());
}

pub fn summary_line(count: usize, what: &str, elapsed: Duration) {
    let counted: ColoredString = format!("{count} {what}").bold().green();
    let took: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
    println!("{counted} assembled in {took}");
}
