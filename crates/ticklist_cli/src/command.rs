//! Gesture parsing for the terminal surface.
//!
//! A line is either a keyword gesture (toggle/edit/delete/filter/...) or,
//! when it starts with no known keyword, the submit gesture for a new task.
//! Row numbers address the currently *visible* list, 1-based.

use ticklist_core::TaskFilter;

/// One parsed user gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the line as a new task.
    Add(String),
    /// Flip completion on a visible row.
    Toggle(usize),
    /// Begin an inline edit on a visible row.
    Edit(usize),
    /// Delete a visible row.
    Remove(usize),
    /// Switch the current filter.
    Filter(TaskFilter),
    /// Re-render the current view.
    List,
    Help,
    Quit,
}

/// Parses one input line into a gesture.
///
/// Keyword forms that are recognizably commands but malformed (`done x`,
/// `edit 0`) return a usage message instead of silently becoming a task.
pub fn parse(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let keyword = parts.next().unwrap_or("");
    let rest = parts.next().map(str::trim).unwrap_or("");

    match keyword.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Ok(Command::Quit),
        "help" | "?" => Ok(Command::Help),
        "list" | "ls" => Ok(Command::List),
        // Bare filter names mirror the three filter buttons.
        "all" if rest.is_empty() => Ok(Command::Filter(TaskFilter::All)),
        "active" if rest.is_empty() => Ok(Command::Filter(TaskFilter::Active)),
        "completed" if rest.is_empty() => Ok(Command::Filter(TaskFilter::Completed)),
        "filter" => match TaskFilter::parse(rest) {
            Some(filter) => Ok(Command::Filter(filter)),
            None => Err("usage: filter <all|active|completed>".to_string()),
        },
        "done" | "toggle" => parse_row(rest, "done <row>").map(Command::Toggle),
        "edit" => parse_row(rest, "edit <row>").map(Command::Edit),
        "rm" | "del" | "delete" => parse_row(rest, "rm <row>").map(Command::Remove),
        "add" if !rest.is_empty() => Ok(Command::Add(rest.to_string())),
        _ => Ok(Command::Add(trimmed.to_string())),
    }
}

fn parse_row(value: &str, usage: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(format!("usage: {usage} (rows are numbered from 1)")),
    }
}
