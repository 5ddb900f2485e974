//! Terminal rendering for the task list.
//!
//! Completed rows are struck through and dimmed; the footer always counts
//! the full collection, whatever the current filter shows.

use colored::Colorize;
use ticklist_core::{Task, TaskCounts, TaskFilter};

/// Renders the visible rows plus footer into one printable block.
pub fn render_list(visible: &[&Task], filter: TaskFilter, counts: TaskCounts) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", format!("[{}]", filter.label()).cyan()));

    if visible.is_empty() {
        let placeholder = match filter {
            TaskFilter::All => "no tasks yet - type something to add one",
            TaskFilter::Active => "nothing left to do here",
            TaskFilter::Completed => "nothing completed yet",
        };
        out.push_str(&format!("  {}\n", placeholder.bright_black()));
    } else {
        for (row, task) in visible.iter().enumerate() {
            out.push_str(&render_row(row + 1, task));
            out.push('\n');
        }
    }

    out.push_str(&format!("{}\n", render_footer(counts).bright_black()));
    out
}

fn render_row(row: usize, task: &Task) -> String {
    let marker = if task.completed { "[x]" } else { "[ ]" };
    let text = if task.completed {
        task.text.strikethrough().dimmed().to_string()
    } else {
        task.text.to_string()
    };
    format!("  {:>2} {marker} {text}", row)
}

fn render_footer(counts: TaskCounts) -> String {
    format!(
        "total: {} | completed: {} | active: {}",
        counts.total, counts.completed, counts.active
    )
}

/// Gesture summary for the `help` command.
pub fn render_help() -> String {
    [
        "  <text>            add a task (also: add <text>)",
        "  done <row>        toggle completion (also: toggle)",
        "  edit <row>        edit a task inline, enter saves as-is",
        "  rm <row>          delete a task (also: del, delete)",
        "  all | active | completed",
        "                    switch the filter (also: filter <name>)",
        "  list              show the current view (also: ls)",
        "  quit              leave (also: exit, Ctrl-D)",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{render_list, render_row};
    use ticklist_core::{Task, TaskCounts, TaskFilter};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn rows_are_numbered_and_marked() {
        plain();
        let task = Task::new("write report");
        let line = render_row(1, &task);
        assert!(line.contains("1 [ ] write report"));

        let mut done = Task::new("buy milk");
        done.completed = true;
        let line = render_row(2, &done);
        assert!(line.contains("2 [x]"));
        assert!(line.contains("buy milk"));
    }

    #[test]
    fn footer_reports_all_three_counts() {
        plain();
        let mut tasks = vec![Task::new("a"), Task::new("b")];
        tasks[0].completed = true;
        let visible: Vec<&Task> = tasks.iter().collect();

        let block = render_list(&visible, TaskFilter::All, TaskCounts::of(&tasks));
        assert!(block.contains("total: 2 | completed: 1 | active: 1"));
    }

    #[test]
    fn empty_views_show_a_placeholder() {
        plain();
        let block = render_list(&[], TaskFilter::All, TaskCounts::of(&[]));
        assert!(block.contains("no tasks yet"));
        assert!(block.contains("total: 0"));
    }
}
