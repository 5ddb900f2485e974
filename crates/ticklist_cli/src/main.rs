//! Interactive terminal surface for ticklist.
//!
//! # Responsibility
//! - Wire the data directory, logging, database, and task store together.
//! - Run the readline loop: render the current view, translate gestures
//!   into store calls, re-render after every change.
//!
//! # Invariants
//! - All business rules live in `ticklist_core`; this binary only parses
//!   gestures and prints.

mod command;
mod render;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use command::Command;
use ticklist_core::db::open_db;
use ticklist_core::{
    core_version, default_log_level, init_logging, visible_tasks, SqliteTaskListRepository,
    TaskCounts, TaskFilter, TaskId, TaskListRepository, TaskStore, ViewState,
};

const APP_DIR_NAME: &str = "ticklist";
const DB_FILE_NAME: &str = "ticklist.sqlite3";

fn main() -> Result<()> {
    let data_dir = dirs::data_dir()
        .context("no platform data directory available")?
        .join(APP_DIR_NAME);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory `{}`", data_dir.display()))?;

    let log_dir = data_dir.join("logs");
    let log_dir = log_dir
        .to_str()
        .context("data directory path is not valid UTF-8")?;
    init_logging(default_log_level(), log_dir).map_err(|err| anyhow!(err))?;

    let conn = open_db(data_dir.join(DB_FILE_NAME))
        .with_context(|| format!("failed to open task database in `{}`", data_dir.display()))?;
    let repo = SqliteTaskListRepository::try_new(&conn)?;
    let mut store = TaskStore::load(repo)?;
    let mut view = ViewState::new();

    info!(
        "event=cli_ready module=cli status=ok tasks={}",
        store.tasks().len()
    );

    let mut rl = DefaultEditor::new()?;

    println!("{}", format!("=== ticklist v{} ===", core_version()).bold());
    println!(
        "{}",
        "type a task to add it, `help` for the gesture list.".bright_black()
    );
    println!();
    print!("{}", current_view(&store, &view));

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match command::parse(trimmed) {
                    Ok(Command::Quit) => {
                        println!("{}", "bye".green());
                        break;
                    }
                    Ok(Command::Help) => println!("{}", render::render_help()),
                    Ok(Command::List) => print!("{}", current_view(&store, &view)),
                    Ok(Command::Filter(filter)) => {
                        view.set_filter(filter);
                        print!("{}", current_view(&store, &view));
                    }
                    Ok(Command::Add(text)) => {
                        view.set_draft_text(text);
                        let draft = view.take_draft();
                        // Blank drafts are silently ignored by the store.
                        let _ = store.add(&draft)?;
                        print!("{}", current_view(&store, &view));
                    }
                    Ok(Command::Toggle(row)) => match resolve_row(&store, view.filter(), row) {
                        Some(id) => {
                            store.toggle_completed(id)?;
                            print!("{}", current_view(&store, &view));
                        }
                        None => println!("{}", no_such_row(row).yellow()),
                    },
                    Ok(Command::Remove(row)) => match resolve_row(&store, view.filter(), row) {
                        Some(id) => {
                            store.remove(id)?;
                            print!("{}", current_view(&store, &view));
                        }
                        None => println!("{}", no_such_row(row).yellow()),
                    },
                    Ok(Command::Edit(row)) => match resolve_row(&store, view.filter(), row) {
                        Some(id) => {
                            run_inline_edit(&mut rl, &mut store, &mut view, id)?;
                            print!("{}", current_view(&store, &view));
                        }
                        None => println!("{}", no_such_row(row).yellow()),
                    },
                    Err(usage) => println!("{}", usage.yellow()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "interrupted - type `quit` to leave".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn current_view<R: TaskListRepository>(store: &TaskStore<R>, view: &ViewState) -> String {
    let visible = visible_tasks(store.tasks(), view.filter());
    render::render_list(&visible, view.filter(), TaskCounts::of(store.tasks()))
}

/// Maps a 1-based row of the visible list back to a task id.
fn resolve_row<R: TaskListRepository>(
    store: &TaskStore<R>,
    filter: TaskFilter,
    row: usize,
) -> Option<TaskId> {
    visible_tasks(store.tasks(), filter)
        .get(row - 1)
        .map(|task| task.id)
}

/// Runs one inline edit: a prompt seeded with the task's current text.
/// Enter saves the buffer verbatim and exits edit mode; Ctrl-C or Ctrl-D
/// cancels without saving.
fn run_inline_edit<R: TaskListRepository>(
    rl: &mut DefaultEditor,
    store: &mut TaskStore<R>,
    view: &mut ViewState,
    id: TaskId,
) -> Result<()> {
    let Some(task) = store.get(id) else {
        return Ok(());
    };
    view.begin_edit(id, task.text.clone());
    let seed = view
        .editing()
        .map(|edit| edit.text.clone())
        .unwrap_or_default();

    match rl.readline_with_initial("edit> ", (seed.as_str(), "")) {
        Ok(line) => {
            view.set_edit_text(line);
            if let Some(edit) = view.take_edit() {
                store.edit(edit.task_id, &edit.text)?;
            }
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            view.cancel_edit();
            println!("{}", "edit cancelled".yellow());
        }
        Err(err) => {
            view.cancel_edit();
            return Err(err.into());
        }
    }

    Ok(())
}

fn no_such_row(row: usize) -> String {
    format!("no row {row} in this view")
}
