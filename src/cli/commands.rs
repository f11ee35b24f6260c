use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::controller::TodoList;
use crate::filters::Filter;
use crate::models::TodoId;
use crate::tui::run_interactive;
use crate::utils::{LogTarget, init_logging, sanitize_line};

#[derive(Parser)]
#[command(name = "todo-list")]
#[command(version = "0.1.0")]
#[command(about = "Keep a quick in-memory todo list in your terminal", long_about = None)]
pub struct Cli {
    /// Status filter: all, active or completed
    #[arg(long, global = true, default_value_t = Filter::All)]
    pub filter: Filter,

    /// Start without the example todos
    #[arg(long, global = true)]
    pub empty: bool,

    /// Append logs to this file (the interactive UI logs nowhere else)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show counts for the todo list
    Stats {
        #[command(flatten)]
        ops: Operations,
    },
    /// Print the visible todos
    List {
        #[command(flatten)]
        ops: Operations,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
}

/// Operations applied before printing: all adds, then toggles, then deletes
#[derive(Args, Debug, Default)]
pub struct Operations {
    /// Add a todo (repeatable)
    #[arg(long = "add", value_name = "TEXT")]
    pub add: Vec<String>,

    /// Flip a todo between active and completed (repeatable)
    #[arg(long = "toggle", value_name = "ID")]
    pub toggle: Vec<u64>,

    /// Remove a todo (repeatable)
    #[arg(long = "delete", value_name = "ID")]
    pub delete: Vec<u64>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            let target = cli.log_file.as_deref().map_or(LogTarget::Disabled, LogTarget::File);
            init_logging(target)?;

            let mut list = base_list(cli.empty);
            list.set_filter(cli.filter);
            run_interactive(list)?;
        }
        Some(command) => {
            let target = cli.log_file.as_deref().map_or(LogTarget::Stderr, LogTarget::File);
            init_logging(target)?;

            match command {
                Commands::Stats { ops } => {
                    let list = build_list(cli.empty, ops, cli.filter);
                    print!("{}", format_stats(&list));
                }
                Commands::List { ops, json } => {
                    let list = build_list(cli.empty, ops, cli.filter);
                    if *json {
                        println!("{}", format_json(&list)?);
                    } else {
                        print!("{}", format_list(&list));
                    }
                }
            }
        }
    }

    Ok(())
}

fn base_list(empty: bool) -> TodoList {
    if empty { TodoList::empty() } else { TodoList::new() }
}

/// Build a controller and drive it through `ops`
pub fn build_list(empty: bool, ops: &Operations, filter: Filter) -> TodoList {
    let mut list = base_list(empty);

    for text in &ops.add {
        list.set_draft(text.as_str());
        if list.add().is_none() {
            warn!("ignoring blank --add value");
            list.set_draft(String::new());
        }
    }
    for &id in &ops.toggle {
        list.toggle(TodoId(id));
    }
    for &id in &ops.delete {
        list.delete(TodoId(id));
    }
    list.set_filter(filter);

    list
}

fn format_stats(list: &TodoList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Todo List Statistics");
    let _ = writeln!(out, "====================");
    let _ = writeln!(out, "Total todos: {}", list.total_count());
    let _ = writeln!(out, "  Active: {}", list.active_count());
    let _ = writeln!(out, "  Completed: {}", list.completed_count());
    let _ = writeln!(out, "Filter: {} ({} visible)", list.filter(), list.visible_items().len());
    out
}

fn format_list(list: &TodoList) -> String {
    let mut out = String::new();
    let visible = list.visible_items();

    if visible.is_empty() {
        let _ = writeln!(out, "No todos here");
        let _ = writeln!(out, "{}", list.filter().empty_message());
    } else {
        for todo in visible {
            let mark = if todo.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "[{}] {}  {}", mark, todo.id, sanitize_line(&todo.text));
        }
    }

    let _ = writeln!(
        out,
        "{} active | {} completed | {} total",
        list.active_count(),
        list.completed_count(),
        list.total_count()
    );
    out
}

fn format_json(list: &TodoList) -> Result<String> {
    serde_json::to_string_pretty(&list.visible_items()).context("Failed to serialize todos")
}
