use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Args, Subcommand};
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::{
    board::{Board, BoardError},
    engine::{Engine, Intent},
    types::ColumnId,
};

const SCHEMA_VERSION: &str = "board.v1";

#[derive(Debug, Clone, Subcommand)]
pub enum RootCommand {
    /// Replay a JSON array of intents against an empty board and print it.
    Replay(ReplayArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}

pub fn run(command: RootCommand, json_output: bool, quiet: bool) -> i32 {
    match execute(command) {
        Ok(output) => {
            print_success(output, json_output, quiet);
            0
        }
        Err(err) => {
            print_error(&err, json_output);
            err.exit_code
        }
    }
}

struct CommandOutput {
    command: &'static str,
    data: Value,
    text: String,
}

#[derive(Debug)]
struct CliError {
    exit_code: i32,
    code: &'static str,
    message: String,
}

type CliResult<T> = Result<T, CliError>;

fn execute(command: RootCommand) -> CliResult<CommandOutput> {
    match command {
        RootCommand::Replay(args) => execute_replay(&args),
    }
}

fn execute_replay(args: &ReplayArgs) -> CliResult<CommandOutput> {
    let script = load_script(&args.script)?;
    let engine = replay(script)?;
    Ok(CommandOutput {
        command: "replay",
        data: board_json(&engine),
        text: board_text(&engine),
    })
}

fn load_script(path: &Path) -> CliResult<Vec<Intent>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))
        .map_err(|err| usage_error("SCRIPT_UNREADABLE", format_anyhow_error_chain(&err)))?;
    parse_script(&raw)
}

fn parse_script(raw: &str) -> CliResult<Vec<Intent>> {
    serde_json::from_str(raw)
        .map_err(|err| usage_error("SCRIPT_INVALID", format!("malformed script: {err}")))
}

fn replay(script: Vec<Intent>) -> CliResult<Engine> {
    let mut engine = Engine::new();
    for (step, intent) in script.into_iter().enumerate() {
        // Unknown parent columns are a script error here, not an engine bug.
        if let Intent::AddTask { column } = intent
            && engine.board().column(column).is_none()
        {
            let err = BoardError::MissingParent { column };
            return Err(runtime_error(
                "MISSING_PARENT",
                format!("step {}: {err}", step + 1),
            ));
        }
        let outcome = engine.dispatch(intent);
        debug!(step, ?outcome, "replayed intent");
    }
    Ok(engine)
}

fn board_json(engine: &Engine) -> Value {
    let board = engine.board();
    let columns: Vec<Value> = board
        .columns()
        .iter()
        .map(|column| {
            json!({
                "id": column.id,
                "title": column.title,
                "tasks": tasks_json(board, column.id),
            })
        })
        .collect();

    json!({
        "columns": columns,
        "dragging": engine.session().snapshot(),
    })
}

fn tasks_json(board: &Board, column: ColumnId) -> Vec<Value> {
    board
        .tasks_in(column)
        .map(|task| json!({ "id": task.id, "content": task.content }))
        .collect()
}

fn board_text(engine: &Engine) -> String {
    let board = engine.board();
    if board.columns().is_empty() {
        return "no columns".to_string();
    }

    let mut lines = Vec::new();
    for column in board.columns() {
        lines.push(format!("{} [{}]", column.title, column.id));
        let mut empty = true;
        for task in board.tasks_in(column.id) {
            empty = false;
            lines.push(format!(
                "  - {} [{}]",
                task.content.replace('\n', " / "),
                task.id
            ));
        }
        if empty {
            lines.push("  (empty)".to_string());
        }
    }
    if let Some(active) = engine.session().active() {
        lines.push(format!("dragging: {active}"));
    }
    lines.join("\n")
}

fn usage_error(code: &'static str, message: impl Into<String>) -> CliError {
    CliError {
        exit_code: 2,
        code,
        message: message.into(),
    }
}

fn runtime_error(code: &'static str, message: impl Into<String>) -> CliError {
    CliError {
        exit_code: 5,
        code,
        message: message.into(),
    }
}

fn print_success(output: CommandOutput, json_output: bool, quiet: bool) {
    if json_output {
        let payload = json!({
            "schema_version": SCHEMA_VERSION,
            "command": output.command,
            "data": output.data
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(value) => println!("{value}"),
            Err(_) => println!("{}", payload),
        }
        return;
    }

    if quiet {
        return;
    }

    if output.text.is_empty() {
        println!("ok");
    } else {
        println!("{}", output.text);
    }
}

fn print_error(err: &CliError, json_output: bool) {
    error!(code = err.code, message = %err.message, "cli command failed");

    if json_output {
        let payload = json!({
            "schema_version": SCHEMA_VERSION,
            "error": {
                "code": err.code,
                "message": err.message
            }
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(value) => eprintln!("{value}"),
            Err(_) => eprintln!("{}", payload),
        }
        return;
    }

    eprintln!("error[{}]: {}", err.code, err.message);
}

fn format_anyhow_error_chain(err: &anyhow::Error) -> String {
    let mut seen = HashSet::new();
    let mut parts = Vec::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if !seen.insert(text.clone()) {
            continue;
        }
        parts.push(text);
    }

    parts.join(": ")
}
