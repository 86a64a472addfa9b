use std::{
    io::{self, Write},
    panic,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::ResetColor,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use tuirealm::{
    PollStrategy,
    terminal::{CrosstermTerminalAdapter, TerminalBridge},
};

use kanban_dnd::{
    app::App,
    cli::{self, RootCommand},
    logging::{init_logging, print_log_location},
    realm::{RootId, apply_message, init_application, should_quit},
    settings::Settings,
};

#[derive(Parser, Debug)]
#[command(
    name = "kanban-dnd",
    about = "Terminal kanban board with pointer drag-and-drop",
    long_about = "A TUI kanban board: drag cards between columns, drag column headers to reorder, click to edit.",
    version,
    author
)]
struct Cli {
    /// Pointer travel, in cells, before a press turns into a drag.
    #[arg(long, value_name = "CELLS")]
    activation_distance: Option<u16>,

    #[arg(long, global = true)]
    json: bool,

    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<RootCommand>,
}

enum RunOutcome {
    Continue,
    Exit(i32),
}

static TERMINAL_RESTORED: AtomicBool = AtomicBool::new(false);

fn main() -> Result<()> {
    let log_path = match init_logging() {
        Ok(path) => Some(path),
        Err(err) => {
            eprintln!("warning: failed to initialize logging: {err}");
            None
        }
    };
    if let Some(path) = log_path.as_ref() {
        install_panic_hook_with_log(path.clone());
    }

    match run_app() {
        Ok(RunOutcome::Continue) => {
            if let Some(path) = log_path.as_ref() {
                print_log_location(path);
            }
            Ok(())
        }
        Ok(RunOutcome::Exit(code)) => {
            std::process::exit(code);
        }
        Err(err) => {
            if let Some(path) = log_path.as_ref() {
                print_log_location(path);
            }
            Err(err)
        }
    }
}

fn run_app() -> Result<RunOutcome> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let code = cli::run(command, cli.json, cli.quiet);
        return Ok(RunOutcome::Exit(code));
    }

    let settings = Settings::load().with_activation_distance(cli.activation_distance);

    let _guard = TerminalGuard;
    let mut terminal = setup_terminal()?;

    let app = Arc::new(Mutex::new(App::new(settings)));
    let mut realm = init_application(Arc::clone(&app))?;

    let mut redraw = true;
    while !should_quit(&app)? {
        if redraw {
            terminal
                .draw(|frame| realm.view(&RootId::Board, frame, frame.area()))
                .context("failed to render frame")?;
            redraw = false;
        }

        let messages = realm
            .tick(PollStrategy::Once)
            .context("failed to process tui-realm tick")?;

        if !messages.is_empty() {
            redraw = true;
        }

        for message in messages {
            apply_message(&app, message)?;
        }
    }

    let _ = execute!(io::stdout(), DisableMouseCapture);
    let _ = terminal.disable_raw_mode();
    let _ = terminal.leave_alternate_screen();
    let _ = terminal.clear_screen();
    TERMINAL_RESTORED.store(true, Ordering::SeqCst);

    Ok(RunOutcome::Continue)
}

fn setup_terminal() -> Result<TerminalBridge<CrosstermTerminalAdapter>> {
    TERMINAL_RESTORED.store(false, Ordering::SeqCst);

    let mut terminal =
        TerminalBridge::new_crossterm().context("failed to initialize terminal bridge")?;

    terminal
        .enable_raw_mode()
        .context("failed to enable raw mode")?;
    terminal
        .enter_alternate_screen()
        .context("failed to enter alternate screen")?;
    execute!(io::stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;

    Ok(terminal)
}

fn install_panic_hook_with_log(log_path: PathBuf) {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        eprintln!();
        eprintln!("log file: {}", log_path.display());
        eprintln!();
        previous_hook(panic_info);
    }));
}

fn restore_terminal() -> Result<()> {
    if TERMINAL_RESTORED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let _ = disable_raw_mode();

    let mut stderr = io::stderr();
    let _ = execute!(
        stderr,
        LeaveAlternateScreen,
        DisableMouseCapture,
        Show,
        ResetColor
    );
    let _ = stderr.write_all(
        b"\x1b[?1049l\x1b[?1000l\x1b[?1002l\x1b[?1003l\x1b[?1006l\x1b[?2004l\x1b[?7h\x1b[?25h\x1b[0m\x1b[2J\x1b[H",
    );
    let _ = stderr.flush();

    Ok(())
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}
