use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use orgdesk::app::{AboutUsPage, PageExit, UiTheme};
use orgdesk::kernel::services::adapters::{
    default_store_path, ensure_settings_file, load_settings, AppMessage, AsyncRuntime,
    EnvSessionSource, InMemoryDocumentStore, JsonDocumentStore, IDENTITY_ENV,
};
use orgdesk::kernel::services::ports::DocumentStore;
use orgdesk::tui::{SignalWatch, TerminalSession, TerminationSignal};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const SIGNAL_GRACE: Duration = Duration::from_secs(2);
const USAGE: &str = "usage: orgdesk [--store <path>] [--key <document key>] [--memory]";

#[derive(Debug, Default)]
struct CliArgs {
    store: Option<PathBuf>,
    key: Option<String>,
    memory: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--store" => {
                let value = args.next().ok_or("--store needs a path")?;
                parsed.store = Some(PathBuf::from(value));
            }
            "--key" => {
                let value = args.next().ok_or("--key needs a document key")?;
                if value.trim().is_empty() {
                    return Err("--key must not be empty".to_string());
                }
                parsed.key = Some(value);
            }
            "--memory" => parsed.memory = true,
            "-h" | "--help" => parsed.help = true,
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("orgdesk: {msg}\n{USAGE}");
            return ExitCode::from(64);
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let _logging = logging::init();

    match run(args) {
        Ok(Outcome::Page(PageExit::Quit)) => ExitCode::SUCCESS,
        Ok(Outcome::Page(PageExit::SignInRequired)) => ExitCode::from(2),
        Ok(Outcome::Signal(signal)) => ExitCode::from(signal.exit_code()),
        Err(err) => {
            tracing::error!(error = %err, "orgdesk exited with an error");
            eprintln!("orgdesk: {err}");
            ExitCode::FAILURE
        }
    }
}

/// How the event loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Page(PageExit),
    Signal(TerminationSignal),
}

impl Outcome {
    /// Text for the normal terminal once the page screen is gone.
    fn notice(self) -> Option<String> {
        match self {
            Outcome::Page(PageExit::SignInRequired) => Some(format!(
                "orgdesk: sign-in required (set {IDENTITY_ENV} or `identity` in settings.json)"
            )),
            Outcome::Page(PageExit::Quit) | Outcome::Signal(_) => None,
        }
    }
}

fn run(args: CliArgs) -> io::Result<Outcome> {
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "settings file unavailable, using defaults");
    }
    let settings = load_settings();

    let store: Arc<dyn DocumentStore> = if args.memory {
        Arc::new(InMemoryDocumentStore::new())
    } else {
        let path = args
            .store
            .or_else(|| settings.store_path.clone())
            .or_else(default_store_path)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "no location for the document store; pass --store",
                )
            })?;
        let key = args.key.unwrap_or_else(|| settings.document_key.clone());
        tracing::info!(path = %path.display(), key = %key, "using json document store");
        Arc::new(JsonDocumentStore::new(path, key, settings.max_tree_depth))
    };
    let session = Arc::new(EnvSessionSource::new(settings.identity.clone()));

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx, store, session)?;
    let mut page = AboutUsPage::new(
        runtime,
        settings.max_tree_depth,
        UiTheme::from_settings(&settings.theme),
    );

    let session = TerminalSession::enter()?;
    let signals = SignalWatch::install(session.restorer(), SIGNAL_GRACE)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    page.start();
    let outcome = event_loop(&mut terminal, &mut page, &rx, &signals);
    drop(terminal);

    // Errors still leave the screen through the session's drop.
    let outcome = outcome?;
    session.finish(outcome.notice().as_deref())?;
    Ok(outcome)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    page: &mut AboutUsPage,
    rx: &Receiver<AppMessage>,
    signals: &SignalWatch,
) -> io::Result<Outcome> {
    let mut dirty = true;
    loop {
        if let Some(signal) = signals.poll() {
            return Ok(Outcome::Signal(signal));
        }
        while let Ok(msg) = rx.try_recv() {
            dirty |= page.handle_message(msg);
        }
        if let Some(exit) = page.exit() {
            return Ok(Outcome::Page(exit));
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                page.render(frame, area);
                if let Some((x, y)) = page.cursor_position() {
                    frame.set_cursor_position((x, y));
                }
            })?;
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => dirty |= page.handle_key(key),
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }
    }
}
