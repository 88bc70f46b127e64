use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use sponsor::app::SponsorPage;
use sponsor::core::InputEvent;
use sponsor::kernel::services::adapters::{ensure_settings_file, load_settings, AssetService};
use sponsor::kernel::Catalog;
use sponsor::tui::{EventResult, TerminalGuard, TerminalRestorer, TerminationSignal, View};

mod logging;

const DEFAULT_ASSETS_DIR: &str = "public";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const USAGE: &str = "usage: sponsor [--assets <dir>]";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    assets: Option<String>,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-a" | "--assets" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("{arg} requires a directory"))?;
                cli.assets = Some(value);
            }
            other => {
                if let Some(value) = other.strip_prefix("--assets=") {
                    cli.assets = Some(value.to_string());
                } else {
                    return Err(format!("unexpected argument: {other}"));
                }
            }
        }
    }
    Ok(cli)
}

/// 命令行优先，其次是配置文件，最后是 `./public`；相对路径基于 cwd
fn resolve_assets_dir(cwd: &Path, cli: Option<&str>, configured: Option<&str>) -> PathBuf {
    let raw = cli
        .or(configured)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ASSETS_DIR);
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn main() -> io::Result<()> {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let _logging = logging::init();

    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let settings = load_settings().unwrap_or_default();

    let cwd = std::env::current_dir()?;
    let assets_dir = resolve_assets_dir(
        &cwd,
        cli.assets.as_deref(),
        settings.assets_dir.as_deref(),
    );
    let mut page = SponsorPage::new(
        Catalog::builtin(),
        &settings,
        AssetService::new(assets_dir),
    );

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    install_signals(guard.restorer(), signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &mut page, &signal_rx);

    drop(guard);
    tracing::info!("sponsor page closed");
    result
}

#[cfg(unix)]
fn install_signals(restorer: TerminalRestorer, tx: mpsc::Sender<TerminationSignal>) {
    let installed = sponsor::tui::terminal_guard::install_termination_signals(
        restorer,
        tx,
        sponsor::tui::terminal_guard::SIGNAL_GRACE,
    );
    if let Err(err) = installed {
        tracing::warn!(error = %err, "cannot install signal handlers");
    }
}

#[cfg(not(unix))]
fn install_signals(_restorer: TerminalRestorer, _tx: mpsc::Sender<TerminationSignal>) {}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    page: &mut SponsorPage,
    signals: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                page.render(frame, area);
            })?;
            dirty = false;
        }

        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "termination signal received");
            return Ok(());
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let event: InputEvent = crossterm::event::read()?.into();
        match page.handle_input(&event) {
            EventResult::Quit => return Ok(()),
            EventResult::Consumed => dirty = true,
            EventResult::Ignored => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod cli_startup_paths_tests;
