//! 终端模式的进入/恢复。Drop 与信号线程都会触发恢复，但只执行一次。

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// 信号到达后留给主循环自行退出的时间
pub const SIGNAL_GRACE: Duration = Duration::from_secs(2);

pub trait TerminalMode: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// raw mode + 备用屏幕；卡片需要点击，默认开启鼠标捕获
#[derive(Debug, Clone, Copy)]
pub struct CrosstermMode {
    pub mouse_capture: bool,
}

impl Default for CrosstermMode {
    fn default() -> Self {
        Self {
            mouse_capture: true,
        }
    }
}

impl TerminalMode for CrosstermMode {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{cursor, event, queue, terminal};

        terminal::enable_raw_mode()?;
        let mut out = io::stdout().lock();
        queue!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        if self.mouse_capture {
            queue!(out, event::EnableMouseCapture)?;
        }
        out.flush()
    }

    fn leave(&self) -> io::Result<()> {
        let raw = crossterm::terminal::disable_raw_mode();
        let screen = leave_screen(&mut io::stdout().lock(), self.mouse_capture);
        // 两步都要执行，优先报告 raw mode 的错误
        raw.and(screen)
    }
}

fn leave_screen(out: &mut impl Write, mouse_capture: bool) -> io::Result<()> {
    use crossterm::{cursor, event, queue, terminal};

    if mouse_capture {
        queue!(out, event::DisableMouseCapture)?;
    }
    queue!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    out.flush()
}

#[derive(Clone)]
pub struct TerminalRestorer {
    left: Arc<AtomicBool>,
    mode: Arc<dyn TerminalMode>,
}

impl TerminalRestorer {
    /// 只有第一次调用会真正离开终端模式，失败也不重试
    pub fn restore(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.mode.leave()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_mode(Arc::new(CrosstermMode::default()))
    }

    pub fn with_mode(mode: Arc<dyn TerminalMode>) -> io::Result<Self> {
        mode.enter()?;
        tracing::debug!("terminal mode entered");
        Ok(Self {
            restorer: TerminalRestorer {
                left: Arc::new(AtomicBool::new(false)),
                mode,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::error!(error = %err, "failed to restore terminal");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        128 + self.number()
    }

    fn number(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 2,
            TerminationSignal::SigTerm => 15,
        }
    }
}

/// 信号先通知主循环；超过 `grace` 仍未退出时由信号线程恢复终端并结束进程。
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
    grace: Duration,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("sponsor-signals".to_string())
        .spawn(move || {
            let Some(signal) = signals.forever().find_map(|sig| match sig {
                SIGINT => Some(TerminationSignal::SigInt),
                SIGTERM => Some(TerminationSignal::SigTerm),
                _ => None,
            }) else {
                return;
            };

            if tx.send(signal).is_err() {
                tracing::debug!("main loop already gone");
            }
            std::thread::sleep(grace);
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
