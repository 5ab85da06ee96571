//! Terminal User Interface (TUI) module
//!
//! Interactive dashboard over the link collection. Network operations run as
//! background tasks and report back through a channel, so the screen keeps
//! redrawing (and the copied indicators keep expiring) while requests are
//! in flight.

use std::io::{self, Stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{error, info};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use app::{App, AppEvent};
use ui::ui;

use crate::runtime::lifetime::DashboardContext;

type DashboardTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub async fn run_tui(ctx: DashboardContext) -> Result<()> {
    let tick_rate = Duration::from_millis(ctx.config.ui.tick_rate_ms);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(ctx, tx);
    info!("Dashboard started");
    // 首次进入即拉取列表
    app.request_refresh();

    // 主循环是同步的，不能占住 runtime 的工作线程
    let res = tokio::task::block_in_place(|| run_app(&mut terminal, &mut app, rx, tick_rate));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Dashboard exited with error: {:?}", err);
    }
    res
}

/// Main application loop
fn run_app(
    terminal: &mut DashboardTerminal,
    app: &mut App,
    mut events: UnboundedReceiver<AppEvent>,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        while let Ok(event) = events.try_recv() {
            app.handle_app_event(event);
        }

        terminal.draw(|f| ui(f, app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)
        {
            return Ok(());
        }
    }
}
