// src/ui/mod.rs
pub mod input;
pub mod scroll;
pub mod view;

use std::{
    io::{self, Stdout},
    sync::Arc,
};

use anyhow::Context;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        EventStream,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info};

use crate::{services::exchange::ExchangeClient, state::SharedState};
use input::Action;
use view::ChatView;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal into full-screen mode and restores it when dropped.
struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        with_raw_mode(enable_raw_mode, Self::setup, disable_raw_mode)
    }

    fn setup() -> anyhow::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)
            .context("failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
            let _ = execute!(
                io::stdout(),
                LeaveAlternateScreen,
                DisableMouseCapture,
                DisableBracketedPaste
            );
        });
        let terminal = terminal.context("failed to create terminal")?;
        Ok(Self { terminal })
    }
}

/// Turn raw mode on, then run `setup`. Raw mode is turned back off if `setup` fails.
fn with_raw_mode<T>(
    enable: impl FnOnce() -> io::Result<()>,
    setup: impl FnOnce() -> anyhow::Result<T>,
    disable: impl FnOnce() -> io::Result<()>,
) -> anyhow::Result<T> {
    enable().context("failed to enable raw mode")?;
    setup().inspect_err(|_| {
        if let Err(e) = disable() {
            error!(error = %e, "failed to disable raw mode");
        }
    })
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "failed to disable raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        ) {
            error!(error = %e, "failed to leave alternate screen");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Run the full-screen chat until the user quits.
pub async fn run(state: SharedState, client: ExchangeClient, title: String) -> anyhow::Result<()> {
    let mut guard = TerminalGuard::enter()?;
    info!(endpoint = %client.endpoint(), "terminal chat started");
    let result = event_loop(&mut guard.terminal, &state, &client, ChatView::new(title)).await;
    info!(entries = state.transcript.len(), "terminal chat closed");
    result
}

async fn event_loop(
    terminal: &mut Tui,
    state: &SharedState,
    client: &ExchangeClient,
    mut view: ChatView,
) -> anyhow::Result<()> {
    let mut entries_rx = state.transcript.subscribe();
    let mut draft_rx = state.draft.subscribe();
    let mut events = EventStream::new();

    loop {
        let entries = entries_rx.borrow_and_update().clone();
        let draft = draft_rx.borrow_and_update().clone();
        terminal
            .draw(|f| view.draw(f, &entries, &draft))
            .context("failed to draw")?;

        tokio::select! {
            Ok(()) = entries_rx.changed() => view.on_entries_changed(),
            Ok(()) = draft_rx.changed() => {}
            event = events.next() => {
                let Some(event) = event else { break };
                let event = event.context("failed to read terminal event")?;
                let Some(action) = input::map_event(&event, view.send_button()) else {
                    continue;
                };
                match action {
                    Action::Insert(c) => state.draft.push(c),
                    Action::Paste(text) => state.draft.push_str(&text),
                    Action::Backspace => state.draft.pop(),
                    Action::Submit => submit(state, client),
                    Action::ScrollUp => view.scroll_up(1),
                    Action::ScrollDown => view.scroll_down(1),
                    Action::PageUp => view.scroll_up(view.page_height()),
                    Action::PageDown => view.scroll_down(view.page_height()),
                    Action::Quit => break,
                }
            }
        }
    }
    Ok(())
}

/// Each submit runs as its own task so the screen stays live while it waits.
fn submit(state: &SharedState, client: &ExchangeClient) {
    let draft = state.draft.get();
    if draft.trim().is_empty() {
        return;
    }
    debug!("submitting draft");
    let state = Arc::clone(state);
    let client = client.clone();
    tokio::spawn(async move {
        client.send_message(&state, &draft).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_leaves_raw_mode() {
        let raw = Cell::new(false);
        let result: anyhow::Result<()> = with_raw_mode(
            || {
                raw.set(true);
                Ok(())
            },
            || Err(anyhow::anyhow!("alternate screen unavailable")),
            || {
                raw.set(false);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(!raw.get());
    }

    #[test]
    fn successful_setup_keeps_raw_mode() {
        let raw = Cell::new(false);
        let result = with_raw_mode(
            || {
                raw.set(true);
                Ok(())
            },
            || Ok(7),
            || {
                raw.set(false);
                Ok(())
            },
        );
        assert_eq!(result.unwrap(), 7);
        assert!(raw.get());
    }

    #[test]
    fn failed_enable_skips_setup() {
        let ran = Cell::new(false);
        let result: anyhow::Result<()> = with_raw_mode(
            || Err(io::Error::other("not a tty")),
            || {
                ran.set(true);
                Ok(())
            },
            || Ok(()),
        );
        assert!(result.is_err());
        assert!(!ran.get());
    }
}
