// src/ui/view.rs
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::core::display_width;

use crate::services::transcript::{ChatEntry, Sender};
use crate::ui::scroll::ScrollState;

const ACCENT: Color = Color::Rgb(0, 120, 215);
const BOT_BUBBLE: Color = Color::Rgb(229, 229, 234);
const PLACEHOLDER: &str = "Type your message...";
const SEND_LABEL: &str = "Send";

/// Bubbles take at most this share of the transcript width, in percent.
const BUBBLE_MAX_PERCENT: usize = 70;

/// View-local state of the terminal chat screen. Entries and draft are passed
/// in on every draw; only scroll position and hit areas live here.
#[derive(Debug)]
pub struct ChatView {
    title: String,
    scroll: ScrollState,
    send_button: Rect,
    transcript_height: u16,
}

impl ChatView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scroll: ScrollState::default(),
            send_button: Rect::default(),
            transcript_height: 0,
        }
    }

    /// Hook for entry-sequence change notifications.
    pub fn on_entries_changed(&mut self) {
        self.scroll.on_entries_changed();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll.scroll_up(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll.scroll_down(lines);
    }

    pub fn page_height(&self) -> usize {
        usize::from(self.transcript_height.max(1))
    }

    /// Area of the Send button from the last draw.
    pub fn send_button(&self) -> Rect {
        self.send_button
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn draw(&mut self, f: &mut Frame<'_>, entries: &[ChatEntry], draft: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Transcript
                Constraint::Length(3), // Input
            ])
            .split(f.area());

        self.draw_header(f, chunks[0]);
        self.draw_transcript(f, chunks[1], entries);
        self.draw_input(f, chunks[2], draft);
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let header = Paragraph::new(self.title.as_str())
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, area);
    }

    fn draw_transcript(&mut self, f: &mut Frame<'_>, area: Rect, entries: &[ChatEntry]) {
        let inner = Rect {
            x: area.x.saturating_add(1),
            width: area.width.saturating_sub(2),
            ..area
        };
        let mut lines = transcript_lines(entries, inner.width);

        self.transcript_height = inner.height;
        let height = usize::from(inner.height);
        self.scroll.set_content(lines.len(), height);

        // Paragraph::scroll takes a u16 offset; hand it only the visible window.
        let top = self.scroll.top();
        lines.truncate(top + height);
        let visible = lines.split_off(top.min(lines.len()));
        f.render_widget(Paragraph::new(visible), inner);
    }

    fn draw_input(&mut self, f: &mut Frame<'_>, area: Rect, draft: &str) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(10)])
            .split(area);
        let (field, button) = (chunks[0], chunks[1]);

        let visible = field.width.saturating_sub(2);
        let draft_width = u16::try_from(display_width(draft)).unwrap_or(u16::MAX);
        let offset = draft_width.saturating_add(1).saturating_sub(visible);

        let text = if draft.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(draft)
        };
        let input = Paragraph::new(Line::from(text))
            .scroll((0, offset))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(input, field);

        let send = Paragraph::new(SEND_LABEL)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(send, button);
        self.send_button = button;

        let x = field.x + 1 + draft_width.saturating_sub(offset).min(visible.saturating_sub(1));
        f.set_cursor_position((x, field.y + 1));
    }
}

/// Every entry as a bubble followed by a blank spacer. The final spacer is the
/// end-of-list anchor the viewport snaps to.
pub fn transcript_lines(entries: &[ChatEntry], width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in entries {
        lines.extend(bubble_lines(entry, width));
        lines.push(Line::default());
    }
    lines
}

fn bubble_lines(entry: &ChatEntry, width: u16) -> Vec<Line<'static>> {
    let max_bubble = (usize::from(width) * BUBBLE_MAX_PERCENT / 100).max(3);
    // One column of padding on each side.
    let wrap_width = max_bubble - 2;

    let wrapped: Vec<String> = textwrap::wrap(&entry.text, wrap_width)
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    let inner = wrapped.iter().map(|l| display_width(l)).max().unwrap_or(0);

    let (style, alignment) = match entry.sender {
        Sender::User => (Style::default().fg(Color::White).bg(ACCENT), Alignment::Right),
        Sender::Bot => (Style::default().fg(Color::Black).bg(BOT_BUBBLE), Alignment::Left),
    };

    wrapped
        .into_iter()
        .map(|text| {
            let pad = inner - display_width(&text);
            let padded = format!(" {text}{} ", " ".repeat(pad));
            Line::from(Span::styled(padded, style)).alignment(alignment)
        })
        .collect()
}
