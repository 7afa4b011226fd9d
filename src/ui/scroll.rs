// src/ui/scroll.rs

/// Where the transcript viewport sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    /// Stuck to the end of the list; follows new entries.
    #[default]
    Anchored,
    /// Held at a fixed top line after manual scrolling.
    Pinned(usize),
}

/// Vertical scroll position of the transcript.
///
/// The content height is only known at render time, so the renderer reports
/// it through [`ScrollState::set_content`] and then asks for [`ScrollState::top`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    viewport: Viewport,
    max_top: usize,
}

impl ScrollState {
    /// Change hook for the entry sequence: snap back to the end-of-list anchor.
    pub fn on_entries_changed(&mut self) {
        self.viewport = Viewport::Anchored;
    }

    pub fn set_content(&mut self, content_lines: usize, viewport_height: usize) {
        self.max_top = content_lines.saturating_sub(viewport_height);
    }

    /// First visible line.
    pub fn top(&self) -> usize {
        match self.viewport {
            Viewport::Anchored => self.max_top,
            Viewport::Pinned(top) => top.min(self.max_top),
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.viewport = Viewport::Pinned(self.top().saturating_sub(lines));
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let top = self.top().saturating_add(lines);
        self.viewport = if top >= self.max_top {
            Viewport::Anchored
        } else {
            Viewport::Pinned(top)
        };
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
