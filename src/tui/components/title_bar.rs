//! # TitleBar Component
//!
//! One-line status strip: where the data came from, how the load stands,
//! and how much of the store the current view shows. Stateless — all
//! props come from the run loop, so the bar can't disagree with the
//! loader it reports on. A failed load is announced here while the last
//! good list stays interactive below.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::retrieval::LoadState;
use crate::tui::component::Component;

/// Top status bar component.
pub struct TitleBar {
    /// Human-readable source label ("—" when no source is configured).
    pub source_label: String,
    pub load_state: LoadState,
    /// When the current store was committed, if it ever was.
    pub loaded_at: Option<DateTime<Local>>,
    /// Rows in the filtered view.
    pub shown: usize,
    /// Rows in the full store.
    pub total: usize,
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status = match &self.load_state {
            LoadState::Idle => "idle".to_string(),
            LoadState::Loading(source) => format!("loading {source}..."),
            LoadState::Loaded => match self.loaded_at {
                Some(at) => format!("loaded {}", at.format("%H:%M:%S")),
                None => "loaded".to_string(),
            },
            LoadState::Failed(reason) => format!("load failed: {reason}"),
        };

        let text = format!(
            "Signpost (source: {}) | {}/{} shown | {}",
            self.source_label, self.shown, self.total, status
        );

        let style = if matches!(self.load_state, LoadState::Failed(_)) {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(text, style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(mut bar: TitleBar) -> String {
        let backend = TestBackend::new(90, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_loading() {
        let text = render_to_text(TitleBar {
            source_label: "feed.json".to_string(),
            load_state: LoadState::Loading("feed.json".to_string()),
            loaded_at: None,
            shown: 0,
            total: 0,
        });
        assert!(text.contains("Signpost"));
        assert!(text.contains("loading feed.json..."));
        assert!(text.contains("0/0 shown"));
    }

    #[test]
    fn test_title_bar_failure_is_announced() {
        let text = render_to_text(TitleBar {
            source_label: "feed.json".to_string(),
            load_state: LoadState::Failed("network error: refused".to_string()),
            loaded_at: None,
            shown: 4,
            total: 12,
        });
        assert!(text.contains("load failed: network error: refused"));
        // The previous store is still being counted, and shown, below.
        assert!(text.contains("4/12 shown"));
    }

    #[test]
    fn test_title_bar_loaded_shows_counts() {
        let text = render_to_text(TitleBar {
            source_label: "feed.json".to_string(),
            load_state: LoadState::Loaded,
            loaded_at: None,
            shown: 2,
            total: 3,
        });
        assert!(text.contains("2/3 shown"));
        assert!(text.contains("loaded"));
    }
}
