//! # Detail Panel Component
//!
//! Displays the most recently selected record in full. Purely
//! presentational: it receives the record as a prop and holds no state,
//! so it can't drift out of sync with the selection that fed it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::resource::Resource;

/// Transient detail view over a borrowed selection.
pub struct DetailPanel<'a> {
    resource: Option<&'a Resource>,
}

impl<'a> DetailPanel<'a> {
    pub fn new(resource: Option<&'a Resource>) -> Self {
        Self { resource }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Details ")
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        let Some(resource) = self.resource else {
            let placeholder = Paragraph::new("Select a resource to see details.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        };

        let flag = |on: bool| if on { "yes" } else { "no" };
        let lines = vec![
            Line::from(Span::styled(
                resource.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} · {}", resource.category, resource.location),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(
                resource.summary.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Open now: ", Style::default().fg(Color::DarkGray)),
                Span::styled(flag(resource.open_now), Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled("Virtual: ", Style::default().fg(Color::DarkGray)),
                Span::styled(flag(resource.is_virtual), Style::default().fg(Color::Gray)),
            ]),
        ];

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(detail, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_store;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_placeholder_without_selection() {
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| DetailPanel::new(None).render(f, f.area()))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Select a resource"));
    }

    #[test]
    fn test_shows_selected_record() {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let store = sample_store();
        terminal
            .draw(|f| DetailPanel::new(Some(&store[1])).render(f, f.area()))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Counseling"));
        assert!(text.contains("Wellness"));
        assert!(text.contains("Health Centre"));
    }
}
