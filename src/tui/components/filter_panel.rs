//! # Filter Panel Component
//!
//! Collects filter intent — free-text query, exclusive category choice,
//! two availability toggles — and emits it atomically. Nothing leaves
//! this panel until the user submits: editing a field never touches the
//! results side, so the list can't thrash while someone is still typing.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FilterPanelState` lives in `TuiState`
//! - `FilterPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::filter::FilterState;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// The panel fields, in vertical navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Query,
    Category,
    OpenNow,
    Virtual,
}

impl FilterField {
    fn next(self) -> Self {
        match self {
            FilterField::Query => FilterField::Category,
            FilterField::Category => FilterField::OpenNow,
            FilterField::OpenNow => FilterField::Virtual,
            FilterField::Virtual => FilterField::Virtual,
        }
    }

    fn prev(self) -> Self {
        match self {
            FilterField::Query => FilterField::Query,
            FilterField::Category => FilterField::Query,
            FilterField::OpenNow => FilterField::Category,
            FilterField::Virtual => FilterField::OpenNow,
        }
    }
}

/// Events emitted by the filter panel.
#[derive(Debug, PartialEq, Eq)]
pub enum FilterPanelEvent {
    /// The complete criteria to apply downstream. Also emitted on reset,
    /// carrying the default state, so reset always means "unfiltered".
    Apply(FilterState),
}

/// Persistent state for the filter panel.
///
/// Owns the user-editable criteria exclusively; the results side only
/// ever sees them as the payload of an [`FilterPanelEvent::Apply`].
pub struct FilterPanelState {
    pub query: String,
    /// Byte offset of the edit cursor within `query`.
    cursor: usize,
    /// Category choices with "All" always at index 0.
    categories: Vec<String>,
    /// Index into `categories`. Being a single index is what makes the
    /// choice exclusive: there is no way to mark two at once.
    active_category: usize,
    pub open_now: bool,
    pub virtual_only: bool,
    pub focused_field: FilterField,
}

impl FilterPanelState {
    pub fn new(categories: &[String]) -> Self {
        let mut all = vec!["All".to_string()];
        all.extend(categories.iter().cloned());
        Self {
            query: String::new(),
            cursor: 0,
            categories: all,
            active_category: 0,
            open_now: false,
            virtual_only: false,
            focused_field: FilterField::Query,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active_category(&self) -> usize {
        self.active_category
    }

    /// Select a category by index, deselecting whichever was active.
    /// Out-of-range indices clamp to the last entry.
    pub fn select_category(&mut self, index: usize) {
        self.active_category = index.min(self.categories.len() - 1);
    }

    /// Snapshot the current field values as one complete `FilterState`.
    ///
    /// The category travels lowercased ("all", "academic", ...), matching
    /// what the engine compares against.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.query.trim().to_string(),
            category: self.categories[self.active_category].to_lowercase(),
            open_now: self.open_now,
            virtual_only: self.virtual_only,
        }
    }

    /// Restore every field to its default.
    fn reset(&mut self) {
        self.query.clear();
        self.cursor = 0;
        self.active_category = 0;
        self.open_now = false;
        self.virtual_only = false;
    }

    fn insert_char(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) {
        if let Some(prev) = self.query[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.query.remove(self.cursor);
        }
    }

    fn cursor_left(&mut self) {
        if let Some(prev) = self.query[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    fn cursor_right(&mut self) {
        if let Some(next) = self.query[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }
}

impl EventHandler for FilterPanelState {
    type Event = FilterPanelEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FilterPanelEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.focused_field = self.focused_field.prev();
                None
            }
            TuiEvent::CursorDown => {
                self.focused_field = self.focused_field.next();
                None
            }
            TuiEvent::CursorLeft => {
                match self.focused_field {
                    FilterField::Query => self.cursor_left(),
                    FilterField::Category => {
                        self.select_category(self.active_category.saturating_sub(1));
                    }
                    _ => {}
                }
                None
            }
            TuiEvent::CursorRight => {
                match self.focused_field {
                    FilterField::Query => self.cursor_right(),
                    FilterField::Category => {
                        self.select_category(self.active_category + 1);
                    }
                    _ => {}
                }
                None
            }
            TuiEvent::InputChar(c) => {
                match self.focused_field {
                    FilterField::Query => self.insert_char(*c),
                    FilterField::Category if *c == ' ' => {
                        // Space cycles through the choices, wrapping.
                        self.select_category(
                            (self.active_category + 1) % self.categories.len(),
                        );
                    }
                    FilterField::OpenNow if *c == ' ' => self.open_now = !self.open_now,
                    FilterField::Virtual if *c == ' ' => {
                        self.virtual_only = !self.virtual_only;
                    }
                    _ => {}
                }
                None
            }
            TuiEvent::Backspace => {
                if self.focused_field == FilterField::Query {
                    self.backspace();
                }
                None
            }
            TuiEvent::Submit => Some(FilterPanelEvent::Apply(self.filter_state())),
            TuiEvent::Reset => {
                self.reset();
                Some(FilterPanelEvent::Apply(FilterState::default()))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the filter panel.
pub struct FilterPanel<'a> {
    state: &'a FilterPanelState,
    focused: bool,
}

impl<'a> FilterPanel<'a> {
    pub fn new(state: &'a FilterPanelState, focused: bool) -> Self {
        Self { state, focused }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Filters ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Apply  Ctrl+R Reset ").centered())
            .padding(Padding::horizontal(1));

        let field_style = |field: FilterField| {
            if self.focused && self.state.focused_field == field {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            }
        };

        let mut lines = vec![
            Line::from(Span::styled("Search", field_style(FilterField::Query))),
            Line::from(Span::styled(
                self.state.query.clone(),
                field_style(FilterField::Query),
            )),
            Line::default(),
            Line::from(Span::styled("Category", field_style(FilterField::Category))),
        ];

        for (i, category) in self.state.categories.iter().enumerate() {
            let is_active = i == self.state.active_category;
            let marker = if is_active { "(•)" } else { "( )" };
            let mut style = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            if is_active && self.focused && self.state.focused_field == FilterField::Category {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            lines.push(Line::from(Span::styled(
                format!("{marker} {category}"),
                style,
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("[{}] Open now", if self.state.open_now { "x" } else { " " }),
            field_style(FilterField::OpenNow),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "[{}] Virtual options",
                if self.state.virtual_only { "x" } else { " " }
            ),
            field_style(FilterField::Virtual),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), area);

        // Place the terminal cursor inside the query line while editing.
        if self.focused && self.state.focused_field == FilterField::Query {
            let prefix = &self.state.query[..self.state.cursor];
            let x = area.x + 2 + prefix.width() as u16;
            let y = area.y + 2;
            if x < area.right() && y < area.bottom() {
                frame.set_cursor_position((x, y));
            }
        }
    }
}
