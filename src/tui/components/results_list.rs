//! # Results List Component
//!
//! Owns the canonical resource store and the criteria it is viewed
//! through. The displayed list is always derived: every change to either
//! input recomputes the filtered view from scratch, and nothing outside
//! this component ever sees that view except as pixels.
//!
//! Selection resolves against the full store, not the view — ids are
//! stable identifiers, the view is a display artifact. Activating an id
//! that can't be resolved (filtered out, then activated stale) is an
//! inert no-op.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultsState` lives in `TuiState`
//! - `ResultsList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::filter::{FilterState, FilterUpdate, QueryScope, filter};
use crate::core::resource::Resource;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Events emitted by the results list.
#[derive(Debug, PartialEq)]
pub enum ResultsEvent {
    /// A record was activated; carries the full matched record for
    /// whatever detail display consumes it.
    Selected(Resource),
}

/// Persistent state for the results list.
pub struct ResultsState {
    /// The canonical, unfiltered store. Replaced wholesale on reload,
    /// never mutated incrementally.
    resources: Vec<Resource>,
    filters: FilterState,
    scope: QueryScope,
    /// Derived view; recomputed on every change to store or filters.
    filtered: Vec<Resource>,
    /// The single active record, by id. An `Option<String>` can't mark
    /// two records active at once.
    selected_id: Option<String>,
    /// Highlighted row within the filtered view.
    cursor: usize,
    list_state: ListState,
}

impl ResultsState {
    pub fn new(scope: QueryScope) -> Self {
        Self {
            resources: Vec::new(),
            filters: FilterState::default(),
            scope,
            filtered: Vec::new(),
            selected_id: None,
            cursor: 0,
            list_state: ListState::default(),
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn filtered(&self) -> &[Resource] {
        &self.filtered
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Replace the store wholesale and recompute the view against the
    /// current criteria. A selection whose id survives the reload is
    /// kept; one that doesn't is cleared.
    pub fn set_resources(&mut self, store: Vec<Resource>) {
        self.resources = store;
        if let Some(id) = &self.selected_id
            && !self.resources.iter().any(|r| &r.id == id)
        {
            self.selected_id = None;
        }
        self.refresh();
    }

    /// Merge a partial criteria update and recompute the view. Fields the
    /// update leaves unset keep their prior values.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        self.refresh();
    }

    /// Mark the record with `id` as the single active one and return the
    /// selection event carrying the full record. Unknown ids change
    /// nothing and return `None` — not an error.
    pub fn select_by_id(&mut self, id: &str) -> Option<ResultsEvent> {
        let resource = self.resources.iter().find(|r| r.id == id)?.clone();
        self.selected_id = Some(resource.id.clone());
        Some(ResultsEvent::Selected(resource))
    }

    fn refresh(&mut self) {
        self.filtered = filter(&self.resources, &self.filters, self.scope);
        if self.filtered.is_empty() {
            self.cursor = 0;
            self.list_state.select(None);
        } else {
            self.cursor = self.cursor.min(self.filtered.len() - 1);
            self.list_state.select(Some(self.cursor));
        }
    }
}

impl EventHandler for ResultsState {
    type Event = ResultsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ResultsEvent> {
        match event {
            TuiEvent::CursorUp => {
                if !self.filtered.is_empty() {
                    self.cursor = self.cursor.saturating_sub(1);
                    self.list_state.select(Some(self.cursor));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.filtered.is_empty() {
                    self.cursor = (self.cursor + 1).min(self.filtered.len() - 1);
                    self.list_state.select(Some(self.cursor));
                }
                None
            }
            TuiEvent::Submit => {
                let id = self.filtered.get(self.cursor)?.id.clone();
                self.select_by_id(&id)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the results list.
pub struct ResultsList<'a> {
    state: &'a mut ResultsState,
    focused: bool,
}

impl<'a> ResultsList<'a> {
    pub fn new(state: &'a mut ResultsState, focused: bool) -> Self {
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
            .title(format!(" Results ({}) ", self.state.filtered.len()))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Navigate  Enter Select ").centered())
            .padding(Padding::horizontal(1));

        if self.state.filtered.is_empty() {
            // Distinct empty-state affordance, not just an empty container.
            let empty = Paragraph::new("No results found.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .filtered
            .iter()
            .enumerate()
            .map(|(i, resource)| {
                let is_active = self.state.selected_id.as_deref() == Some(resource.id.as_str());
                let is_cursor = i == self.state.cursor;

                let style = if is_cursor && self.focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let active_marker = if is_active { " *" } else { "" };
                let title_line = Line::from(vec![
                    Span::styled(resource.title.clone(), style),
                    Span::styled(active_marker, style),
                    Span::styled(
                        format!("  [{}]", resource.category),
                        if is_cursor && self.focused {
                            style
                        } else {
                            Style::default().fg(Color::DarkGray)
                        },
                    ),
                ]);
                let summary_line = Line::from(Span::styled(
                    format!("  {}", resource.summary),
                    Style::default().fg(Color::DarkGray),
                ));
                let location_line = Line::from(Span::styled(
                    format!("  {}", resource.location),
                    Style::default().fg(Color::DarkGray),
                ));

                ListItem::new(vec![title_line, summary_line, location_line])
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
