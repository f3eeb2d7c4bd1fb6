//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the three
//! panels, and relays typed component events between them. This is the
//! only module that knows about ratatui and crossterm.
//!
//! ## Event flow
//!
//! The run loop is the notification channel the panels talk through:
//!
//! ```text
//!   FilterPanelState ── Apply(FilterState) ──▶ run loop ──▶ ResultsState::set_filters
//!   ResultsState ───── Selected(Resource) ──▶ run loop ──▶ detail panel props
//!   fetch task ──────── LoadOutcome (mpsc) ──▶ run loop ──▶ DataLoader::commit
//!                                                            └▶ ResultsState::set_resources
//! ```
//!
//! Panels never hold references to each other, so either side can be
//! driven (and tested) on its own. Everything in one loop turn runs to
//! completion before the next event is taken: a `set_filters` recompute
//! finishes before a selection is processed, so there are no partial
//! renders to interleave.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::debug;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::core::config::{DataSource, ResolvedConfig};
use crate::core::resource::Resource;
use crate::retrieval::{DataLoader, FileProvider, HttpProvider, LoadOutcome, LoadState, ResourceProvider};
use crate::tui::component::EventHandler;
use crate::tui::components::{FilterPanelEvent, FilterPanelState, ResultsEvent, ResultsState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which panel keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Filters,
    Results,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Filters => Focus::Results,
            Focus::Results => Focus::Filters,
        }
    }
}

/// TUI presentation state: the persistent component states plus focus.
pub struct TuiState {
    pub filter_panel: FilterPanelState,
    pub results: ResultsState,
    /// Last selected record — props for the detail panel.
    pub detail: Option<Resource>,
    pub focus: Focus,
    /// When the current store was committed.
    pub loaded_at: Option<DateTime<Local>>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            filter_panel: FilterPanelState::new(&config.categories),
            results: ResultsState::new(config.query_scope),
            detail: None,
            focus: Focus::Filters,
            loaded_at: None,
        }
    }
}

/// Pick the provider matching the resolved source, plus the reference to
/// hand the loader on startup.
fn build_provider(config: &ResolvedConfig) -> (Arc<dyn ResourceProvider>, Option<String>) {
    match &config.source {
        Some(DataSource::File(path)) => (Arc::new(FileProvider), Some(path.display().to_string())),
        Some(DataSource::Http(url)) => (Arc::new(HttpProvider::new()), Some(url.clone())),
        None => (Arc::new(HttpProvider::new()), None),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let (provider, initial_source) = build_provider(&config);

    // Channel for load outcomes from background fetch tasks
    let (tx, rx) = mpsc::channel::<LoadOutcome>();
    let mut loader = DataLoader::new(provider, tx);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();

    if let Some(source) = &initial_source {
        loader.set_source(source);
    }

    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &mut tui, &loader))?;
            needs_redraw = false;
        }

        // Short poll while a load is in flight so completion shows promptly
        let timeout = if matches!(loader.state(), LoadState::Loading(_)) {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Escape) {
                should_quit = true;
                continue;
            }

            if matches!(event, TuiEvent::FocusNext | TuiEvent::FocusPrev) {
                tui.focus = tui.focus.toggle();
                continue;
            }

            // Route to the focused panel; relay whatever it emits.
            match tui.focus {
                Focus::Filters => {
                    if let Some(FilterPanelEvent::Apply(filters)) =
                        tui.filter_panel.handle_event(&event)
                    {
                        debug!("Filters changed: {:?}", filters);
                        tui.results.set_filters(filters.into());
                    }
                }
                Focus::Results => {
                    if let Some(ResultsEvent::Selected(resource)) =
                        tui.results.handle_event(&event)
                    {
                        debug!("Resource selected: {}", resource.id);
                        tui.detail = Some(resource);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle completed fetches from background tasks
        while let Ok(outcome) = rx.try_recv() {
            needs_redraw = true;
            if let Some(store) = loader.commit(outcome) {
                tui.loaded_at = Some(Local::now());
                tui.results.set_resources(store);
            }
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::QueryScope;
    use crate::test_support::sample_store;

    fn test_config() -> ResolvedConfig {
        ResolvedConfig {
            source: None,
            query_scope: QueryScope::AllFields,
            categories: vec!["Academic".to_string(), "Wellness".to_string()],
        }
    }

    /// The relay the run loop performs, without a terminal: a panel
    /// submit lands in the results state as a filter merge.
    #[test]
    fn test_panel_apply_relays_to_results() {
        let mut tui = TuiState::new(&test_config());
        tui.results.set_resources(sample_store());

        for c in "math".chars() {
            tui.filter_panel.handle_event(&TuiEvent::InputChar(c));
        }
        if let Some(FilterPanelEvent::Apply(filters)) =
            tui.filter_panel.handle_event(&TuiEvent::Submit)
        {
            tui.results.set_filters(filters.into());
        }

        assert_eq!(tui.results.filtered().len(), 1);
        assert_eq!(tui.results.filtered()[0].id, "1");
    }

    /// Reset flows back through the same relay and lands unfiltered.
    #[test]
    fn test_panel_reset_relays_to_unfiltered_view() {
        let mut tui = TuiState::new(&test_config());
        tui.results.set_resources(sample_store());

        for c in "math".chars() {
            tui.filter_panel.handle_event(&TuiEvent::InputChar(c));
        }
        for event in [TuiEvent::Submit, TuiEvent::Reset] {
            if let Some(FilterPanelEvent::Apply(filters)) =
                tui.filter_panel.handle_event(&event)
            {
                tui.results.set_filters(filters.into());
            }
        }

        assert_eq!(tui.results.filtered().len(), sample_store().len());
    }

    #[test]
    fn test_selection_relays_to_detail() {
        let mut tui = TuiState::new(&test_config());
        tui.results.set_resources(sample_store());

        if let Some(ResultsEvent::Selected(resource)) =
            tui.results.handle_event(&TuiEvent::Submit)
        {
            tui.detail = Some(resource);
        }

        assert_eq!(tui.detail.as_ref().map(|r| r.id.as_str()), Some("1"));
    }

    #[test]
    fn test_focus_toggles_between_panels() {
        assert_eq!(Focus::Filters.toggle(), Focus::Results);
        assert_eq!(Focus::Results.toggle(), Focus::Filters);
    }
}
