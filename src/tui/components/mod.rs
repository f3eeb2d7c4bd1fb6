//! # TUI Components
//!
//! All UI components for the terminal interface. Two patterns are in
//! use, mirrored across the module:
//!
//! - **Stateful components** own persistent state in `TuiState` and emit
//!   typed events from `handle_event`: the filter panel and the results
//!   list. Their event enums are the only way filter intent and
//!   selections travel between panels — components never hold references
//!   to each other, the run loop relays.
//! - **Stateless components** receive everything as props each frame:
//!   the title bar and the detail panel.
//!
//! Each component file is self-contained: state type, event type,
//! rendering, event handling, and tests live together.

pub mod detail_panel;
pub mod filter_panel;
pub mod results_list;
pub mod title_bar;

pub use detail_panel::DetailPanel;
pub use filter_panel::{FilterPanel, FilterPanelEvent, FilterPanelState};
pub use results_list::{ResultsEvent, ResultsList, ResultsState};
pub use title_bar::TitleBar;
