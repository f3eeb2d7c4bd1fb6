use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components here follow the persistent-state + transient-wrapper
/// pattern: long-lived state structs hold the data and handle events,
/// and a short-lived wrapper borrows that state for one render pass.
///
/// The `render` method takes `&mut self` so components can update
/// internal presentation state (list offsets, cached widths) during the
/// pass, aligning with Ratatui's `StatefulWidget` model.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
