use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C — quit unconditionally.
    ForceQuit,
    /// Esc — quit from the top level.
    Escape,
    /// Enter — submit/activate in the focused panel.
    Submit,
    InputChar(char),
    Backspace,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Tab — cycle panel focus forward.
    FocusNext,
    /// Shift+Tab — cycle panel focus backward.
    FocusPrev,
    /// Ctrl+R — reset filters to defaults.
    Reset,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => match (key_event.modifiers, key_event.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
            (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Reset),
            (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
            (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
            (_, KeyCode::Enter) => Some(TuiEvent::Submit),
            (_, KeyCode::Esc) => Some(TuiEvent::Escape),
            (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
            (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
            (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
            (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
            (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
            (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
