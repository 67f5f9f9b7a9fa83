use ratatui::layout::Rect;
use ratatui::Frame;

/// A piece of UI that paints itself into a ratatui `Frame`.
///
/// `render` takes `&mut self` so a component can cache what it computed
/// during the pass (e.g. where it put the cursor).
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
