use crate::application::{Context, EventContext};
use crate::router::RouteDescriptor;
use crate::state::SavedState;

/// Event type for screen interactions.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// Action that a screen can return after handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<R> {
    Navigate(R),
    Back,
    Quit,
    Noop,
}

impl<R> Action<R> {
    /// Navigate to any route argument type convertible into `R`.
    pub fn navigate(route: impl Into<R>) -> Self {
        Action::Navigate(route.into())
    }
}

/// A destination's UI, built by the registry from the route's arguments.
///
/// A screen only lives while its entry is on top. Anything that must survive
/// navigating away and back goes through `save_state` / `restore_state`.
pub trait Screen<R: RouteDescriptor>: Send + 'static {
    /// Called right after the screen is built for a back stack entry.
    fn restore_state(&mut self, saved: &SavedState) -> crate::Result<()> {
        let _ = saved;
        Ok(())
    }

    /// Called before another entry is pushed on top of this one.
    fn save_state(&self, saved: &mut SavedState) -> crate::Result<()> {
        let _ = saved;
        Ok(())
    }

    /// Render the screen into the given area.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<'_, R>);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut EventContext<'_, R>) -> Option<Action<R>> {
        let _ = event;
        let _ = cx;
        None
    }
}

/// What registry renderers produce for the screen host.
pub type BoxedScreen<R> = Box<dyn Screen<R>>;
