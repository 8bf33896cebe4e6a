use super::{back_button, common_keys, render_column};
use crate::routes::AppRoute;
use nav_nexus::{Action, BoxedScreen, Context, Event, EventContext, Screen};
use ratatui::text::Line;

/// Last destination; the only way out is back.
pub struct FifthScreen;

impl FifthScreen {
    pub fn boxed() -> BoxedScreen<AppRoute> {
        Box::new(Self)
    }
}

impl Screen<AppRoute> for FifthScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<'_, AppRoute>) {
        let depth = format!("{} screens deep", cx.depth());
        render_column(frame, cx.area, "Fifth", vec![Line::from(depth), back_button()]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<'_, AppRoute>) -> Option<Action<AppRoute>> {
        match event {
            Event::Key(key) => common_keys(&key),
            _ => None,
        }
    }
}
