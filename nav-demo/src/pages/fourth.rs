use super::{back_button, button, common_keys, render_column};
use crate::routes::{AppRoute, FifthRoute};
use crossterm::event::KeyCode;
use nav_nexus::{Action, BoxedScreen, Context, Event, EventContext, Screen};

pub struct FourthScreen;

impl FourthScreen {
    pub fn boxed() -> BoxedScreen<AppRoute> {
        Box::new(Self)
    }
}

impl Screen<AppRoute> for FourthScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<'_, AppRoute>) {
        let rows = vec![button("Enter", "Go to FifthScreen"), back_button()];
        render_column(frame, cx.area, "Fourth", rows);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<'_, AppRoute>) -> Option<Action<AppRoute>> {
        let Event::Key(key) = event else {
            return None;
        };
        if let Some(action) = common_keys(&key) {
            return Some(action);
        }
        match key.code {
            KeyCode::Enter => Some(Action::navigate(FifthRoute)),
            _ => None,
        }
    }
}
