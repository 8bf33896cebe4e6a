use super::{back_button, button, common_keys, render_column};
use crate::routes::{AppRoute, FourthRoute, ThirdRoute};
use crossterm::event::KeyCode;
use nav_nexus::{Action, BoxedScreen, Context, Event, EventContext, Screen};
use ratatui::text::Line;

/// Shows the number picked on the second screen.
pub struct ThirdScreen {
    num: i32,
}

impl ThirdScreen {
    pub fn boxed(args: &ThirdRoute) -> BoxedScreen<AppRoute> {
        Box::new(Self { num: args.num })
    }
}

impl Screen<AppRoute> for ThirdScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<'_, AppRoute>) {
        let rows = vec![
            Line::from(self.num.to_string()),
            Line::from(""),
            button("Enter", "Go to FourthScreen"),
            back_button(),
        ];
        render_column(frame, cx.area, "Third", rows);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<'_, AppRoute>) -> Option<Action<AppRoute>> {
        let Event::Key(key) = event else {
            return None;
        };
        if let Some(action) = common_keys(&key) {
            return Some(action);
        }
        match key.code {
            KeyCode::Enter => Some(Action::navigate(FourthRoute)),
            _ => None,
        }
    }
}
