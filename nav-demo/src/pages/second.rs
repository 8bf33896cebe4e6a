use super::{back_button, button, common_keys, render_column};
use crate::routes::{AppRoute, SecondRoute, ThirdRoute};
use crossterm::event::KeyCode;
use nav_nexus::{Action, BoxedScreen, Context, Event, EventContext, Screen};
use ratatui::text::Line;

/// Shows the text typed on the first screen.
pub struct SecondScreen {
    text: String,
}

impl SecondScreen {
    pub fn boxed(args: &SecondRoute) -> BoxedScreen<AppRoute> {
        Box::new(Self {
            text: args.text.clone().unwrap_or_default(),
        })
    }
}

impl Screen<AppRoute> for SecondScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<'_, AppRoute>) {
        let rows = vec![
            Line::from(self.text.as_str()),
            Line::from(""),
            button("Enter", "Go to ThirdScreen"),
            back_button(),
        ];
        render_column(frame, cx.area, "Second", rows);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<'_, AppRoute>) -> Option<Action<AppRoute>> {
        let Event::Key(key) = event else {
            return None;
        };
        if let Some(action) = common_keys(&key) {
            return Some(action);
        }
        match key.code {
            KeyCode::Enter => Some(Action::navigate(ThirdRoute {
                num: rand::random::<i32>(),
            })),
            _ => None,
        }
    }
}
