use super::{button, common_keys, render_column};
use crate::routes::{AppRoute, SecondRoute};
use crossterm::event::KeyCode;
use nav_nexus::{Action, BoxedScreen, Context, Event, EventContext, SavedState, Screen};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const TEXT_KEY: &str = "text";

/// Start destination: a text field whose content is handed to the second screen.
#[derive(Default)]
pub struct FirstScreen {
    text: String,
}

impl FirstScreen {
    pub fn boxed() -> BoxedScreen<AppRoute> {
        Box::new(Self::default())
    }
}

impl Screen<AppRoute> for FirstScreen {
    fn restore_state(&mut self, saved: &SavedState) -> nav_nexus::Result<()> {
        self.text = saved.get(TEXT_KEY)?.unwrap_or_default();
        Ok(())
    }

    fn save_state(&self, saved: &mut SavedState) -> nav_nexus::Result<()> {
        saved.put(TEXT_KEY, &self.text)
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<'_, AppRoute>) {
        let field = Line::from(vec![
            Span::raw("> "),
            Span::styled(self.text.as_str(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]);
        let rows = vec![
            field,
            Line::from(""),
            button("Enter", "Go to SecondScreen"),
        ];
        render_column(frame, cx.area, "First", rows);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<'_, AppRoute>) -> Option<Action<AppRoute>> {
        match event {
            Event::Key(key) => {
                if let Some(action) = common_keys(&key) {
                    return Some(action);
                }
                match key.code {
                    KeyCode::Enter => Some(Action::navigate(SecondRoute {
                        text: Some(self.text.clone()),
                    })),
                    KeyCode::Backspace => {
                        self.text.pop();
                        None
                    }
                    KeyCode::Char(c) => {
                        self.text.push(c);
                        None
                    }
                    _ => None,
                }
            }
            Event::Paste(pasted) => {
                self.text.push_str(&pasted);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use nav_nexus::Navigator;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_passes_typed_text() {
        let navigator = Navigator::<AppRoute>::new(crate::routes::FirstRoute);
        let mut cx = Context::new(&navigator, Rect::default());
        let mut screen = FirstScreen::default();

        for c in "abx".chars() {
            assert!(screen.handle_event(key(KeyCode::Char(c)), &mut cx).is_none());
        }
        screen.handle_event(key(KeyCode::Backspace), &mut cx);
        screen.handle_event(key(KeyCode::Char('c')), &mut cx);

        let action = screen.handle_event(key(KeyCode::Enter), &mut cx);
        assert_eq!(
            action,
            Some(Action::navigate(SecondRoute {
                text: Some("abc".to_string())
            }))
        );
    }

    #[test]
    fn test_esc_requests_root_back() {
        let navigator = Navigator::<AppRoute>::new(crate::routes::FirstRoute);
        let mut cx = Context::new(&navigator, Rect::default());
        let mut screen = FirstScreen::default();
        assert_eq!(screen.handle_event(key(KeyCode::Esc), &mut cx), Some(Action::Back));
    }

    #[test]
    fn test_text_survives_save_and_restore() {
        let mut screen = FirstScreen {
            text: "draft".to_string(),
        };
        let mut saved = SavedState::new();
        screen.save_state(&mut saved).unwrap();

        screen = FirstScreen::default();
        screen.restore_state(&saved).unwrap();
        assert_eq!(screen.text, "draft");
    }
}
