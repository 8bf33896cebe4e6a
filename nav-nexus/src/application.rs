//! Screen host and terminal application loop.

use crate::component::traits::{Action, BoxedScreen, Event};
use crate::config::{HostConfig, RootBackPolicy};
use crate::router::{Navigator, RouteDescriptor, RouteRegistry};
use crate::state::EntryId;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use tokio::sync::watch;

/// A read-only view of navigation passed to screen methods.
pub struct Context<'a, R: RouteDescriptor> {
    pub area: Rect,
    navigator: &'a Navigator<R>,
}

impl<'a, R: RouteDescriptor> Context<'a, R> {
    pub fn new(navigator: &'a Navigator<R>, area: Rect) -> Self {
        Self { area, navigator }
    }

    pub fn navigator(&self) -> &Navigator<R> {
        self.navigator
    }

    pub fn current_route(&self) -> &R {
        self.navigator.current_route()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn depth(&self) -> usize {
        self.navigator.depth()
    }
}

/// EventContext for event handling, currently identical to Context but renamed for clarity.
pub type EventContext<'a, R> = Context<'a, R>;

/// Whether the host loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Renders the top of the back stack and applies screen actions.
///
/// The host owns the `Navigator` and rebuilds the active screen through the
/// registry every time the top entry changes.
pub struct NavHost<R: RouteDescriptor> {
    registry: RouteRegistry<R, BoxedScreen<R>>,
    navigator: Navigator<R>,
    active: BoxedScreen<R>,
    changes: watch::Receiver<EntryId>,
    root_back: RootBackPolicy,
    area: Rect,
}

impl<R: RouteDescriptor> NavHost<R> {
    /// Build the screen for the navigator's current route.
    pub fn new(
        registry: RouteRegistry<R, BoxedScreen<R>>,
        navigator: Navigator<R>,
        config: &HostConfig,
    ) -> crate::Result<Self> {
        let active = build_screen(&registry, &navigator)?;
        let changes = navigator.subscribe();
        Ok(Self {
            registry,
            navigator,
            active,
            changes,
            root_back: config.root_back,
            area: Rect::default(),
        })
    }

    pub fn navigator(&self) -> &Navigator<R> {
        &self.navigator
    }

    pub fn current_route(&self) -> &R {
        self.navigator.current_route()
    }

    /// Draw the active screen over the whole frame.
    pub fn render(&mut self, frame: &mut Frame) {
        self.area = frame.area();
        let mut cx = Context::new(&self.navigator, self.area);
        self.active.render(frame, &mut cx);
    }

    /// Hand `event` to the active screen and apply whatever it asks for.
    pub fn dispatch(&mut self, event: Event) -> crate::Result<Flow> {
        if let Event::Resize(width, height) = event {
            self.area = Rect::new(0, 0, width, height);
        }

        let action = {
            let mut cx = Context::new(&self.navigator, self.area);
            self.active.handle_event(event, &mut cx)
        };

        match action {
            Some(action) => self.apply(action),
            None => Ok(Flow::Continue),
        }
    }

    /// Apply a navigation action, then rebuild the screen if the top changed.
    pub fn apply(&mut self, action: Action<R>) -> crate::Result<Flow> {
        match action {
            Action::Navigate(route) => {
                let entry = self.navigator.current_entry_mut();
                self.active.save_state(entry.saved_state_mut())?;
                self.navigator.navigate(route);
            }
            Action::Back => {
                if !self.navigator.go_back() && self.root_back == RootBackPolicy::Exit {
                    log::info!("back from start destination, exiting");
                    return Ok(Flow::Exit);
                }
            }
            Action::Quit => return Ok(Flow::Exit),
            Action::Noop => {}
        }

        self.sync()?;
        Ok(Flow::Continue)
    }

    fn sync(&mut self) -> crate::Result<()> {
        if !self.changes.has_changed().unwrap_or(false) {
            return Ok(());
        }
        // Mark the change seen only once the new screen is in place, so a
        // failed rebuild is retried on the next call.
        self.active = build_screen(&self.registry, &self.navigator)?;
        let id = *self.changes.borrow_and_update();
        log::debug!(
            "screen rebuilt for {} (entry {id})",
            self.navigator.current_route().kind()
        );
        Ok(())
    }
}

fn build_screen<R: RouteDescriptor>(
    registry: &RouteRegistry<R, BoxedScreen<R>>,
    navigator: &Navigator<R>,
) -> crate::Result<BoxedScreen<R>> {
    let entry = navigator.current_entry();
    let mut screen = registry.resolve(entry.route())?;
    screen.restore_state(entry.saved_state())?;
    Ok(screen)
}

/// Main application handle.
pub struct Application {
    config: HostConfig,
}

impl Application {
    /// Create a new application instance.
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    /// Run `host` in the terminal until a screen quits.
    pub fn run<R: RouteDescriptor>(self, host: &mut NavHost<R>) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, event::EnableFocusChange)?;
        if self.config.mouse_capture {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        log::info!("host started at {}", host.current_route().kind());
        let result = self.run_app_loop(&mut terminal, host);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            event::DisableFocusChange
        )?;
        if self.config.mouse_capture {
            execute!(terminal.backend_mut(), DisableMouseCapture)?;
        }
        terminal.show_cursor()?;

        log::info!("host stopped at depth {}", host.navigator().depth());
        result
    }

    fn run_app_loop<R: RouteDescriptor>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        host: &mut NavHost<R>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| host.render(frame))?;

            if !event::poll(self.config.tick_rate())? {
                continue;
            }

            let event = match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                CrosstermEvent::FocusGained => Event::FocusGained,
                CrosstermEvent::FocusLost => Event::FocusLost,
                CrosstermEvent::Paste(s) => Event::Paste(s),
                _ => continue,
            };

            if host.dispatch(event)? == Flow::Exit {
                return Ok(());
            }
        }
    }
}
