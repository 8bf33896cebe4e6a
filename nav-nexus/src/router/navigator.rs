//! Navigator: the single owner of the back stack.
//!
//! Screens never touch the stack directly. The host applies their requests
//! through `navigate` and `go_back`, and every change of the top entry is
//! published on a watch channel.

use super::stack::{BackStack, BackStackEntry, BackStackSnapshot};
use super::traits::RouteDescriptor;
use crate::error::{DecodeSnafu, EncodeSnafu};
use crate::state::EntryId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use snafu::ResultExt;
use tokio::sync::watch;

/// Navigation facade over a `BackStack`.
///
/// Going back from the start destination is a no-op: `go_back` returns
/// `false` and the stack is left untouched. Whether that should end the
/// application is up to the host (see `RootBackPolicy`).
///
/// # Example
/// ```ignore
/// let mut navigator = Navigator::new(HomeRoute);
/// navigator.navigate(DetailRoute { id: 3 });
/// assert_eq!(navigator.depth(), 2);
/// assert!(navigator.go_back());
/// assert!(!navigator.go_back());
/// ```
#[derive(Debug)]
pub struct Navigator<R: RouteDescriptor> {
    stack: BackStack<R>,
    tx: watch::Sender<EntryId>,
}

impl<R: RouteDescriptor> Navigator<R> {
    /// Create a navigator whose stack holds only `start`.
    pub fn new(start: impl Into<R>) -> Self {
        Self::from_stack(BackStack::new(start.into()))
    }

    fn from_stack(stack: BackStack<R>) -> Self {
        let (tx, _) = watch::channel(stack.top().id());
        Self { stack, tx }
    }

    /// The route currently on top of the stack.
    pub fn current_route(&self) -> &R {
        self.stack.top().route()
    }

    pub fn current_entry(&self) -> &BackStackEntry<R> {
        self.stack.top()
    }

    pub fn current_entry_mut(&mut self) -> &mut BackStackEntry<R> {
        self.stack.top_mut()
    }

    /// Push `route` on top of the stack.
    pub fn navigate(&mut self, route: impl Into<R>) {
        let route = route.into();
        log::debug!("navigate -> {} (depth {})", route.kind(), self.stack.depth() + 1);
        let id = self.stack.push(route);
        self.notify(id);
    }

    /// Pop the top entry. Returns true if an entry was removed.
    pub fn go_back(&mut self) -> bool {
        match self.stack.pop() {
            Ok(popped) => {
                log::debug!(
                    "back: {} -> {} (depth {})",
                    popped.route().kind(),
                    self.current_route().kind(),
                    self.stack.depth()
                );
                self.notify(self.stack.top().id());
                true
            }
            Err(err) => {
                log::debug!("back ignored: {err}");
                false
            }
        }
    }

    /// Check if there's an entry to go back to.
    pub fn can_go_back(&self) -> bool {
        self.stack.can_pop()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Drop the whole history and start over at `start`.
    pub fn reset(&mut self, start: impl Into<R>) {
        let start = start.into();
        log::debug!("reset -> {}", start.kind());
        let id = self.stack.reset(start);
        self.notify(id);
    }

    pub fn back_stack(&self) -> &BackStack<R> {
        &self.stack
    }

    /// Subscribe to changes of the top entry.
    ///
    /// The receiver starts out having seen the current top.
    pub fn subscribe(&self) -> watch::Receiver<EntryId> {
        self.tx.subscribe()
    }

    fn notify(&self, id: EntryId) {
        self.tx.send_replace(id);
    }
}

impl<R: RouteDescriptor + Serialize> Navigator<R> {
    /// Serialize the back stack, saved state included, to JSON.
    pub fn snapshot(&self) -> crate::Result<String> {
        serde_json::to_string(&self.stack.snapshot()).context(EncodeSnafu)
    }
}

impl<R: RouteDescriptor + DeserializeOwned> Navigator<R> {
    /// Rebuild a navigator from `snapshot` output.
    pub fn restore(json: &str) -> crate::Result<Self> {
        let snapshot: BackStackSnapshot<R> = serde_json::from_str(json).context(DecodeSnafu)?;
        let stack = BackStack::from_snapshot(snapshot)?;
        log::debug!("restored back stack with {} entries", stack.depth());
        Ok(Self::from_stack(stack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::testing::{second, third, FirstRoute, SecondRoute, TestRoute};

    fn navigator() -> Navigator<TestRoute> {
        Navigator::new(FirstRoute)
    }

    #[test]
    fn test_depth_grows_by_one_per_navigation() {
        let mut nav = navigator();
        for n in 1..=10 {
            nav.navigate(third(n));
            assert_eq!(nav.depth(), 1 + n as usize);
        }
    }

    #[test]
    fn test_navigate_then_back_scenario() {
        let mut nav = navigator();

        nav.navigate(SecondRoute {
            text: Some("abc".to_string()),
        });
        let stack: Vec<_> = nav.back_stack().routes().cloned().collect();
        assert_eq!(stack, vec![TestRoute::from(FirstRoute), second("abc")]);

        nav.navigate(third(42));
        assert_eq!(nav.current_route(), &third(42));

        assert!(nav.go_back());
        assert_eq!(nav.current_route(), &second("abc"));
    }

    #[test]
    fn test_back_reveals_second_from_top() {
        let mut nav = navigator();
        nav.navigate(second("a"));
        nav.navigate(third(1));
        nav.navigate(third(2));

        let routes: Vec<_> = nav.back_stack().routes().cloned().collect();
        let expected = routes[routes.len() - 2].clone();

        assert!(nav.go_back());
        assert_eq!(nav.current_route(), &expected);
    }

    #[test]
    fn test_back_at_start_is_a_noop() {
        let mut nav = navigator();
        assert!(!nav.can_go_back());

        for _ in 0..5 {
            assert!(!nav.go_back());
            assert_eq!(nav.depth(), 1);
            assert_eq!(nav.current_route(), &TestRoute::from(FirstRoute));
        }
    }

    #[test]
    fn test_pushed_text_round_trips() {
        let mut nav = navigator();
        nav.navigate(second("hello"));

        match nav.current_route() {
            TestRoute::Second(args) => assert_eq!(args.text.as_deref(), Some("hello")),
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn test_no_dedup_by_tag() {
        let mut nav = navigator();
        nav.navigate(FirstRoute);
        nav.navigate(FirstRoute);
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_reset() {
        let mut nav = navigator();
        nav.navigate(second("x"));
        nav.reset(third(5));
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current_route(), &third(5));
        assert!(!nav.go_back());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut nav = navigator();
        nav.current_entry_mut()
            .saved_state_mut()
            .put("text", "typed")
            .unwrap();
        nav.navigate(second("abc"));
        nav.navigate(third(42));

        let json = nav.snapshot().unwrap();
        let mut restored = Navigator::<TestRoute>::restore(&json).unwrap();

        assert_eq!(restored.depth(), 3);
        assert_eq!(restored.current_route(), &third(42));
        assert!(restored.go_back());
        assert!(restored.go_back());
        assert_eq!(
            restored
                .current_entry()
                .saved_state()
                .get::<String>("text")
                .unwrap()
                .as_deref(),
            Some("typed")
        );
    }

    #[test]
    fn test_restore_rejects_bad_input() {
        assert!(matches!(
            Navigator::<TestRoute>::restore("not json"),
            Err(crate::Error::Decode { .. })
        ));
        assert!(matches!(
            Navigator::<TestRoute>::restore(r#"{"entries":[]}"#),
            Err(crate::Error::EmptySnapshot)
        ));
    }

    #[tokio::test]
    async fn test_changes_are_published() {
        let mut nav = navigator();
        let mut rx = nav.subscribe();
        assert!(!rx.has_changed().unwrap());

        nav.navigate(second("abc"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), nav.current_entry().id());

        assert!(nav.go_back());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), nav.current_entry().id());

        // A refused back does not notify.
        assert!(!nav.go_back());
        assert!(!rx.has_changed().unwrap());
    }
}
