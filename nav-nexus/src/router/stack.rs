//! The navigation back stack.
//!
//! `BackStack` keeps the start destination apart from the entries pushed on
//! top of it, so it can never become empty.

use super::traits::RouteDescriptor;
use crate::error::{EmptySnapshotSnafu, EmptyStackSnafu};
use crate::state::{EntryId, SavedState};
use serde::{Deserialize, Serialize};
use snafu::OptionExt;

/// One visit to a route.
#[derive(Debug, Clone)]
pub struct BackStackEntry<R> {
    id: EntryId,
    route: R,
    saved: SavedState,
}

impl<R> BackStackEntry<R> {
    fn new(route: R, saved: SavedState) -> Self {
        Self {
            id: EntryId::next(),
            route,
            saved,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The route this entry was pushed with. Never changes.
    pub fn route(&self) -> &R {
        &self.route
    }

    pub fn saved_state(&self) -> &SavedState {
        &self.saved
    }

    pub fn saved_state_mut(&mut self) -> &mut SavedState {
        &mut self.saved
    }

    pub fn into_route(self) -> R {
        self.route
    }
}

/// An ordered, non-empty history of visited routes.
///
/// # Example
/// ```ignore
/// let mut stack = BackStack::new(AppRoute::from(HomeRoute));
/// stack.push(AppRoute::from(DetailRoute { id: 1 }));
/// assert_eq!(stack.depth(), 2);
/// stack.pop()?;
/// assert!(stack.pop().is_err()); // the start entry stays
/// ```
#[derive(Debug, Clone)]
pub struct BackStack<R> {
    start: BackStackEntry<R>,
    above: Vec<BackStackEntry<R>>,
}

impl<R: RouteDescriptor> BackStack<R> {
    /// Create a stack holding only `start`.
    pub fn new(start: R) -> Self {
        Self {
            start: BackStackEntry::new(start, SavedState::new()),
            above: Vec::new(),
        }
    }

    /// Number of entries, always at least 1.
    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }

    /// Check if there's an entry above the start destination.
    pub fn can_pop(&self) -> bool {
        !self.above.is_empty()
    }

    /// The entry currently on top.
    pub fn top(&self) -> &BackStackEntry<R> {
        self.above.last().unwrap_or(&self.start)
    }

    pub fn top_mut(&mut self) -> &mut BackStackEntry<R> {
        match self.above.last_mut() {
            Some(entry) => entry,
            None => &mut self.start,
        }
    }

    /// The start destination at the bottom of the stack.
    pub fn start(&self) -> &BackStackEntry<R> {
        &self.start
    }

    /// Push a new entry for `route`. The same route may be pushed any number of times.
    pub fn push(&mut self, route: R) -> EntryId {
        let entry = BackStackEntry::new(route, SavedState::new());
        let id = entry.id;
        self.above.push(entry);
        id
    }

    /// Remove the top entry. Fails with `EmptyStack` when only the start entry is left.
    pub fn pop(&mut self) -> crate::Result<BackStackEntry<R>> {
        self.above.pop().context(EmptyStackSnafu)
    }

    /// Replace the whole history with a single fresh start entry.
    pub fn reset(&mut self, start: R) -> EntryId {
        self.above.clear();
        self.start = BackStackEntry::new(start, SavedState::new());
        self.start.id
    }

    /// Entries from the start destination to the top.
    pub fn iter(&self) -> impl Iterator<Item = &BackStackEntry<R>> {
        std::iter::once(&self.start).chain(self.above.iter())
    }

    /// Routes from the start destination to the top.
    pub fn routes(&self) -> impl Iterator<Item = &R> {
        self.iter().map(BackStackEntry::route)
    }

    pub fn find(&self, id: EntryId) -> Option<&BackStackEntry<R>> {
        self.iter().find(|entry| entry.id == id)
    }

    /// Copy the routes and saved state into a serializable form.
    pub fn snapshot(&self) -> BackStackSnapshot<R> {
        BackStackSnapshot {
            entries: self
                .iter()
                .map(|entry| SnapshotEntry {
                    route: entry.route.clone(),
                    saved: entry.saved.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a stack from a snapshot. Entries get fresh IDs.
    pub fn from_snapshot(snapshot: BackStackSnapshot<R>) -> crate::Result<Self> {
        let mut entries = snapshot.entries.into_iter();
        let first = entries.next().context(EmptySnapshotSnafu)?;
        Ok(Self {
            start: BackStackEntry::new(first.route, first.saved),
            above: entries
                .map(|entry| BackStackEntry::new(entry.route, entry.saved))
                .collect(),
        })
    }
}

/// Serializable copy of a back stack, bottom entry first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackStackSnapshot<R> {
    entries: Vec<SnapshotEntry<R>>,
}

impl<R> BackStackSnapshot<R> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SnapshotEntry<R> {
    route: R,
    #[serde(default)]
    saved: SavedState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::testing::{second, third, FirstRoute, TestRoute};

    fn start() -> BackStack<TestRoute> {
        BackStack::new(TestRoute::from(FirstRoute))
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = start();
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_pop());

        stack.push(second("abc"));
        stack.push(third(42));
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.top().route(), &third(42));

        let popped = stack.pop().unwrap();
        assert_eq!(popped.into_route(), third(42));
        assert_eq!(stack.top().route(), &second("abc"));

        stack.pop().unwrap();
        assert_eq!(stack.top().route(), &TestRoute::from(FirstRoute));
    }

    #[test]
    fn test_pop_never_removes_start() {
        let mut stack = start();
        let start_id = stack.top().id();

        for _ in 0..3 {
            assert!(matches!(stack.pop(), Err(crate::Error::EmptyStack)));
            assert_eq!(stack.depth(), 1);
            assert_eq!(stack.top().id(), start_id);
        }
    }

    #[test]
    fn test_same_route_gets_distinct_entries() {
        let mut stack = start();
        let a = stack.push(third(1));
        let b = stack.push(third(1));

        assert_ne!(a, b);
        assert_eq!(stack.depth(), 3);
        assert!(stack.find(a).is_some());
        assert!(stack.find(b).is_some());
    }

    #[test]
    fn test_reset_replaces_history() {
        let mut stack = start();
        stack.push(second("x"));
        stack.push(third(2));

        let id = stack.reset(third(9));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().id(), id);
        assert_eq!(stack.start().route(), &third(9));
    }

    #[test]
    fn test_routes_are_bottom_to_top() {
        let mut stack = start();
        stack.push(second("abc"));
        stack.push(third(42));

        let routes: Vec<_> = stack.routes().cloned().collect();
        assert_eq!(
            routes,
            vec![TestRoute::from(FirstRoute), second("abc"), third(42)]
        );
    }

    #[test]
    fn test_snapshot_keeps_routes_and_saved_state() {
        let mut stack = start();
        stack.top_mut().saved_state_mut().put("text", "draft").unwrap();
        stack.push(second("abc"));

        let snapshot = stack.snapshot();
        assert_eq!(snapshot.len(), 2);

        let restored = BackStack::from_snapshot(snapshot).unwrap();
        assert_eq!(restored.depth(), 2);
        assert_eq!(restored.top().route(), &second("abc"));
        assert_eq!(
            restored.start().saved_state().get::<String>("text").unwrap().as_deref(),
            Some("draft")
        );
        assert_ne!(restored.start().id(), stack.start().id());
    }

    #[test]
    fn test_empty_snapshot_is_rejected() {
        let snapshot = BackStackSnapshot::<TestRoute> { entries: Vec::new() };
        assert!(snapshot.is_empty());
        assert!(matches!(
            BackStack::from_snapshot(snapshot),
            Err(crate::Error::EmptySnapshot)
        ));
    }
}
