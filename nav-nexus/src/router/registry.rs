//! Route registry: one renderer per route tag.
//!
//! Renderers are registered through `RegistryBuilder::route`, keyed by the
//! `RouteArgs::KIND` of the argument type they accept. `build` refuses a
//! registry that misses a tag or registers one twice.

use super::traits::{RouteArgs, RouteDescriptor};
use crate::error::{ArgsMismatchSnafu, DuplicateRouteSnafu, UnregisteredRouteSnafu};
use snafu::OptionExt;
use std::collections::HashMap;

type Renderer<R, S> = Box<dyn Fn(&R) -> crate::Result<S> + Send + Sync>;

/// A total mapping from route tag to renderer.
///
/// `S` is whatever a renderer produces; the screen host uses `BoxedScreen<R>`.
pub struct RouteRegistry<R: RouteDescriptor, S> {
    renderers: HashMap<R::Kind, Renderer<R, S>>,
}

impl<R: RouteDescriptor, S> RouteRegistry<R, S> {
    pub fn builder() -> RegistryBuilder<R, S> {
        RegistryBuilder::new()
    }

    /// Run the renderer registered for `route`'s tag.
    pub fn resolve(&self, route: &R) -> crate::Result<S> {
        let kind = route.kind();
        let render = self
            .renderers
            .get(&kind)
            .context(UnregisteredRouteSnafu {
                kind: kind.to_string(),
            })?;
        render(route)
    }

    pub fn contains(&self, kind: R::Kind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

/// Collects renderers before validating them into a `RouteRegistry`.
pub struct RegistryBuilder<R: RouteDescriptor, S> {
    renderers: HashMap<R::Kind, Renderer<R, S>>,
    duplicates: Vec<R::Kind>,
}

impl<R: RouteDescriptor, S> RegistryBuilder<R, S> {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
            duplicates: Vec::new(),
        }
    }

    /// Register the renderer for the route variant carrying `A`.
    pub fn route<A, F>(mut self, render: F) -> Self
    where
        A: RouteArgs<R> + 'static,
        F: Fn(&A) -> S + Send + Sync + 'static,
    {
        let renderer: Renderer<R, S> = Box::new(move |route: &R| {
            let args = A::from_route(route).context(ArgsMismatchSnafu {
                kind: route.kind().to_string(),
            })?;
            Ok(render(args))
        });

        if self.renderers.insert(A::KIND, renderer).is_some() {
            self.duplicates.push(A::KIND);
        }
        self
    }

    /// Validate that every tag of `R` has exactly one renderer.
    pub fn build(self) -> crate::Result<RouteRegistry<R, S>> {
        if let Some(kind) = self.duplicates.first() {
            return DuplicateRouteSnafu {
                kind: kind.to_string(),
            }
            .fail();
        }

        if let Some(kind) = R::kinds()
            .iter()
            .find(|kind| !self.renderers.contains_key(*kind))
        {
            return UnregisteredRouteSnafu {
                kind: kind.to_string(),
            }
            .fail();
        }

        log::debug!("Route registry built with {} routes", self.renderers.len());
        Ok(RouteRegistry {
            renderers: self.renderers,
        })
    }
}

impl<R: RouteDescriptor, S> Default for RegistryBuilder<R, S> {
    fn default() -> Self {
        Self::new()
    }
}
