//! Route identity traits.
//!
//! A route enum is a closed set of destinations. `RouteDescriptor` exposes the
//! tag of each variant, and `RouteArgs` binds an argument type to the single
//! variant that carries it. Both are normally generated by `#[routes]`.

use std::fmt;
use std::hash::Hash;

/// A closed, immutable set of navigation destinations.
///
/// # Example
/// ```ignore
/// use nav_nexus::{routes, RouteDescriptor};
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct HomeRoute;
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct DetailRoute { pub id: i32 }
///
/// #[routes]
/// #[derive(Debug, Clone, PartialEq)]
/// pub enum AppRoute {
///     Home(HomeRoute),
///     Detail(DetailRoute),
/// }
///
/// let route = AppRoute::from(DetailRoute { id: 7 });
/// assert_eq!(route.kind(), AppRouteKind::Detail);
/// assert_eq!(AppRoute::kinds().len(), 2);
/// ```
pub trait RouteDescriptor: Clone + fmt::Debug + Send + Sync + 'static {
    /// Variant tag used as the registry key.
    type Kind: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// The tag of this route.
    fn kind(&self) -> Self::Kind;

    /// Every tag of the closed set, in declaration order.
    fn kinds() -> &'static [Self::Kind];
}

/// The argument payload of exactly one route variant.
///
/// The registry keys a renderer by `KIND`, so a renderer taking `&A` is only
/// ever handed routes that carry an `A`.
pub trait RouteArgs<R: RouteDescriptor>: Sized {
    const KIND: R::Kind;

    /// Borrow the payload if `route` is the variant carrying `Self`.
    fn from_route(route: &R) -> Option<&Self>;

    /// Wrap the payload in its route variant.
    fn into_route(self) -> R;
}
