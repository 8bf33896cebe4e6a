//! Router module.
//!
//! Route identity traits, the back stack, the route registry and the
//! `Navigator` facade that owns the stack.

pub mod navigator;
pub mod registry;
pub mod stack;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use navigator::Navigator;
pub use registry::{RegistryBuilder, RouteRegistry};
pub use stack::{BackStack, BackStackEntry, BackStackSnapshot};
pub use traits::{RouteArgs, RouteDescriptor};
