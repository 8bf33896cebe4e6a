extern crate self as nav_nexus;

pub mod application;
pub mod component;
pub mod config;
pub mod state;
pub mod router;
pub mod error;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{Application, Context, EventContext, Flow, NavHost};
pub use component::{Action, BoxedScreen, Event, Screen};
pub use config::{HostConfig, RootBackPolicy};
pub use state::{EntryId, SavedState};
pub use router::{
    BackStack, BackStackEntry, BackStackSnapshot, Navigator, RegistryBuilder, RouteArgs,
    RouteDescriptor, RouteRegistry,
};
pub use nav_setup::routes;
