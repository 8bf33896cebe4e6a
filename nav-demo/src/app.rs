use crate::pages::{FifthScreen, FirstScreen, FourthScreen, SecondScreen, ThirdScreen};
use crate::routes::{AppRoute, FifthRoute, FirstRoute, FourthRoute, SecondRoute, ThirdRoute};
use nav_nexus::{BoxedScreen, HostConfig, NavHost, Navigator, RouteRegistry};

/// One screen per route; `build` fails if a route is left out.
pub fn registry() -> nav_nexus::Result<RouteRegistry<AppRoute, BoxedScreen<AppRoute>>> {
    RouteRegistry::builder()
        .route(|_: &FirstRoute| FirstScreen::boxed())
        .route(SecondScreen::boxed)
        .route(ThirdScreen::boxed)
        .route(|_: &FourthRoute| FourthScreen::boxed())
        .route(|_: &FifthRoute| FifthScreen::boxed())
        .build()
}

/// The host starts with exactly `[FirstRoute]` on the stack.
pub fn build_host(config: &HostConfig) -> nav_nexus::Result<NavHost<AppRoute>> {
    NavHost::new(registry()?, Navigator::new(FirstRoute), config)
}
