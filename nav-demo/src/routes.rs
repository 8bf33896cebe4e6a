//! The demo's closed set of destinations and their arguments.

use nav_nexus::routes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstRoute;

/// Carries whatever was typed on the first screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondRoute {
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdRoute {
    pub num: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourthRoute;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FifthRoute;

#[routes]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppRoute {
    First(FirstRoute),
    Second(SecondRoute),
    Third(ThirdRoute),
    Fourth(FourthRoute),
    Fifth(FifthRoute),
}
