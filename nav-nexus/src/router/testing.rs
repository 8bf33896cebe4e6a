//! Route set shared by the unit tests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstRoute;

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

#[crate::routes]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TestRoute {
    First(FirstRoute),
    Second(SecondRoute),
    Third(ThirdRoute),
    Fourth(FourthRoute),
    Fifth(FifthRoute),
}

pub fn second(text: &str) -> TestRoute {
    TestRoute::from(SecondRoute {
        text: Some(text.to_string()),
    })
}

pub fn third(num: i32) -> TestRoute {
    TestRoute::from(ThirdRoute { num })
}
