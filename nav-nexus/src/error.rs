use snafu::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("No renderer registered for route `{kind}`"))]
    UnregisteredRoute { kind: String },

    #[snafu(display("Route `{kind}` is registered more than once"))]
    DuplicateRoute { kind: String },

    #[snafu(display("Route `{kind}` does not carry the arguments its renderer expects"))]
    ArgsMismatch { kind: String },

    #[snafu(display("Back stack is already at its start destination"))]
    EmptyStack,

    #[snafu(display("Unknown route: '{name}'. Available routes: {available}"))]
    UnknownRoute { name: String, available: String },

    #[snafu(display("Back stack snapshot has no entries"))]
    EmptySnapshot,

    #[snafu(display("Failed to encode state: {source}"))]
    Encode { source: serde_json::Error },

    #[snafu(display("Failed to decode state: {source}"))]
    Decode { source: serde_json::Error },

    #[snafu(display("Failed to read config {}: {source}", path.display()))]
    ReadConfig { path: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to parse config: {source}"))]
    ParseConfig { source: toml::de::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
