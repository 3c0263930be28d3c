//! Domain layer - entities and errors

pub mod error;
pub mod ruleset;

pub use error::ClientError;
pub use ruleset::{EventRule, ListRulesetsResponse, ListedRuleset, Ruleset};
