//! Ruleset domain entities

mod entity;

pub use entity::{EventRule, ListRulesetsResponse, ListedRuleset, Ruleset};
