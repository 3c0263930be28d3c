//! Ruleset resource service

mod service;

pub use service::RulesetService;
