//! Typed client for an incident-management service's global event rule
//! rulesets: named, ordered collections of routing/transformation rules
//! applied to inbound events.
//!
//! The resource has two wire representations that are never interchangeable:
//! the full [`Ruleset`] returned by get/create/update, and the summary
//! [`ListedRuleset`] returned only by the list endpoint (which keys the team
//! id as `teamId` where the full form uses `team_id` - a server
//! inconsistency this crate mirrors rather than normalizes).
//!
//! [`RulesetService`] maps the five CRUD operations onto a [`Transport`],
//! the single seam for the actual HTTP exchange. [`HttpTransport`] is the
//! production implementation; authentication, timeouts and connection
//! management are configured there (or on the `reqwest::Client` handed to
//! it), never at the resource layer.
//!
//! ```no_run
//! use rulesets_client::{HttpTransport, Ruleset, RulesetService};
//!
//! # async fn run() -> Result<(), rulesets_client::ClientError> {
//! let transport = HttpTransport::new("https://api.example.com", "api-key");
//! let service = RulesetService::new(transport);
//!
//! let (listing, _meta) = service.list().await?;
//! for ruleset in &listing.rulesets {
//!     println!("{}: {}", ruleset.id, ruleset.name);
//! }
//!
//! let input = Ruleset {
//!     name: Some("Escalations".to_string()),
//!     team_id: Some("TEAM_ID".to_string()),
//!     ..Default::default()
//! };
//! let (created, _meta) = service.create(&input).await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{ClientError, EventRule, ListRulesetsResponse, ListedRuleset, Ruleset};
pub use infrastructure::http::{HttpTransport, Method, ResponseMeta, Transport};
pub use infrastructure::rulesets::RulesetService;
