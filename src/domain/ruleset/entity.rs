//! Ruleset entities and their wire encodings

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, ordered collection of event-processing rules scoped to a team.
///
/// Full form of the resource, returned by get/create/update. Unset fields
/// are omitted from request bodies; `id` is server-assigned and stays unset
/// on creation input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Marks the team's catch-all ruleset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ruleset: Option<bool>,

    /// Server-defined routing key values, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_keys: Option<Vec<Value>>,

    /// Ordered rules; evaluation order is significant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<EventRule>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ruleset_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_version: Option<String>,

    /// Carried as a string of digits on the wire, not a JSON number.
    #[serde(
        default,
        with = "format_version_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One conditional rule within a ruleset.
///
/// The rule grammar (actions, condition expressions) is server-defined and
/// not interpreted here; nested values are carried verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Value>,

    /// Whether this rule is the ruleset's fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_all: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_condition: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Summary form of a ruleset as returned by the list endpoint.
///
/// The list endpoint keys the team id as `teamId` while the full resource
/// uses `team_id`. The divergence is the server's; it is mirrored here, not
/// normalized, and the two shapes are never interchangeable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListedRuleset {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, rename = "teamId", skip_serializing_if = "String::is_empty")]
    pub team_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// Wrapper object returned by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRulesetsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rulesets: Vec<ListedRuleset>,
}

/// `format_version` travels as a JSON string containing digits ("2"), not a
/// JSON number. Observed server behavior, preserved as-is.
mod format_version_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
