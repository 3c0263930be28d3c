use serde::de::DeserializeOwned;

use crate::domain::{ClientError, ListRulesetsResponse, Ruleset};
use crate::infrastructure::http::{Method, ResponseMeta, Transport};

const RULESETS_PATH: &str = "/global-event-rules/rulesets";

/// Client for the ruleset resource.
///
/// Holds the transport by value and nothing else; every operation is one
/// stateless exchange, so a shared reference can issue calls concurrently.
/// Errors from the transport are propagated unchanged.
#[derive(Debug)]
pub struct RulesetService<T: Transport> {
    transport: T,
}

impl<T: Transport> RulesetService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    // The identifier is assumed URL-safe; the transport does not escape it.
    fn resource_path(id: &str) -> String {
        format!("{}/{}", RULESETS_PATH, id)
    }

    /// List existing rulesets, in the summary form. No pagination.
    pub async fn list(&self) -> Result<(ListRulesetsResponse, ResponseMeta), ClientError> {
        let (body, meta) = self
            .transport
            .execute(Method::GET, RULESETS_PATH, None, None)
            .await?;
        Ok((decode(body)?, meta))
    }

    /// Create a ruleset from the caller-supplied fields. The server assigns
    /// `id`, `type` and the rest of the response's fields.
    pub async fn create(&self, ruleset: &Ruleset) -> Result<(Ruleset, ResponseMeta), ClientError> {
        let body = encode(ruleset)?;
        let (body, meta) = self
            .transport
            .execute(Method::POST, RULESETS_PATH, None, Some(&body))
            .await?;
        Ok((decode(body)?, meta))
    }

    /// Retrieve one ruleset by id, in the full form.
    pub async fn get(&self, id: &str) -> Result<(Ruleset, ResponseMeta), ClientError> {
        let (body, meta) = self
            .transport
            .execute(Method::GET, &Self::resource_path(id), None, None)
            .await?;
        Ok((decode(body)?, meta))
    }

    /// Update a ruleset. Sends whatever fields are set; partial-update
    /// semantics are server-defined. Returns the full post-update state.
    pub async fn update(
        &self,
        id: &str,
        ruleset: &Ruleset,
    ) -> Result<(Ruleset, ResponseMeta), ClientError> {
        let body = encode(ruleset)?;
        let (body, meta) = self
            .transport
            .execute(Method::PUT, &Self::resource_path(id), None, Some(&body))
            .await?;
        Ok((decode(body)?, meta))
    }

    /// Delete a ruleset. Success is a no-content status with no body.
    pub async fn delete(&self, id: &str) -> Result<ResponseMeta, ClientError> {
        let (_, meta) = self
            .transport
            .execute(Method::DELETE, &Self::resource_path(id), None, None)
            .await?;
        Ok(meta)
    }
}

fn encode(ruleset: &Ruleset) -> Result<serde_json::Value, ClientError> {
    serde_json::to_value(ruleset)
        .map_err(|e| ClientError::decode(format!("Failed to serialize request body: {}", e)))
}

fn decode<D: DeserializeOwned>(body: Option<serde_json::Value>) -> Result<D, ClientError> {
    let value = body.ok_or_else(|| ClientError::decode("Response body was empty"))?;
    serde_json::from_value(value)
        .map_err(|e| ClientError::decode(format!("Failed to decode response: {}", e)))
}
