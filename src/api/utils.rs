use anyhow::{Context, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::Session;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    session: &Session,
) -> Result<Value> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    let res = client
        .get(&url)
        .basic_auth(session.username(), Some(session.password()))
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)
        .with_context(|| format!("Response from {} is not JSON", url))?;

    Ok(data)
}

/// Deserializes every element of a JSON array. One bad element fails the whole response.
pub fn parse_response_array<T>(data: Value, what: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                serde_json::from_value(item)
                    .with_context(|| format!("Failed to parse {} at index {}", what, idx))
            })
            .collect(),
        _ => Err(Error::msg("Unexpected API response format: not an array")),
    }
}
