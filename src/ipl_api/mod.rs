pub(crate) mod team_matches;
pub(crate) mod teams;

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::debug;

use crate::error::{IplError, Result};

pub(crate) const BASE_URL: &str = "https://apis.ccbp.in/ipl";

/// Fetch a URL and decode the response body as typed JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching json");

    let response = client.get(url).send().await.map_err(|e| IplError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IplError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.bytes().await.map_err(|e| IplError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    decode(url, &body)
}

/// Decode a JSON body, keeping malformed JSON apart from a well-formed body
/// that does not match the expected envelope.
pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| match e.classify() {
        Category::Data => IplError::Shape {
            url: url.to_owned(),
            source: e,
        },
        _ => IplError::Json {
            url: url.to_owned(),
            source: e,
        },
    })
}
