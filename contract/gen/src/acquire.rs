//! Descriptor and support-bundle acquisition.
//!
//! Talks to the publishing server: three static descriptor maps are
//! fetched from the assets prefix, and the compressed support module
//! is requested from the description API with the shared secret.
//! Responses are deserialized straight into insertion-ordered maps so
//! the server's publication order survives into the artifact.

use std::io::Read;
use std::path::{Path, PathBuf};

use contract_define::{ChannelDescriptor, EventDescriptor, RouteDescriptor};
use flate2::read::GzDecoder;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ApiTypesConfig;
use crate::errors::GeneratorError;
use crate::scope::join_paths;

const ROUTES_MAP: &str = "api_description_map.json";
const CHANNELS_MAP: &str = "channels_description_map.json";
const EVENTS_MAP: &str = "events_description_map.json";

/// The three descriptor maps, in publication order.
#[derive(Debug, Default)]
pub struct DescriptorMaps {
    pub routes: IndexMap<String, RouteDescriptor>,
    pub channels: IndexMap<String, ChannelDescriptor>,
    pub events: IndexMap<String, EventDescriptor>,
}

/// Fetches the three descriptor maps from the assets prefix.
pub async fn fetch_descriptor_maps(
    client: &reqwest::Client,
    config: &ApiTypesConfig,
) -> Result<DescriptorMaps, GeneratorError> {
    Ok(DescriptorMaps {
        routes: fetch_map(client, config, ROUTES_MAP).await?,
        channels: fetch_map(client, config, CHANNELS_MAP).await?,
        events: fetch_map(client, config, EVENTS_MAP).await?,
    })
}

async fn fetch_map<T: DeserializeOwned>(
    client: &reqwest::Client,
    config: &ApiTypesConfig,
    file: &str,
) -> Result<IndexMap<String, T>, GeneratorError> {
    let url = join_paths(&[&config.base_url, &config.assets_prefix, file]);
    debug!(%url, "fetching descriptor map");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| GeneratorError::Acquire(e.to_string()))?;
    if !response.status().is_success() {
        return Err(acquire_failure(response).await);
    }

    response
        .json::<IndexMap<String, T>>()
        .await
        .map_err(|e| GeneratorError::Acquire(format!("malformed descriptor map '{file}': {e}")))
}

/// Fetches and unpacks the compressed support module.
///
/// POSTs the shared secret to the description API, gunzips the reply,
/// and drops the source into `dest_dir/client.rs`. Returns the path of
/// the extracted file.
pub async fn fetch_support_bundle(
    client: &reqwest::Client,
    config: &ApiTypesConfig,
    dest_dir: &Path,
) -> Result<PathBuf, GeneratorError> {
    let url = join_paths(&[
        &config.base_url,
        &config.api_prefix,
        "api_description/compressed_client",
    ]);
    debug!(%url, "fetching support bundle");

    let response = client
        .post(&url)
        .json(&serde_json::json!({ "secret": config.secret }))
        .send()
        .await
        .map_err(|e| GeneratorError::Acquire(e.to_string()))?;
    if !response.status().is_success() {
        return Err(acquire_failure(response).await);
    }

    let compressed = response
        .bytes()
        .await
        .map_err(|e| GeneratorError::Acquire(e.to_string()))?;

    let mut source = String::new();
    GzDecoder::new(compressed.as_ref())
        .read_to_string(&mut source)
        .map_err(|e| GeneratorError::Acquire(format!("support bundle is not valid gzip: {e}")))?;

    let dest = dest_dir.join("client.rs");
    let io_err = |source: std::io::Error| GeneratorError::WriteError {
        path: dest.display().to_string(),
        source,
    };
    std::fs::create_dir_all(dest_dir).map_err(io_err)?;
    std::fs::write(&dest, &source).map_err(io_err)?;

    info!(path = %dest.display(), bytes = source.len(), "extracted support bundle");
    Ok(dest)
}

/// Turns a non-success response into an [`GeneratorError::Acquire`]
/// carrying the server's own error message where one can be found.
async fn acquire_failure(response: reqwest::Response) -> GeneratorError {
    let status = response.status();
    let fallback = format!("server returned {status}");
    match response.json::<Value>().await {
        Ok(body) => GeneratorError::Acquire(extract_api_error(&body, &fallback)),
        Err(_) => GeneratorError::Acquire(fallback),
    }
}

/// Digs a human-readable message out of a server error payload.
///
/// Probes the conventional nesting spots in priority order and falls
/// back to the supplied text when none holds a string.
pub fn extract_api_error(body: &Value, fallback: &str) -> String {
    let spots = [
        &["err", "msg"][..],
        &["err", "message"],
        &["error", "msg"],
        &["error", "message"],
        &["error", "name"],
        &["msg"],
        &["message"],
        &["name"],
    ];

    for spot in spots {
        let mut cursor = body;
        let mut found = true;
        for key in spot {
            match cursor.get(key) {
                Some(next) => cursor = next,
                None => {
                    found = false;
                    break;
                }
            }
        }
        if found {
            if let Some(text) = cursor.as_str().filter(|t| !t.is_empty()) {
                return text.to_string();
            }
        }
    }

    fallback.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_err_msg_wins_over_flat_message() {
        let body = serde_json::json!({
            "message": "outer",
            "err": { "msg": "inner" }
        });
        assert_eq!(extract_api_error(&body, "fb"), "inner");
    }

    #[test]
    fn error_name_is_probed_before_flat_keys() {
        let body = serde_json::json!({
            "msg": "flat",
            "error": { "name": "NotAuthorized" }
        });
        assert_eq!(extract_api_error(&body, "fb"), "NotAuthorized");
    }

    #[test]
    fn non_string_spots_are_skipped() {
        let body = serde_json::json!({ "err": { "msg": 42 }, "message": "use me" });
        assert_eq!(extract_api_error(&body, "fb"), "use me");
    }

    #[test]
    fn empty_messages_are_skipped() {
        let body = serde_json::json!({ "err": { "msg": "" }, "message": "use me" });
        assert_eq!(extract_api_error(&body, "fb"), "use me");
    }

    #[test]
    fn fallback_when_nothing_matches() {
        let body = serde_json::json!({ "status": 500 });
        assert_eq!(extract_api_error(&body, "server returned 500"), "server returned 500");
    }
}
