use crate::config::GiphyConfig;
use crate::error::LookupError;
use crate::model::Gif;
use crate::providers::http::{build_client, get_body};
use crate::providers::GifLookup;
use log::{debug, error};
use reqwest::blocking::Client;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const OPERATION: &str = "giphy.get_random_by_tag";

/// Client for the Giphy random endpoint (`/v1/gifs/random?tag=cat&api_key=..`)
pub struct GiphyClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GiphyClient {
    /// Create a new Giphy client from configuration
    pub fn new(config: &GiphyConfig) -> reqwest::Result<Self> {
        Ok(GiphyClient {
            client: build_client(config.timeout())?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> reqwest::Result<Self> {
        Ok(GiphyClient {
            client: build_client(Duration::from_secs(5))?,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct GiphyGif {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    images: GiphyImages,
}

#[derive(Debug, Default, Deserialize)]
struct GiphyImages {
    #[serde(default)]
    original: GiphyImage,
}

#[derive(Debug, Default, Deserialize)]
struct GiphyImage {
    #[serde(default)]
    url: Option<String>,
}

impl GiphyGif {
    fn into_gif(self) -> Option<Gif> {
        let image_url = self.images.original.url.filter(|url| !url.is_empty())?;
        Some(Gif {
            id: self.id.filter(|id| !id.is_empty()),
            title: self.title.filter(|title| !title.is_empty()),
            image_url,
        })
    }
}

fn decode_error(source: serde_json::Error) -> LookupError {
    error!("{}: unexpected response shape: {}", OPERATION, source);
    LookupError::Decode {
        operation: OPERATION,
        source,
    }
}

// The random endpoint wraps the GIF in `data` and answers `"data": []` when
// nothing matches; a bare GIF object is accepted too.
fn decode_gif(body: &str) -> Result<Gif, LookupError> {
    let payload = match serde_json::from_str::<Value>(body).map_err(decode_error)? {
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) if items.is_empty() => {
                return Err(LookupError::EmptyResult {
                    operation: OPERATION,
                })
            }
            Some(data @ Value::Object(_)) => data,
            Some(other) => {
                return Err(decode_error(serde_json::Error::custom(format!(
                    "expected `data` to be an object, found {}",
                    other
                ))))
            }
            None => Value::Object(object),
        },
        other => {
            return Err(decode_error(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                other
            ))))
        }
    };

    let gif: GiphyGif = serde_json::from_value(payload).map_err(decode_error)?;
    gif.into_gif().ok_or(LookupError::EmptyResult {
        operation: OPERATION,
    })
}

impl GifLookup for GiphyClient {
    fn provider_name(&self) -> &str {
        "giphy"
    }

    fn get_random_by_tag(&self, tag: &str) -> Result<Gif, LookupError> {
        let url = format!("{}/v1/gifs/random", self.base_url.trim_end_matches('/'));
        let body = get_body(
            &self.client,
            &url,
            &[("tag", tag), ("api_key", self.api_key.as_str())],
            OPERATION,
        )?;

        let gif = decode_gif(&body)?;
        debug!("{}: {:?}", OPERATION, gif);
        Ok(gif)
    }
}
