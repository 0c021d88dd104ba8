use crate::error::LookupError;
use log::{debug, warn};
use reqwest::blocking::{Client, Response};
use std::time::Duration;

const USER_AGENT: &str = concat!("recipe-lookup/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Issue one GET request and return the full response body.
///
/// Each step maps to its own error kind; a non-success status counts as a
/// transport failure.
pub(crate) fn get_body(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
    operation: &'static str,
) -> Result<String, LookupError> {
    // The query carries credentials, so errors drop the request URL
    let request = client.get(url).query(query).build().map_err(|source| {
        let source = source.without_url();
        warn!("{}: could not build request for {}: {}", operation, url, source);
        LookupError::RequestConstruction { operation, source }
    })?;

    debug!("{}: GET {}", operation, request.url().path());

    let response = client
        .execute(request)
        .and_then(Response::error_for_status)
        .map_err(|source| {
            let source = source.without_url();
            warn!("{}: request failed: {}", operation, source);
            LookupError::Transport { operation, source }
        })?;

    let body = response.text().map_err(|source| {
        let source = source.without_url();
        warn!("{}: could not read response body: {}", operation, source);
        LookupError::ResponseRead { operation, source }
    })?;

    debug!("{}: {}", operation, body);
    Ok(body)
}
