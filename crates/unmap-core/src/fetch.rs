//! One-shot HTTP GET via libcurl.
//!
//! Every network input of the pipeline goes through here: landing page,
//! bundle script, source map, locale JSON. One outbound call per invocation,
//! no retries, no caching. The caller decides whether a failure is fatal.

use std::str;
use std::time::Duration;

use crate::error::ExtractError;

/// Default browser-identity header sent with every request. Some deployments
/// serve different assets (or nothing) to non-browser agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36";

fn fetch_err(url: &str, reason: impl std::fmt::Display) -> ExtractError {
    ExtractError::FetchFailed {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Performs a GET and returns the response body as UTF-8 text.
///
/// Follows redirects. Fails with `FetchFailed` on transport errors, non-2xx
/// status, or a body that is not valid UTF-8.
pub fn fetch_text(url: &str, user_agent: &str) -> Result<String, ExtractError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(|e| fetch_err(url, e))?;
    easy.get(true).map_err(|e| fetch_err(url, e))?;
    easy.follow_location(true).map_err(|e| fetch_err(url, e))?;
    easy.max_redirections(10).map_err(|e| fetch_err(url, e))?;
    easy.useragent(user_agent).map_err(|e| fetch_err(url, e))?;
    easy.connect_timeout(Duration::from_secs(15))
        .map_err(|e| fetch_err(url, e))?;
    easy.timeout(Duration::from_secs(120))
        .map_err(|e| fetch_err(url, e))?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(|e| fetch_err(url, e))?;
        transfer.perform().map_err(|e| fetch_err(url, e))?;
    }

    let code = easy
        .response_code()
        .map_err(|e| fetch_err(url, e))?;
    if !(200..300).contains(&code) {
        return Err(fetch_err(url, format!("HTTP {code}")));
    }

    String::from_utf8(body).map_err(|e| fetch_err(url, e))
}

/// Performs a GET and parses the body as JSON.
pub fn fetch_json(url: &str, user_agent: &str) -> Result<serde_json::Value, ExtractError> {
    let text = fetch_text(url, user_agent)?;
    serde_json::from_str(&text).map_err(|e| fetch_err(url, format!("invalid JSON body: {e}")))
}
