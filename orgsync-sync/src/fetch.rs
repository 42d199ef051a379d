//! Blocking HTTP fetch of the CSV export.

use std::io::Read;
use std::time::Duration;

use crate::error::SyncError;

pub const USER_AGENT: &str = concat!("orgsync/", env!("CARGO_PKG_VERSION"));

/// `GET url` and return the body as text.
///
/// The whole body is read regardless of size; large sheet exports are normal.
/// Redirects are followed (sheet exports redirect to a content host). With
/// `timeout == None` the call waits as long as the server does.
pub fn fetch_text(url: &str, timeout: Option<Duration>) -> Result<String, SyncError> {
    let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let agent = builder.build();

    tracing::info!("fetching {url}");
    match agent.get(url).call() {
        Ok(response) => {
            tracing::debug!("{} {} from {url}", response.status(), response.status_text());
            let mut body = String::new();
            response
                .into_reader()
                .read_to_string(&mut body)
                .map_err(|source| SyncError::Body {
                    url: url.to_string(),
                    source,
                })?;
            tracing::info!("fetched {} byte(s)", body.len());
            Ok(body)
        }
        Err(ureq::Error::Status(code, response)) => Err(SyncError::Status {
            url: url.to_string(),
            code,
            reason: response.status_text().to_string(),
        }),
        Err(ureq::Error::Transport(transport)) => Err(SyncError::Transport {
            url: url.to_string(),
            source: Box::new(transport),
        }),
    }
}
