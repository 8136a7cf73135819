use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::error;

/// Issues the HTTP probes. One client is shared across the whole run so
/// connections to the target are reused; the request timeout is fixed at
/// construction and applies to every probe.
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Prober { client })
    }

    /// True iff a GET for `directory` under `base_url` answers exactly 200.
    ///
    /// Transport errors (refused connections, DNS failures, timeouts) are
    /// logged and count as "not found" — a failed probe never aborts the
    /// batch.
    pub fn test_directory(&self, base_url: &str, directory: &str) -> bool {
        let url = probe_url(base_url, directory);
        match self.client.get(&url).send() {
            Ok(response) => response.status() == StatusCode::OK,
            Err(err) => {
                error!("Request failed for {}: {}", url, err);
                false
            }
        }
    }
}

/// At most one trailing slash is stripped from the base before the entry
/// is appended. The entry goes in verbatim, with no escaping.
pub fn probe_url(base_url: &str, directory: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}/{}", base, directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_collapsed() {
        assert_eq!(probe_url("http://x.test/", "admin"), "http://x.test/admin");
    }

    #[test]
    fn base_without_slash_is_unchanged() {
        assert_eq!(probe_url("http://x.test", "admin"), "http://x.test/admin");
    }

    #[test]
    fn only_one_trailing_slash_is_stripped() {
        assert_eq!(
            probe_url("http://x.test//", "admin"),
            "http://x.test//admin"
        );
    }

    #[test]
    fn entry_is_not_escaped() {
        assert_eq!(
            probe_url("http://x.test", "a b/c"),
            "http://x.test/a b/c"
        );
    }
}
