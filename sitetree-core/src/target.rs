// Turning observed request URLs into tree segments

use crate::error::{Result, TargetError};
use crate::tree::PathTree;
use tracing::debug;
use url::{Host, Url};

/// Hostname followed by every `/`-delimited path component of `url`.
///
/// Empty components are kept here; [`PathTree::insert`] drops them. The
/// port is not part of the hostname and IPv6 addresses lose their brackets.
/// The path is percent-decoded before splitting, so `%20` becomes a space
/// and an encoded `%2F` separates two segments. Invalid UTF-8 is replaced
/// lossily.
pub fn target_segments(url: &Url) -> Vec<String> {
    let host = match url.host() {
        Some(Host::Ipv6(addr)) => addr.to_string(),
        Some(host) => host.to_string(),
        None => String::new(),
    };

    let decoded = urlencoding::decode_binary(url.path().as_bytes());
    let path = String::from_utf8_lossy(&decoded);

    std::iter::once(host)
        .chain(path.split('/').map(str::to_string))
        .collect()
}

/// Parse a user-supplied target, adding `http://` when no scheme is given.
pub fn parse_target(input: &str) -> Result<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TargetError::Empty);
    }

    let url = match Url::parse(input) {
        Ok(url) if url.has_host() => url,
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {
            let with_scheme = format!("http://{}", input);
            Url::parse(&with_scheme).map_err(|source| TargetError::InvalidUrl {
                input: input.to_string(),
                source,
            })?
        }
        Err(source) => {
            return Err(TargetError::InvalidUrl {
                input: input.to_string(),
                source,
            });
        }
    };

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(TargetError::MissingHost(input.to_string())),
    }
}

impl PathTree {
    /// Record one observed request URL.
    pub fn record_url(&mut self, url: &Url) {
        let before = self.len();
        self.insert(target_segments(url));

        let added = self.len() - before;
        if added > 0 {
            debug!("Recorded {} ({} new nodes)", url, added);
        }
    }
}
