// Copyright 2026 Viktor Reusch
//
// This file is part of shelter_convert.
//
// shelter_convert is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// shelter_convert is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License
// for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with shelter_convert. If not, see <https://www.gnu.org/licenses/>.

//! Downloading the shelter feed and keeping a local copy of it.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::error::{CacheError, FetchError};

/// Where the shelter feed is published.
pub const DEFAULT_URL: &str = "https://shelterapp.dk/api/get";
/// The API rejects requests without a browser-like user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux)";

/// Something the raw shelter feed can be fetched from.
pub trait ShelterSource {
    /// Fetch the complete feed body.
    fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}

/// HTTP implementation of [`ShelterSource`].
#[derive(Debug)]
pub struct HttpSource {
    client: Client,
    url: String,
    user_agent: String,
}

impl HttpSource {
    /// Construct a source requesting `url`.
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(FetchError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Override the default user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl ShelterSource for HttpSource {
    fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        log::info!("fetching shelters from {}", self.url);
        let transport = |source| FetchError::Transport {
            url: self.url.clone(),
            source,
        };
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(transport)?;
        log::debug!("received {} bytes", body.len());
        Ok(body.to_vec())
    }
}

/// Fetch the feed from `source` and store it verbatim at `path`.
///
/// The body is downloaded completely before `path` is touched, so a failed
/// fetch leaves an existing cache file as it was. Returns the number of bytes
/// written.
pub fn fetch_to_cache(source: &dyn ShelterSource, path: &Path) -> Result<usize, crate::Error> {
    let body = source.fetch()?;
    write_cache(path, &body)?;
    Ok(body.len())
}

/// Overwrite the cache file at `path` with `body`.
pub fn write_cache(path: &Path, body: &[u8]) -> Result<(), CacheError> {
    let write_error = |source| CacheError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(body).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    log::info!("saved {} bytes to {}", body.len(), path.display());
    Ok(())
}

/// Read the cached feed from `path`.
pub fn read_cache(path: &Path) -> Result<Vec<u8>, CacheError> {
    log::debug!("reading cached shelters from {}", path.display());
    fs::read(path).map_err(|source| CacheError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Fixed(&'static [u8]);

    impl ShelterSource for Fixed {
        fn fetch(&self) -> Result<Vec<u8>, FetchError> {
            Ok(self.0.to_vec())
        }
    }

    struct Unreachable;

    impl ShelterSource for Unreachable {
        fn fetch(&self) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::Status {
                url: DEFAULT_URL.to_string(),
                status: 503,
            })
        }
    }

    #[test]
    fn cache_is_overwritten() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("shelters.json");
        fs::write(&path, "old content which is longer than the new one").expect("seed cache");

        let written = fetch_to_cache(&Fixed(b"[]"), &path).expect("fetch succeeds");

        assert_eq!(written, 2);
        assert_eq!(read_cache(&path).expect("read cache"), b"[]");
    }

    #[test]
    fn failed_fetch_keeps_cache() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("shelters.json");
        fs::write(&path, "[1]").expect("seed cache");

        let err = fetch_to_cache(&Unreachable, &path).expect_err("fetch fails");

        assert!(matches!(
            err,
            crate::Error::Fetch(FetchError::Status { status: 503, .. })
        ));
        assert_eq!(fs::read(&path).expect("read cache"), b"[1]");
    }

    #[test]
    fn failed_fetch_creates_no_cache() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("shelters.json");

        assert!(fetch_to_cache(&Unreachable, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn missing_cache_is_read_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("absent.json");

        let err = read_cache(&path).expect_err("no cache file");
        assert!(matches!(err, CacheError::Read { .. }));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let source = HttpSource::new("http://127.0.0.1:9/api/get").expect("client");
        let err = source.fetch().expect_err("nothing listens on the discard port");
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
