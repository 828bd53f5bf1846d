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

//! Error types returned while fetching, decoding, and rendering shelters.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned from [`crate::run`] and [`crate::render`].
#[derive(Error, Debug)]
pub enum Error {
    /// Downloading the shelter feed failed.
    #[error("fetching shelters failed: {0}")]
    Fetch(#[from] FetchError),
    /// Reading or writing the local cache file failed.
    #[error("accessing the shelter cache failed: {0}")]
    Cache(#[from] CacheError),
    /// The shelter feed is not the expected JSON.
    #[error("parsing shelters failed: {0}")]
    Parse(#[from] ParseError),
    /// Writing the rendered document failed.
    #[error("writing output failed: {0}")]
    Output(#[source] io::Error),
}

/// Transport-level failures while requesting the shelter feed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request did not complete.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
}

/// Failures reading or writing the local copy of the feed.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The feed is not a JSON array of shelter objects.
#[derive(Error, Debug)]
#[error("invalid shelter feed: {0}")]
pub struct ParseError(#[from] serde_json::Error);
