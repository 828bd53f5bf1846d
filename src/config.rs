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

//! Settings for one conversion run.

use std::path::PathBuf;

use crate::fetch::{DEFAULT_URL, DEFAULT_USER_AGENT};
use crate::kml::DEFAULT_DOCUMENT_NAME;
use crate::Format;

/// Default location of the local copy of the feed.
pub const DEFAULT_CACHE_PATH: &str = "shelters.json";

/// Everything [`crate::run`] needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Endpoint the feed is fetched from.
    pub url: String,
    /// Local copy of the feed, overwritten by every fetch.
    pub cache_path: PathBuf,
    pub user_agent: String,
    /// Skip fetching and use the existing cache file.
    pub offline: bool,
    pub format: Format,
    /// Name of the KML _Document_.
    pub document_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            offline: false,
            format: Format::Poi,
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_cache_path(mut self, cache_path: impl Into<PathBuf>) -> Self {
        self.cache_path = cache_path.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_document_name(mut self, document_name: impl Into<String>) -> Self {
        self.document_name = document_name.into();
        self
    }
}
