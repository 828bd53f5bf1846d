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

//! Library for converting the [shelterapp.dk](https://shelterapp.dk) feed of
//! Danish wilderness shelters into POI text or
//! [KML](https://developers.google.com/kml).
//!
//! The feed is fetched into a local cache file, decoded into
//! [`ShelterRecord`]s, and rendered by [`render_poi`] or [`render_kml`].
//!
//! See [`run`] for the complete pipeline and [`render`] for the part that
//! needs neither network nor file system.

use std::io;

mod config;
mod error;
mod feature;
mod fetch;
mod kml;
mod poi;
mod shelter;

pub use crate::config::{Config, DEFAULT_CACHE_PATH};
pub use crate::error::{CacheError, Error, FetchError, ParseError};
pub use crate::feature::{FeatureCode, IconColor, Wording};
pub use crate::fetch::{
    fetch_to_cache, read_cache, write_cache, HttpSource, ShelterSource, DEFAULT_URL,
    DEFAULT_USER_AGENT,
};
pub use crate::kml::{render_kml, write_placemark, DEFAULT_DOCUMENT_NAME};
pub use crate::poi::{render_poi, write_record};
pub use crate::shelter::{decode, Coordinate, ShelterRecord};

/// Output format of a conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `lon,lat,"title","description"` records.
    #[default]
    Poi,
    /// A KML 2.0 document.
    Kml,
}

/// Decode the raw `feed` and render it in `format`.
///
/// `document_name` is only used for KML.
///
/// # Example
/// ```
/// # use shelter_convert::{render, Format};
/// #
/// let feed = br#"[{"name": "Skovly", "longitude": 10.2, "latitude": 56.1,
///                 "address": "Skovvej 2", "booking": 1, "features": [0]}]"#;
///
/// let poi = render(feed, Format::Poi, "Shelters").expect("valid feed");
/// assert!(poi.contains("Address: Skovvej 2\nBooking possible\n"));
///
/// let kml = render(feed, Format::Kml, "Shelters").expect("valid feed");
/// assert!(kml.contains("<styleUrl>#placemark-green</styleUrl>"));
/// ```
pub fn render(feed: &[u8], format: Format, document_name: &str) -> Result<String, Error> {
    let shelters = decode(feed)?;
    log::info!("rendering {} shelters as {format:?}", shelters.len());
    Ok(match format {
        Format::Poi => render_poi(&shelters),
        Format::Kml => render_kml(&shelters, document_name),
    })
}

/// Fetch the feed from the configured URL and write the converted document.
///
/// This is [`run_with_source`] with an [`HttpSource`] built from `config`.
/// Offline runs never construct an HTTP client.
pub fn run(config: &Config, sink: impl io::Write) -> Result<(), Error> {
    if config.offline {
        return write_cached(config, sink);
    }
    let source = HttpSource::new(&config.url)?.with_user_agent(&config.user_agent);
    run_with_source(config, &source, sink)
}

/// Convert the feed from `source` according to `config` and write it to `sink`.
///
/// Unless `config.offline` is set, the feed is first fetched into the cache
/// file. The document is only written after it has been rendered completely.
/// On error, nothing is written to `sink`.
pub fn run_with_source(
    config: &Config,
    source: &dyn ShelterSource,
    sink: impl io::Write,
) -> Result<(), Error> {
    if !config.offline {
        fetch_to_cache(source, &config.cache_path)?;
    }
    write_cached(config, sink)
}

/// Render the cache file and write the result to `sink`.
fn write_cached(config: &Config, mut sink: impl io::Write) -> Result<(), Error> {
    if config.offline {
        log::info!("offline, using {}", config.cache_path.display());
    }

    let feed = read_cache(&config.cache_path)?;
    let document = render(&feed, config.format, &config.document_name)?;

    sink.write_all(document.as_bytes()).map_err(Error::Output)?;
    sink.flush().map_err(Error::Output)?;

    Ok(())
}
