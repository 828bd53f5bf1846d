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

//! Shelter records as found in the upstream JSON feed.

use std::fmt;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

use crate::error::ParseError;
use crate::feature::FeatureCode;

/// One entry of the shelter feed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "FeedEntry")]
pub struct ShelterRecord {
    pub name: String,
    pub longitude: Coordinate,
    pub latitude: Coordinate,
    /// Empty when the feed has no address for this shelter.
    pub address: String,
    pub bookable: bool,
    /// In feed order, possibly with duplicates and undocumented codes.
    pub features: Vec<FeatureCode>,
}

/// A feed entry before the booking keys are merged.
#[derive(Deserialize)]
struct FeedEntry {
    name: String,
    longitude: Coordinate,
    latitude: Coordinate,
    #[serde(default, deserialize_with = "null_as_empty")]
    address: String,
    #[serde(default, deserialize_with = "booking_flag")]
    booking: bool,
    #[serde(default, deserialize_with = "booking_flag")]
    bookable: bool,
    features: Vec<FeatureCode>,
}

impl From<FeedEntry> for ShelterRecord {
    /// Either booking key marks the shelter as bookable.
    fn from(entry: FeedEntry) -> Self {
        Self {
            name: entry.name,
            longitude: entry.longitude,
            latitude: entry.latitude,
            address: entry.address,
            bookable: entry.booking || entry.bookable,
            features: entry.features,
        }
    }
}

impl ShelterRecord {
    /// The name with all double quotes removed.
    ///
    /// Both output formats delimit the name with quotes or markup, so literal
    /// quotes are dropped rather than escaped.
    pub fn unquoted_name(&self) -> String {
        self.name.replace('"', "")
    }
}

/// A coordinate exactly as the feed spells it.
///
/// The feed has delivered coordinates both as JSON numbers and as strings.
/// Numbers keep their literal spelling, strings are only unquoted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coordinate(String);

impl Coordinate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let literal = raw.get();
        if literal.starts_with('"') {
            serde_json::from_str(literal)
                .map(Self)
                .map_err(de::Error::custom)
        } else if serde_json::from_str::<serde_json::Number>(literal).is_ok() {
            Ok(Self(literal.to_string()))
        } else {
            Err(de::Error::invalid_type(
                Unexpected::Other(literal),
                &"a number or a string",
            ))
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Only an explicit `1` (also `1.0`), `true`, or their string forms mark a
/// shelter as bookable.
fn booking_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Flag(flag)) => flag,
        Some(Raw::Number(number)) => number == 1.0,
        Some(Raw::Text(text)) => matches!(text.trim(), "1" | "true"),
        None => false,
    })
}

/// Decode the raw feed into shelter records.
///
/// The whole feed is rejected if any entry lacks a required field or has a
/// field of the wrong shape.
///
/// # Example
/// ```
/// # use shelter_convert::decode;
/// #
/// let feed = br#"[{"name": "Skovly", "longitude": 10.2, "latitude": 56.1,
///                 "address": "", "booking": 0, "features": [9, 0]}]"#;
/// let shelters = decode(feed).expect("valid feed");
/// assert_eq!(shelters[0].name, "Skovly");
/// assert_eq!(shelters[0].longitude.as_str(), "10.2");
/// ```
pub fn decode(bytes: &[u8]) -> Result<Vec<ShelterRecord>, ParseError> {
    let shelters: Vec<ShelterRecord> = serde_json::from_slice(bytes)?;
    log::debug!("decoded {} shelters", shelters.len());
    Ok(shelters)
}
