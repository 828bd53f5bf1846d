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

//! Rendering shelters as a [KML](https://developers.google.com/kml) document.
//!
//! Every shelter becomes a _Placemark_ whose style is chosen by
//! [`IconColor::for_features`]. The styles themselves (`#placemark-<colour>`)
//! are expected to be provided by the consuming map application.

use std::fmt::Write;

use crate::feature::{IconColor, Wording};
use crate::shelter::ShelterRecord;

/// This line needs to be prepended to the KML output.
const XML_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
/// Namespace of the `<kml>` tag.
const NAMESPACE: &str = "http://earth.google.com/kml/2.0";
/// Default name of the KML _Document_.
pub const DEFAULT_DOCUMENT_NAME: &str = "Shelters in Denmark.";

/// Render all `shelters` into a complete KML document named `document_name`.
///
/// Lines end with LF and the document ends with a newline.
///
/// # Example
/// ```
/// # use shelter_convert::{decode, render_kml};
/// #
/// let feed = br#"[{"name": "Skovly", "longitude": 10.2, "latitude": 56.1,
///                 "address": "", "booking": 0, "features": [9]}]"#;
/// let kml = render_kml(&decode(feed).unwrap(), "Shelters");
/// assert!(kml.contains("<name>Skovly</name>"));
/// assert!(kml.contains("<coordinates>10.2,56.1,0</coordinates>"));
/// assert!(kml.contains("<styleUrl>#placemark-blue</styleUrl>"));
/// ```
pub fn render_kml(shelters: &[ShelterRecord], document_name: &str) -> String {
    let mut kml = String::new();
    writeln!(kml, "{XML_HEAD}").unwrap();
    writeln!(kml, r#"<kml xmlns="{NAMESPACE}">"#).unwrap();
    kml.push_str("<Document>\n");
    writeln!(kml, "<name>{}</name>", escape(document_name)).unwrap();
    for shelter in shelters {
        write_placemark(&mut kml, shelter);
    }
    kml.push_str("</Document>\n</kml>\n");
    kml
}

/// Append the _Placemark_ for a single `shelter` to `out`.
pub fn write_placemark(out: &mut String, shelter: &ShelterRecord) {
    out.push_str("<Placemark>\n");
    writeln!(out, "<name>{}</name>", escape(&shelter.unquoted_name())).unwrap();
    writeln!(out, "<description>\n{}</description>", description(shelter)).unwrap();
    writeln!(
        out,
        "<Point><coordinates>{},{},0</coordinates>\n</Point>",
        escape(shelter.longitude.as_str()),
        escape(shelter.latitude.as_str())
    )
    .unwrap();
    writeln!(
        out,
        "<styleUrl>#placemark-{}</styleUrl>",
        IconColor::for_features(&shelter.features)
    )
    .unwrap();
    out.push_str("</Placemark>\n");
}

/// Address line and one sentence per feature, each terminated by a newline.
fn description(shelter: &ShelterRecord) -> String {
    let mut description = String::new();
    if !shelter.address.is_empty() {
        writeln!(description, "Address: {}", escape(&shelter.address)).unwrap();
    }
    for feature in &shelter.features {
        writeln!(description, "{}", escape(&feature.describe(Wording::Sentence))).unwrap();
    }
    description
}

/// Escape the characters which would otherwise be read as markup in element
/// content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}
