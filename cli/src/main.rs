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

//! This is a simple command-line interface for the shelter converter.

use std::{io::stdout, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use shelter_convert::{
    run, Config, Format, DEFAULT_CACHE_PATH, DEFAULT_URL, DEFAULT_USER_AGENT,
};

/// Convert the shelterapp.dk shelter feed to POI text or KML on STDOUT.
#[derive(Parser, Debug)]
#[command(name = "shelter_convert", version)]
struct Cli {
    /// Output format
    #[arg(value_enum)]
    format: OutputFormat,
    /// Use the existing cache file instead of fetching the feed
    #[arg(long)]
    offline: bool,
    /// Local copy of the feed, overwritten unless --offline is given
    #[arg(long, default_value = DEFAULT_CACHE_PATH)]
    cache: PathBuf,
    /// Endpoint the feed is fetched from
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
    /// User agent sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Poi,
    Kml,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Poi => Format::Poi,
            OutputFormat::Kml => Format::Kml,
        }
    }
}

impl Cli {
    fn config(self) -> Config {
        Config::default()
            .with_format(self.format.into())
            .with_offline(self.offline)
            .with_cache_path(self.cache)
            .with_url(self.url)
            .with_user_agent(self.user_agent)
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let config = Cli::parse().config();
    log::debug!("running with {config:?}");

    match run(&config, stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Conversion failed with: {err}");
            ExitCode::FAILURE
        }
    }
}
