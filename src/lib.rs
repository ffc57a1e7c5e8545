pub mod cli;
pub mod data;
pub mod domain;

use anyhow::Result;
use chrono::Utc;

use cli::{Cli, IconModeArg};
use data::forecast::ForecastClient;
use domain::conditions::{self, WeatherAsset};
use domain::dates;
use domain::decode::{self, DecodeError};

/// One-shot pipeline: fetch the raw payload, decode it against the current
/// clock and system time zone, print one line per forecast day.
pub async fn run(cli: Cli) -> Result<()> {
    let client = match cli.endpoint.as_deref() {
        Some(url) => ForecastClient::with_base_url(url),
        None => ForecastClient::new(),
    };
    let location = cli.location_query();
    let raw = client
        .fetch(&location, cli.days, cli.api_key().as_deref())
        .await?;

    let now = Utc::now().timestamp_millis();
    let lines = match decode::decode_forecast(
        &raw,
        now,
        cli.unit_mode(),
        dates::system_offset_millis,
    ) {
        Ok(lines) => lines,
        Err(DecodeError::LocationNotFound) => {
            anyhow::bail!(
                "the weather service does not recognize \"{location}\"; \
                 expected a \"<postal-or-city>,<country>\" query"
            )
        }
        Err(DecodeError::ServerError(status)) => {
            anyhow::bail!("the weather service is having trouble (status {status}); try again soon")
        }
        Err(err @ DecodeError::MalformedPayload(_)) => {
            return Err(anyhow::Error::new(err).context("no usable forecast data received"));
        }
    };

    if lines.is_empty() {
        println!("No forecast data available for {location}.");
        return Ok(());
    }

    for line in &lines {
        let glyph = art_glyph(conditions::art_asset(line.condition_code), cli.icons);
        println!("{glyph}  {line}");
    }
    Ok(())
}

#[must_use]
pub fn art_glyph(asset: WeatherAsset, mode: IconModeArg) -> &'static str {
    let (ascii, emoji, unicode) = glyph_tokens(asset);
    match mode {
        IconModeArg::Ascii => ascii,
        IconModeArg::Emoji => emoji,
        IconModeArg::Unicode => unicode,
    }
}

fn glyph_tokens(asset: WeatherAsset) -> (&'static str, &'static str, &'static str) {
    match asset {
        WeatherAsset::Storm => ("THN", "⛈️", "⚡"),
        WeatherAsset::LightRain => ("DRZ", "🌦️", "☂"),
        WeatherAsset::Rain => ("RAN", "🌧️", "☂"),
        WeatherAsset::Snow => ("SNW", "🌨️", "❄"),
        WeatherAsset::Fog => ("FOG", "🌫️", "░"),
        WeatherAsset::Clear => ("SUN", "☀️", "☀"),
        WeatherAsset::LightClouds => ("LCL", "🌤️", "☁"),
        WeatherAsset::Cloudy => ("CLD", "☁️", "☁"),
    }
}
