use tracing::warn;

/// Semantic bucket for a provider condition code, at the granularity used for
/// descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCategory {
    Storm,
    LightRain,
    Rain,
    Snow,
    Fog,
    Clear,
    LightClouds,
    Cloudy,
    Unknown,
}

/// Icon/art asset key. Which glyph or image a key maps to is the display
/// layer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherAsset {
    Storm,
    LightRain,
    Rain,
    Snow,
    Fog,
    Clear,
    LightClouds,
    Cloudy,
}

#[must_use]
pub fn condition_category(code: i64) -> ConditionCategory {
    match code {
        200..=232 => ConditionCategory::Storm,
        300..=321 => ConditionCategory::LightRain,
        500..=504 | 520..=531 => ConditionCategory::Rain,
        511 => ConditionCategory::Snow,
        600..=622 => ConditionCategory::Snow,
        701..=762 => ConditionCategory::Fog,
        771 | 781 => ConditionCategory::Storm,
        800 => ConditionCategory::Clear,
        801 => ConditionCategory::LightClouds,
        802..=804 => ConditionCategory::Cloudy,
        900..=906 | 951..=962 => ConditionCategory::Storm,
        _ => ConditionCategory::Unknown,
    }
}

/// Display text for a condition code. Codes without a table entry yield a
/// message with the raw code embedded so it survives into bug reports.
#[must_use]
pub fn condition_label(code: i64) -> String {
    match code {
        200..=232 => "Storm".to_string(),
        300..=321 => "Light Rain".to_string(),
        _ => condition_label_lookup(code)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unknown ({code})")),
    }
}

/// Icon selection. Returns `None` for codes outside every known range; the
/// caller decides whether to render a placeholder or nothing. Note the art
/// table below deliberately does not share this fallback.
#[must_use]
pub fn icon_asset(code: i64) -> Option<WeatherAsset> {
    match code {
        200..=232 => Some(WeatherAsset::Storm),
        300..=321 => Some(WeatherAsset::LightRain),
        500..=504 | 520..=531 => Some(WeatherAsset::Rain),
        511 | 600..=622 => Some(WeatherAsset::Snow),
        701..=761 => Some(WeatherAsset::Fog),
        781 => Some(WeatherAsset::Storm),
        800 => Some(WeatherAsset::Clear),
        801 => Some(WeatherAsset::LightClouds),
        802..=804 => Some(WeatherAsset::Cloudy),
        _ => None,
    }
}

/// Art selection. Unlike [`icon_asset`], an unmatched code falls back to the
/// storm artwork (logged, never an error).
#[must_use]
pub fn art_asset(code: i64) -> WeatherAsset {
    match code {
        200..=232 => WeatherAsset::Storm,
        300..=321 => WeatherAsset::LightRain,
        500..=504 | 520..=531 => WeatherAsset::Rain,
        511 | 600..=622 => WeatherAsset::Snow,
        701..=761 => WeatherAsset::Fog,
        771 | 781 => WeatherAsset::Storm,
        800 => WeatherAsset::Clear,
        801 => WeatherAsset::LightClouds,
        802..=804 => WeatherAsset::Cloudy,
        900..=906 | 958..=962 => WeatherAsset::Storm,
        951..=957 => WeatherAsset::Clear,
        other => {
            warn!(code = other, "unknown weather condition code, using storm art");
            WeatherAsset::Storm
        }
    }
}

const CONDITION_LABELS: &[(i64, &str)] = &[
    (500, "Light Rain"),
    (501, "Moderate Rain"),
    (502, "Heavy Rain"),
    (503, "Intense Rain"),
    (504, "Extreme Rain"),
    (511, "Freezing Rain"),
    (520, "Light Shower"),
    (521, "Shower"),
    (522, "Heavy Shower"),
    (531, "Ragged Shower"),
    (600, "Light Snow"),
    (601, "Snow"),
    (602, "Heavy Snow"),
    (611, "Sleet"),
    (612, "Shower Sleet"),
    (615, "Rain and Snow"),
    (616, "Rain and Snow"),
    (620, "Shower Snow"),
    (621, "Shower Snow"),
    (622, "Heavy Shower Snow"),
    (701, "Mist"),
    (711, "Smoke"),
    (721, "Haze"),
    (731, "Sand, Dust Whirls"),
    (741, "Fog"),
    (751, "Sand"),
    (761, "Dust"),
    (762, "Volcanic Ash"),
    (771, "Squalls"),
    (781, "Tornado"),
    (800, "Clear"),
    (801, "Mostly Clear"),
    (802, "Scattered Clouds"),
    (803, "Broken Clouds"),
    (804, "Overcast Clouds"),
    (900, "Tornado"),
    (901, "Tropical Storm"),
    (902, "Hurricane"),
    (903, "Cold"),
    (904, "Hot"),
    (905, "Windy"),
    (906, "Hail"),
    (951, "Calm"),
    (952, "Light Breeze"),
    (953, "Gentle Breeze"),
    (954, "Moderate Breeze"),
    (955, "Fresh Breeze"),
    (956, "Strong Breeze"),
    (957, "High Wind"),
    (958, "Gale"),
    (959, "Severe Gale"),
    (960, "Storm"),
    (961, "Violent Storm"),
    (962, "Hurricane"),
];

fn condition_label_lookup(code: i64) -> Option<&'static str> {
    CONDITION_LABELS
        .iter()
        .find_map(|(candidate, label)| (*candidate == code).then_some(*label))
}
