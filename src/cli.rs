use clap::{Parser, ValueEnum};

use crate::domain::units::UnitMode;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum IconModeArg {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Multi-day weather forecast in your terminal"
)]
pub struct Cli {
    /// Location query, "<postal-or-city>,<country>" (default: 94043,USA)
    pub location: Option<String>,

    /// Display units
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Forecast days to request (1..16)
    #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub days: u8,

    /// Weather provider API key (falls back to SKYCAST_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the forecast endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Condition glyph set
    #[arg(long, value_enum, default_value_t = IconModeArg::Unicode)]
    pub icons: IconModeArg,
}

impl Cli {
    #[must_use]
    pub fn location_query(&self) -> String {
        self.location
            .clone()
            .unwrap_or_else(|| "94043,USA".to_string())
    }

    #[must_use]
    pub fn unit_mode(&self) -> UnitMode {
        match self.units {
            UnitsArg::Metric => UnitMode::Metric,
            UnitsArg::Imperial => UnitMode::Imperial,
        }
    }

    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SKYCAST_API_KEY").ok())
    }
}
