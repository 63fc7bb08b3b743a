use std::fmt;

use serde::{Deserialize, Serialize};

use super::gradient::Gradient;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Ash,
    Squall,
    Tornado,
    Clouds,
    #[default]
    Clear,
}

/// Checked top to bottom, first containing keyword wins. "thunder" and
/// "storm" sit first so mixed conditions like "thunderstorm with rain" never
/// fall through to rain.
const KEYWORDS: [(&str, WeatherType); 15] = [
    ("thunder", WeatherType::Thunderstorm),
    ("storm", WeatherType::Thunderstorm),
    ("drizzle", WeatherType::Drizzle),
    ("rain", WeatherType::Rain),
    ("snow", WeatherType::Snow),
    ("mist", WeatherType::Mist),
    ("smoke", WeatherType::Smoke),
    ("haze", WeatherType::Haze),
    ("dust", WeatherType::Dust),
    ("fog", WeatherType::Fog),
    ("sand", WeatherType::Sand),
    ("ash", WeatherType::Ash),
    ("squall", WeatherType::Squall),
    ("tornado", WeatherType::Tornado),
    ("clouds", WeatherType::Clouds),
];

/// Tint of the drifting haze layer.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MistTint {
    /// Orange/yellow airborne particles
    Dusty,
    /// White fog banks
    Pale,
}

/// Overlay parameters drawn on top of the backdrop.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherEffects {
    pub rain_drops: u8,
    pub lightning: bool,
    pub snowflakes: u8,
    pub sun_glow: bool,
    pub drifting_clouds: u8,
    pub mist: Option<MistTint>,
}

impl WeatherType {
    pub const ALL: [WeatherType; 15] = [
        WeatherType::Thunderstorm,
        WeatherType::Drizzle,
        WeatherType::Rain,
        WeatherType::Snow,
        WeatherType::Mist,
        WeatherType::Smoke,
        WeatherType::Haze,
        WeatherType::Dust,
        WeatherType::Fog,
        WeatherType::Sand,
        WeatherType::Ash,
        WeatherType::Squall,
        WeatherType::Tornado,
        WeatherType::Clouds,
        WeatherType::Clear,
    ];

    /// Normalizes a provider condition label ("Thunderstorms", "light rain",
    /// ...). Missing, empty or unrecognised text is clear sky.
    pub fn classify(condition: Option<&str>) -> Self {
        let condition = match condition {
            Some(text) if !text.is_empty() => text.to_lowercase(),
            _ => return WeatherType::Clear,
        };

        KEYWORDS
            .iter()
            .find(|(keyword, _)| condition.contains(keyword))
            .map_or(WeatherType::Clear, |(_, weather)| *weather)
    }

    /// Whether water is falling from the sky.
    pub fn is_wet(&self) -> bool {
        matches!(self, WeatherType::Rain | WeatherType::Thunderstorm | WeatherType::Drizzle)
    }

    /// Gradient used when the weather is shown on its own, without a time theme.
    pub fn backdrop(&self) -> Gradient {
        match self {
            WeatherType::Thunderstorm | WeatherType::Squall | WeatherType::Tornado => {
                Gradient::new("slate-900", "indigo-950", "slate-900")
            }
            WeatherType::Rain | WeatherType::Drizzle => Gradient::new("slate-800", "slate-700", "blue-900"),
            WeatherType::Snow => Gradient::new("slate-200", "blue-100", "slate-300"),
            WeatherType::Mist | WeatherType::Fog | WeatherType::Haze | WeatherType::Smoke => {
                Gradient::new("stone-400", "stone-300", "stone-500")
            }
            WeatherType::Dust | WeatherType::Sand => Gradient::new("orange-200", "amber-200", "orange-300"),
            WeatherType::Ash => Gradient::new("gray-500", "gray-600", "gray-700"),
            WeatherType::Clouds => Gradient::new("sky-400", "blue-400", "blue-500"),
            WeatherType::Clear => Gradient::new("cyan-400", "sky-400", "blue-500"),
        }
    }

    pub fn effects(&self) -> WeatherEffects {
        match self {
            WeatherType::Thunderstorm | WeatherType::Squall => WeatherEffects {
                rain_drops: 80,
                lightning: true,
                ..Default::default()
            },
            WeatherType::Rain | WeatherType::Tornado => WeatherEffects {
                rain_drops: 80,
                ..Default::default()
            },
            WeatherType::Drizzle => WeatherEffects {
                rain_drops: 30,
                ..Default::default()
            },
            WeatherType::Snow => WeatherEffects {
                snowflakes: 50,
                ..Default::default()
            },
            WeatherType::Clear => WeatherEffects {
                sun_glow: true,
                drifting_clouds: 3,
                ..Default::default()
            },
            WeatherType::Clouds => WeatherEffects {
                sun_glow: true,
                drifting_clouds: 8,
                ..Default::default()
            },
            WeatherType::Dust | WeatherType::Sand => WeatherEffects {
                mist: Some(MistTint::Dusty),
                ..Default::default()
            },
            WeatherType::Mist | WeatherType::Fog | WeatherType::Haze | WeatherType::Smoke | WeatherType::Ash => {
                WeatherEffects {
                    mist: Some(MistTint::Pale),
                    ..Default::default()
                }
            }
        }
    }

    /// Icon key used by forecast entries.
    pub fn icon_key(&self) -> &'static str {
        match self {
            WeatherType::Thunderstorm | WeatherType::Squall | WeatherType::Tornado => "storm",
            WeatherType::Rain | WeatherType::Drizzle => "rain",
            WeatherType::Snow => "snow",
            WeatherType::Clouds => "cloud",
            WeatherType::Clear => "sun",
            _ => "fog",
        }
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            WeatherType::Thunderstorm => "thunderstorm",
            WeatherType::Drizzle => "drizzle",
            WeatherType::Rain => "rain",
            WeatherType::Snow => "snow",
            WeatherType::Mist => "mist",
            WeatherType::Smoke => "smoke",
            WeatherType::Haze => "haze",
            WeatherType::Dust => "dust",
            WeatherType::Fog => "fog",
            WeatherType::Sand => "sand",
            WeatherType::Ash => "ash",
            WeatherType::Squall => "squall",
            WeatherType::Tornado => "tornado",
            WeatherType::Clouds => "clouds",
            WeatherType::Clear => "clear",
        };

        write!(f, "{name}")
    }
}
