use serde::{Deserialize, Serialize};

use crate::theme::{
    Gradient, ThemeDescriptor, TimePeriod, WeatherEffects, WeatherType, combine_background,
};

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeQuery {
    /// Hour of day 0-23, defaults to the current local hour
    pub hour: Option<u8>,
    /// Free-text weather condition
    pub condition: Option<String>,
}

/// Everything a renderer needs to paint the dashboard background.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeResponse {
    pub period: TimePeriod,
    pub theme: ThemeDescriptor,
    pub weather: WeatherType,
    /// Time theme blended with the weather
    pub background: Gradient,
    /// Weather-only gradient
    pub backdrop: Gradient,
    pub effects: WeatherEffects,
}

impl ThemeResponse {
    pub fn resolve(hour: u8, condition: Option<&str>) -> Self {
        let theme = ThemeDescriptor::at_hour(hour);
        let period = theme.period;
        let weather = WeatherType::classify(condition);

        Self {
            period,
            theme,
            weather,
            background: combine_background(weather, &theme),
            backdrop: weather.backdrop(),
            effects: weather.effects(),
        }
    }
}
