use super::descriptor::ThemeDescriptor;
use super::gradient::Gradient;
use super::period::TimePeriod;
use super::weather::WeatherType;

const NIGHT: Gradient = Gradient::new("slate-950", "indigo-950", "black");
const EVENING_WET: Gradient = Gradient::new("indigo-900", "purple-800", "slate-900");
const EVENING_DRY: Gradient = Gradient::new("indigo-900", "purple-900", "slate-900");

/// Blends weather into the time theme. Night ignores the weather entirely,
/// evening only distinguishes wet from dry, and daytime lets a handful of
/// weather types repaint the sky while everything else keeps the hour's own
/// gradient.
pub fn combine_background(weather: WeatherType, theme: &ThemeDescriptor) -> Gradient {
    match theme.period {
        TimePeriod::Night => NIGHT,
        TimePeriod::Evening if weather.is_wet() => EVENING_WET,
        TimePeriod::Evening => EVENING_DRY,
        _ => match weather {
            WeatherType::Rain => Gradient::new("slate-700", "slate-600", "blue-800"),
            WeatherType::Thunderstorm => Gradient::new("slate-800", "indigo-900", "slate-900"),
            WeatherType::Clouds => Gradient::new("sky-500", "blue-500", "blue-600"),
            WeatherType::Snow => Gradient::new("slate-300", "blue-200", "slate-400"),
            _ => theme.gradient,
        },
    }
}
