//! Time-of-day and weather theming.
//!
//! Everything in here is a pure lookup: an hour becomes a [`TimePeriod`], a
//! period becomes a [`ThemeDescriptor`], a free-text condition becomes a
//! [`WeatherType`], and [`combine_background`] merges the last two into the
//! gradient a renderer paints behind the dashboard.

mod background;
mod descriptor;
mod gradient;
mod period;
mod weather;

pub use background::combine_background;
pub use descriptor::{CelestialPlacement, ThemeDescriptor};
pub use gradient::Gradient;
pub use period::TimePeriod;
pub use weather::{MistTint, WeatherEffects, WeatherType};
