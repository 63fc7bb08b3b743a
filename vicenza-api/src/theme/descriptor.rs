use serde::Serialize;

use super::gradient::Gradient;
use super::period::TimePeriod;

/// Where the sun or moon sits on the backdrop.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CelestialPlacement {
    /// Offset from the top edge, percent of the viewport
    pub top: i8,
    /// Offset from the right edge, percent of the viewport
    pub right: i8,
    pub opacity: f32,
    /// Blur radius in px
    pub blur: u16,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeDescriptor {
    pub period: TimePeriod,
    /// Localized period name
    pub name: &'static str,
    pub gradient: Gradient,
    pub accent: &'static str,
    pub celestial: CelestialPlacement,
    pub stars: bool,
    pub clouds: bool,
}

const BLUR_2XL: u16 = 40;
const BLUR_3XL: u16 = 64;

impl From<TimePeriod> for ThemeDescriptor {
    fn from(period: TimePeriod) -> Self {
        match period {
            TimePeriod::Dawn => ThemeDescriptor {
                period,
                name: "Bình minh",
                gradient: Gradient::new("orange-500", "pink-400", "yellow-300"),
                accent: "orange",
                celestial: CelestialPlacement { top: 10, right: 15, opacity: 0.7, blur: BLUR_3XL },
                stars: false,
                clouds: true,
            },
            TimePeriod::Morning => ThemeDescriptor {
                period,
                name: "Buổi sáng",
                gradient: Gradient::new("yellow-300", "blue-300", "sky-400"),
                accent: "yellow",
                celestial: CelestialPlacement { top: 5, right: 10, opacity: 0.8, blur: BLUR_3XL },
                stars: false,
                clouds: true,
            },
            TimePeriod::Noon => ThemeDescriptor {
                period,
                name: "Buổi trưa",
                gradient: Gradient::new("cyan-400", "sky-400", "blue-500"),
                accent: "cyan",
                celestial: CelestialPlacement { top: -5, right: 5, opacity: 0.9, blur: BLUR_2XL },
                stars: false,
                clouds: true,
            },
            TimePeriod::Afternoon => ThemeDescriptor {
                period,
                name: "Buổi chiều",
                gradient: Gradient::new("orange-400", "red-400", "pink-500"),
                accent: "orange",
                celestial: CelestialPlacement { top: 15, right: 20, opacity: 0.75, blur: BLUR_3XL },
                stars: false,
                clouds: true,
            },
            TimePeriod::Evening => ThemeDescriptor {
                period,
                name: "Buổi tối",
                gradient: Gradient::new("indigo-900", "purple-900", "slate-900"),
                accent: "purple",
                celestial: CelestialPlacement { top: 25, right: 25, opacity: 0.5, blur: BLUR_2XL },
                stars: true,
                clouds: true,
            },
            TimePeriod::Night => ThemeDescriptor {
                period,
                name: "Đêm",
                gradient: Gradient::new("slate-950", "indigo-950", "black"),
                accent: "indigo",
                celestial: CelestialPlacement { top: 10, right: 15, opacity: 0.4, blur: BLUR_3XL },
                stars: true,
                clouds: false,
            },
        }
    }
}

impl ThemeDescriptor {
    pub fn at_hour(hour: u8) -> Self {
        TimePeriod::from_hour(hour).into()
    }
}
