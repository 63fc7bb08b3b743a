use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    /// 05:00 - 06:59
    Dawn,
    /// 07:00 - 10:59
    Morning,
    /// 11:00 - 13:59
    Noon,
    /// 14:00 - 17:59
    Afternoon,
    /// 18:00 - 20:59
    Evening,
    /// 21:00 - 04:59
    Night,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 6] = [
        TimePeriod::Dawn,
        TimePeriod::Morning,
        TimePeriod::Noon,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
        TimePeriod::Night,
    ];

    /// Buckets a wall-clock hour. Upper bounds are exclusive, and anything that
    /// is not inside a daytime interval (including hours past 23) is night.
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            5..7 => TimePeriod::Dawn,
            7..11 => TimePeriod::Morning,
            11..14 => TimePeriod::Noon,
            14..18 => TimePeriod::Afternoon,
            18..21 => TimePeriod::Evening,
            _ => TimePeriod::Night,
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimePeriod::Dawn => write!(f, "dawn"),
            TimePeriod::Morning => write!(f, "morning"),
            TimePeriod::Noon => write!(f, "noon"),
            TimePeriod::Afternoon => write!(f, "afternoon"),
            TimePeriod::Evening => write!(f, "evening"),
            TimePeriod::Night => write!(f, "night"),
        }
    }
}
