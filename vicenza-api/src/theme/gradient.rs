use std::fmt;

use serde::Serialize;

/// Three colour stops of a diagonal background gradient.
///
/// Stops are colour tokens (`slate-950`, `sky-400`, ...) so the renderer is
/// free to resolve them against its own palette.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub via: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, via: &'static str, to: &'static str) -> Self {
        Self { from, via, to }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "from-{} via-{} to-{}", self.from, self.via, self.to)
    }
}
