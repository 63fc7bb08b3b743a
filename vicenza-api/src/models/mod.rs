mod news;
mod sensor;
mod theme;
mod weather;

pub use news::*;
pub use sensor::*;
pub use theme::*;
pub use weather::*;

pub type Id = i64;
