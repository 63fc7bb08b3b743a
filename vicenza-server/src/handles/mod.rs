mod docs_handle;
mod news_handle;
mod sensor_handle;
mod sse_handle;
mod theme_handle;
mod weather_handle;

pub use docs_handle::*;
pub use news_handle::*;
pub use sensor_handle::*;
pub use sse_handle::*;
pub use theme_handle::*;
pub use weather_handle::*;
