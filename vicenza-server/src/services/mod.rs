mod news_service;
mod sensor_service;
mod weather_service;

pub use news_service::*;
pub use sensor_service::*;
pub use weather_service::*;
