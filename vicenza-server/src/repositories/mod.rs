mod sensor_reading;

pub use sensor_reading::SensorReadingRepository;
