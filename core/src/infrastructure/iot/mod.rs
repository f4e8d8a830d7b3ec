pub mod mappers;
pub mod repositories;

pub use repositories::sensor_reading_repository::PostgresSensorReadingRepository;
