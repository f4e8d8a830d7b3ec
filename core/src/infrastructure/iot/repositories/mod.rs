pub mod sensor_reading_repository;
