pub mod get_latest_readings;
pub mod submit_reading;
