use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    iot::{
        entities::SensorReading,
        value_objects::{SensorReadingAck, SubmitReadingInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SensorReadingRepository: Send + Sync {
    fn create(
        &self,
        reading: SensorReading,
    ) -> impl Future<Output = Result<SensorReading, CoreError>> + Send;

    fn get_latest(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<SensorReading>, CoreError>> + Send;
}

pub trait IotService: Send + Sync {
    fn record_reading(
        &self,
        input: SubmitReadingInput,
    ) -> impl Future<Output = Result<SensorReadingAck, CoreError>> + Send;

    fn latest_readings(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<SensorReading>, CoreError>> + Send;
}
