use crate::domain::iot::entities::SensorReading;

pub const GAS_ALERT_THRESHOLD: f64 = 400.0;
pub const LOW_WEIGHT_THRESHOLD: f64 = 200.0;

/// Derive the alert for a reading. Fire wins over gas, gas over weight; at
/// most one alert per reading.
pub fn evaluate_alert(reading: &SensorReading) -> Option<String> {
    if reading.fire {
        Some("Fire detected in kitchen!".to_string())
    } else if reading.gas > GAS_ALERT_THRESHOLD {
        Some("High gas concentration detected!".to_string())
    } else if reading.weight < LOW_WEIGHT_THRESHOLD {
        Some("Low weight detected - check inventory!".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(gas: f64, weight: f64, fire: bool) -> SensorReading {
        SensorReading::new("esp32-kitchen".to_string(), gas, weight, fire)
    }

    #[test]
    fn fire_takes_priority_over_everything() {
        let alert = evaluate_alert(&reading(999.0, 1.0, true));
        assert_eq!(alert.as_deref(), Some("Fire detected in kitchen!"));
    }

    #[test]
    fn gas_takes_priority_over_weight() {
        let alert = evaluate_alert(&reading(500.0, 1.0, false));
        assert_eq!(alert.as_deref(), Some("High gas concentration detected!"));
    }

    #[test]
    fn low_weight_alerts_when_nothing_else_fires() {
        let alert = evaluate_alert(&reading(100.0, 150.0, false));
        assert_eq!(alert.as_deref(), Some("Low weight detected - check inventory!"));
    }

    #[test]
    fn nominal_reading_has_no_alert() {
        assert_eq!(evaluate_alert(&reading(100.0, 500.0, false)), None);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(evaluate_alert(&reading(400.0, 200.0, false)), None);
    }
}
