use crate::domain::common::entities::units::MeasurementUnit;

/// Multiplier turning a quantity in `from` into `to`, for the fixed set of
/// convertible pairs. `None` means the pair has no defined conversion;
/// callers decide what to do with the mismatch.
pub fn conversion_rate(from: MeasurementUnit, to: MeasurementUnit) -> Option<f64> {
    use MeasurementUnit::*;

    if from == to {
        return Some(1.0);
    }

    match (from, to) {
        (Kg, G) => Some(1000.0),
        (G, Kg) => Some(0.001),
        (L, Ml) => Some(1000.0),
        (Ml, L) => Some(0.001),
        (Tbsp, Tsp) => Some(3.0),
        (Tsp, Tbsp) => Some(0.333),
        (Cup, Ml) => Some(240.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MeasurementUnit::*;

    #[test]
    fn converts_known_pairs() {
        assert_eq!(conversion_rate(Kg, G), Some(1000.0));
        assert_eq!(conversion_rate(G, Kg), Some(0.001));
        assert_eq!(conversion_rate(L, Ml), Some(1000.0));
        assert_eq!(conversion_rate(Tbsp, Tsp), Some(3.0));
        assert_eq!(conversion_rate(Cup, Ml), Some(240.0));
    }

    #[test]
    fn identity_is_always_defined() {
        assert_eq!(conversion_rate(Pieces, Pieces), Some(1.0));
        assert_eq!(conversion_rate(Pinch, Pinch), Some(1.0));
    }

    #[test]
    fn unknown_pairs_have_no_rate() {
        assert_eq!(conversion_rate(Pieces, G), None);
        assert_eq!(conversion_rate(Ml, G), None);
        // cup only converts towards ml
        assert_eq!(conversion_rate(Ml, Cup), None);
    }
}
