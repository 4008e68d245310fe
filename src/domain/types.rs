//! Validated scalar inputs for record generation
//!
//! This module provides newtypes for the generation parameters to avoid
//! primitive obsession and ensure validation at boundaries. The generator
//! itself never sees a zero quantity, divisor, or overpeak bound.

use nutype::nutype;

/// Threshold/peak value that the concurrent ramp climbs toward
#[nutype(
    validate(greater_or_equal = 1),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Quantity(u32);

/// Number of ramp records below the threshold; divisor for the step size
#[nutype(
    validate(greater_or_equal = 1),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct RecordCount(u32);

/// One bound of the range an overpeak run length is drawn from
#[nutype(
    validate(greater_or_equal = 1),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct OverpeakBound(u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_validation() {
        assert!(Quantity::try_new(1).is_ok());
        assert!(Quantity::try_new(100).is_ok());
        assert!(Quantity::try_new(0).is_err());
    }

    #[test]
    fn test_record_count_validation() {
        assert!(RecordCount::try_new(5).is_ok());
        assert!(RecordCount::try_new(0).is_err());
    }

    #[test]
    fn test_overpeak_bound_validation() {
        assert!(OverpeakBound::try_new(3).is_ok());
        assert!(OverpeakBound::try_new(0).is_err());
    }
}
