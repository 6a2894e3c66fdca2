use std::fmt::{self, Debug, Display};

use num_traits::{CheckedAdd, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Edge and path cost
/// Any primitive integer qualifies. Signed types are accepted but negative
/// edge costs are rejected when a graph is built.
pub trait Cost: Zero + CheckedAdd + Ord + Copy + Debug {}

impl<T> Cost for T where T: Zero + CheckedAdd + Ord + Copy + Debug {}


/// Best known distance to a node, or the absence of any path
/// Every finite distance orders below `Unreachable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distance<C> {
    Finite(C),
    Unreachable,
}

impl<C: Cost> Distance<C> {

    pub fn finite(self) -> Option<C> {
        match self {
            Distance::Finite(c) => Some(c),
            Distance::Unreachable => None,
        }
    }

    /// Add a finite amount, saturating to `Unreachable` on overflow
    /// Only meant for priority keys, real path costs use checked addition
    pub fn offset(self, amount: C) -> Distance<C> {
        match self {
            Distance::Finite(c) => c.checked_add(&amount).map_or(Distance::Unreachable, Distance::Finite),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl<C> From<Option<C>> for Distance<C> {
    fn from(value: Option<C>) -> Self {
        match value {
            Some(c) => Distance::Finite(c),
            None => Distance::Unreachable,
        }
    }
}

impl<C: Display> Display for Distance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(c) => write!(f, "{c}"),
            Distance::Unreachable => f.write_str("Cannot reach"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_orders_above_every_finite_value() {
        assert!(Distance::Finite(u8::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(0i32) < Distance::Finite(1));
        assert_eq!(Distance::<i32>::Unreachable.max(Distance::Finite(7)), Distance::Unreachable);
    }

    #[test]
    fn test_offset_saturates_instead_of_wrapping() {
        assert_eq!(Distance::Finite(250u8).offset(5), Distance::Finite(255));
        assert_eq!(Distance::Finite(250u8).offset(6), Distance::Unreachable);
        assert_eq!(Distance::<u8>::Unreachable.offset(0), Distance::Unreachable);
    }

    #[test]
    fn test_display_matches_report_format() {
        assert_eq!(Distance::Finite(12i64).to_string(), "12");
        assert_eq!(Distance::<i64>::Unreachable.to_string(), "Cannot reach");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Distance::from(Some(3u32)), Distance::Finite(3));
        assert_eq!(Distance::<u32>::from(None), Distance::Unreachable);
        assert_eq!(Distance::Finite(3u32).finite(), Some(3));
        assert_eq!(Distance::<u32>::Unreachable.finite(), None);
    }
}
