//! The digits of π used throughout the film.

/// 40 decimal places, the ring of digits in the intro.
pub const PI_RING: &str = "3.1415926535897932384626433832795028841971";

/// 50 decimal places, laid out along the finale spiral.
pub const PI_SPIRAL: &str = "3.14159265358979323846264338327950288419716939937510";

/// 100 decimal places in blocks of ten, two lines. Machin's 1706 milestone.
pub const PI_100: [&str; 2] = [
    "3.1415926535 8979323846 2643383279 5028841971 6939937510",
    "5820974944 5923078164 0628620899 8628034825 3421170679",
];

/// The 39 decimal places polygon methods had reached by 1630.
pub const PI_39: &str = "3.141592653589793238462643383279502884197";

/// The digit wall shown after the Google record.
pub const PI_WALL: [&str; 6] = [
    "3.1415926535 8979323846 2643383279 5028841971 6939937510",
    "5820974944 5923078164 0628620899 8628034825 3421170679",
    "8214808651 3282306647 0938446095 5058223172 5359408128",
    "4811174502 8410270193 8521105559 6446229489 5493038196",
    "2874406566 9234603486 1045432664 8213393607 2602491412",
    "7372458700 6606315588 1748815209 2096282925 4091715364",
];

/// The precise block the mathematicians flaunt, blocks of ten, four lines.
pub const PI_PRECISE: [&str; 4] = [
    "3.1415926535 8979323846 2643383279",
    "5028841971 6939937510 5820974944",
    "5923078164 0628620899 8628034825",
    "3421170679",
];

/// Known precision at successive points in history, paired with the year.
pub const PI_BY_YEAR: [(i32, &str); 8] = [
    (-250, "3"),
    (1500, "3.14"),
    (1700, "3.14159"),
    (1800, "3.1415926535"),
    (1900, "3.141592653589793"),
    (1950, "3.14159265358979323846"),
    (2000, "3.1415926535897932384626433"),
    (2025, "3.1415926535897932384626433832795028841971"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_has_40_decimal_places() {
        // "3." plus 40 digits.
        assert_eq!(PI_RING.len(), 42);
        assert!(PI_RING.starts_with("3.14159"));
    }

    #[test]
    fn test_precision_grows_over_history() {
        for pair in PI_BY_YEAR.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1.len() < pair[1].1.len());
        }
    }
}
