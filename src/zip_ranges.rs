//! ZIP code to state attribution
//!
//! States are resolved from inclusive numeric ranges over the 5-digit ZIP
//! space. The table is scanned in order and the first containing range wins,
//! so the order below (ascending by low bound) is part of the behavior.
//! Source: USPS ZIP prefix allocations, state level only.

use serde::{Deserialize, Serialize};

use crate::state::StateCode;

/// Inclusive ZIP interval attributed to a single state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRange {
    pub low: u32,
    pub high: u32,
    pub state: StateCode,
}

impl ZipRange {
    pub const fn new(low: u32, high: u32, state: StateCode) -> Self {
        Self { low, high, state }
    }

    pub fn contains(&self, zip: u32) -> bool {
        zip >= self.low && zip <= self.high
    }
}

/// Built-in ZIP range table, ascending by low bound.
///
/// Virginia, DC and Texas each own two non-contiguous ranges. They are kept as
/// separate entries so that the table mirrors the prefix allocation.
pub static ZIP_RANGES: &[ZipRange] = &[
    ZipRange::new(1000, 2799, StateCode::MA),
    ZipRange::new(2800, 2999, StateCode::RI),
    ZipRange::new(3000, 3899, StateCode::NH),
    ZipRange::new(3900, 4999, StateCode::ME),
    ZipRange::new(5000, 5999, StateCode::VT),
    ZipRange::new(6000, 6999, StateCode::CT),
    ZipRange::new(7000, 8999, StateCode::NJ),
    ZipRange::new(10000, 14999, StateCode::NY),
    ZipRange::new(15000, 19699, StateCode::PA),
    ZipRange::new(19700, 19999, StateCode::DE),
    ZipRange::new(20000, 20099, StateCode::DC),
    ZipRange::new(20100, 20199, StateCode::VA),
    ZipRange::new(20200, 20599, StateCode::DC),
    ZipRange::new(20600, 21999, StateCode::MD),
    ZipRange::new(22000, 24699, StateCode::VA),
    ZipRange::new(24700, 26999, StateCode::WV),
    ZipRange::new(27000, 28999, StateCode::NC),
    ZipRange::new(29000, 29999, StateCode::SC),
    ZipRange::new(30000, 31999, StateCode::GA),
    ZipRange::new(32000, 34999, StateCode::FL),
    ZipRange::new(35000, 36999, StateCode::AL),
    ZipRange::new(37000, 38599, StateCode::TN),
    ZipRange::new(38600, 39999, StateCode::MS),
    ZipRange::new(40000, 42999, StateCode::KY),
    ZipRange::new(43000, 45999, StateCode::OH),
    ZipRange::new(46000, 47999, StateCode::IN),
    ZipRange::new(48000, 49999, StateCode::MI),
    ZipRange::new(50000, 52999, StateCode::IA),
    ZipRange::new(53000, 54999, StateCode::WI),
    ZipRange::new(55000, 56999, StateCode::MN),
    ZipRange::new(57000, 57999, StateCode::SD),
    ZipRange::new(58000, 58999, StateCode::ND),
    ZipRange::new(59000, 59999, StateCode::MT),
    ZipRange::new(60000, 62999, StateCode::IL),
    ZipRange::new(63000, 65999, StateCode::MO),
    ZipRange::new(66000, 67999, StateCode::KS),
    ZipRange::new(68000, 69999, StateCode::NE),
    ZipRange::new(70000, 71599, StateCode::LA),
    ZipRange::new(71600, 72999, StateCode::AR),
    ZipRange::new(73000, 74999, StateCode::OK),
    ZipRange::new(75000, 79999, StateCode::TX),
    ZipRange::new(80000, 81999, StateCode::CO),
    ZipRange::new(82000, 83199, StateCode::WY),
    ZipRange::new(83200, 83999, StateCode::ID),
    ZipRange::new(84000, 84999, StateCode::UT),
    ZipRange::new(85000, 86999, StateCode::AZ),
    ZipRange::new(87000, 88499, StateCode::NM),
    ZipRange::new(88500, 88599, StateCode::TX),
    ZipRange::new(88900, 89999, StateCode::NV),
    ZipRange::new(90000, 96199, StateCode::CA),
    ZipRange::new(96700, 96999, StateCode::HI),
    ZipRange::new(97000, 97999, StateCode::OR),
    ZipRange::new(98000, 99499, StateCode::WA),
    ZipRange::new(99500, 99999, StateCode::AK),
];

/// Parse the numeric part of a ZIP string.
///
/// Only the first five characters are considered, and of those only the
/// leading run of ASCII digits. Returns `None` when there is no leading digit.
pub fn parse_zip(zip: &str) -> Option<u32> {
    let digits: String = zip
        .chars()
        .take(5)
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Find the state for a ZIP in the given range table (first match wins)
pub fn lookup_state(ranges: &[ZipRange], zip: &str) -> Option<StateCode> {
    let code = parse_zip(zip)?;
    ranges
        .iter()
        .find(|range| range.contains(code))
        .map(|range| range.state)
}

/// Resolve a ZIP against the built-in range table.
///
/// Unknown or malformed ZIPs yield `None`; callers treat that as
/// "use the national average", not as an error.
pub fn resolve_state(zip: &str) -> Option<StateCode> {
    lookup_state(ZIP_RANGES, zip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virginia_dual_ranges() {
        assert_eq!(resolve_state("22501"), Some(StateCode::VA));
        assert_eq!(resolve_state("20105"), Some(StateCode::VA));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert_eq!(resolve_state("59000"), Some(StateCode::MT));
        assert_eq!(resolve_state("59999"), Some(StateCode::MT));
        assert_eq!(resolve_state("99999"), Some(StateCode::AK));
        assert_eq!(resolve_state("01000"), Some(StateCode::MA));
    }

    #[test]
    fn test_known_zips() {
        assert_eq!(resolve_state("10001"), Some(StateCode::NY));
        assert_eq!(resolve_state("90210"), Some(StateCode::CA));
        assert_eq!(resolve_state("60601"), Some(StateCode::IL));
        assert_eq!(resolve_state("77002"), Some(StateCode::TX));
        assert_eq!(resolve_state("88510"), Some(StateCode::TX));
        assert_eq!(resolve_state("20500"), Some(StateCode::DC));
    }

    #[test]
    fn test_unknown_and_malformed_zips() {
        assert_eq!(resolve_state(""), None);
        assert_eq!(resolve_state("abc12"), None);
        assert_eq!(resolve_state("00000"), None);
        // Gaps in the allocation
        assert_eq!(resolve_state("09500"), None);
        assert_eq!(resolve_state("96500"), None);
    }

    #[test]
    fn test_only_first_five_characters_are_parsed() {
        assert_eq!(parse_zip("10001-1234"), Some(10001));
        assert_eq!(parse_zip("123456789"), Some(12345));
        assert_eq!(parse_zip("12ab3"), Some(12));
        assert_eq!(parse_zip(" 10001"), None);
    }

    #[test]
    fn test_table_is_sorted_and_disjoint() {
        for range in ZIP_RANGES {
            assert!(range.low <= range.high, "inverted range {:?}", range);
        }
        for pair in ZIP_RANGES.windows(2) {
            assert!(
                pair[0].high < pair[1].low,
                "ranges out of order or overlapping: {:?} / {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_every_state_is_covered() {
        for state in StateCode::ALL {
            assert!(
                ZIP_RANGES.iter().any(|r| r.state == state),
                "no ZIP range for {}",
                state
            );
        }
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let ranges = [
            ZipRange::new(100, 200, StateCode::OH),
            ZipRange::new(150, 250, StateCode::PA),
        ];
        assert_eq!(lookup_state(&ranges, "00160"), Some(StateCode::OH));
        assert_eq!(lookup_state(&ranges, "00220"), Some(StateCode::PA));
    }
}
