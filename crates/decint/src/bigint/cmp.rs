use std::cmp::Ordering;

use super::BigInt;

/// Compares two normalized magnitudes: longer wins, otherwise the first
/// differing digit from the most-significant end decides.
pub(super) fn compare_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (da, db) in a.iter().rev().zip(b.iter().rev()) {
        if da != db {
            return da.cmp(db);
        }
    }
    Ordering::Equal
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => compare_magnitudes(&self.digits, &other.digits),
            // Both negative: the larger magnitude is the smaller value.
            (true, true) => compare_magnitudes(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
