use num_traits::{One, ToPrimitive, Zero};

use super::BigInt;

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt {
            digits: vec![0],
            negative: false,
        }
    }

    fn is_zero(&self) -> bool {
        self.digits == [0]
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt {
            digits: vec![1],
            negative: false,
        }
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        // Accumulate toward the sign so that i64::MIN converts exactly.
        let mut acc = 0i64;
        for &digit in self.digits.iter().rev() {
            acc = acc.checked_mul(10)?;
            acc = if self.negative {
                acc.checked_sub(digit as i64)?
            } else {
                acc.checked_add(digit as i64)?
            };
        }
        Some(acc)
    }

    fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        let mut acc = 0u64;
        for &digit in self.digits.iter().rev() {
            acc = acc.checked_mul(10)?.checked_add(digit as u64)?;
        }
        Some(acc)
    }
}
