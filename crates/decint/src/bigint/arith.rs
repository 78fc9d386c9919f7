use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use super::cmp::compare_magnitudes;
use super::BigInt;

pub(super) fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;
    let mut index = 0;
    while index < a.len() || index < b.len() || carry != 0 {
        let mut sum = carry;
        if index < a.len() {
            sum += a[index];
        }
        if index < b.len() {
            sum += b[index];
        }
        digits.push(sum % 10);
        carry = sum / 10;
        index += 1;
    }
    digits
}

/// Positional difference `a - b` with borrow propagation over `a`'s length.
/// Callers must order the operands so that `|a| >= |b|`; every public path
/// establishes that before calling.
pub(super) fn sub_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(compare_magnitudes(a, b) != Ordering::Less);
    let mut digits = Vec::with_capacity(a.len());
    let mut borrow = 0i8;
    for index in 0..a.len() {
        let mut diff = a[index] as i8 - borrow;
        if index < b.len() {
            diff -= b[index] as i8;
        }
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        digits.push(diff as u8);
    }
    digits
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        if self.negative == other.negative {
            return BigInt::from_digits(
                add_magnitudes(&self.digits, &other.digits),
                self.negative,
            );
        }
        // Differing signs: the result keeps the sign of the larger magnitude,
        // and equal magnitudes normalize to non-negative zero.
        match compare_magnitudes(&self.digits, &other.digits) {
            Ordering::Less => BigInt::from_digits(
                sub_magnitudes(&other.digits, &self.digits),
                other.negative,
            ),
            _ => BigInt::from_digits(sub_magnitudes(&self.digits, &other.digits), self.negative),
        }
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        self + &(-other)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        if self.is_zero() {
            return self.clone();
        }
        BigInt {
            digits: self.digits.clone(),
            negative: !self.negative,
        }
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        let mut digits = vec![0u8; self.digits.len() + other.digits.len()];
        for (i, &da) in self.digits.iter().enumerate() {
            for (j, &db) in other.digits.iter().enumerate() {
                let mut acc = da as u32 * db as u32;
                let mut position = i + j;
                // Fold the partial product into the result, rippling the
                // carry forward as far as it reaches.
                while acc > 0 {
                    if position == digits.len() {
                        digits.push(0);
                    }
                    acc += digits[position] as u32;
                    digits[position] = (acc % 10) as u8;
                    acc /= 10;
                    position += 1;
                }
            }
        }
        BigInt::from_digits(digits, self.negative != other.negative)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        &self + &other
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        &self - &other
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        &self * &other
    }
}
