use std::cmp::Ordering;
use std::ops::{Div, Rem};

use num_traits::Zero;

use crate::error::ArithmeticError;

use super::arith::sub_magnitudes;
use super::cmp::compare_magnitudes;
use super::BigInt;

fn trim_magnitude(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}

/// `a * d` for a single digit `d`, as a normalized magnitude.
fn mul_magnitude_digit(a: &[u8], d: u8) -> Vec<u8> {
    let mut digits = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u32;
    for &digit in a {
        let acc = digit as u32 * d as u32 + carry;
        digits.push((acc % 10) as u8);
        carry = acc / 10;
    }
    while carry > 0 {
        digits.push((carry % 10) as u8);
        carry /= 10;
    }
    trim_magnitude(&mut digits);
    digits
}

impl BigInt {
    /// Computes quotient and remainder in one long-division pass, with
    /// truncating semantics: the quotient is negative iff the operand signs
    /// differ, and the remainder takes the dividend's sign.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut remainder: Vec<u8> = vec![0];

        for &digit in self.digits.iter().rev() {
            remainder.insert(0, digit);
            trim_magnitude(&mut remainder);

            // Largest q in 0..=9 with |divisor| * q <= remainder, by binary
            // search. q = 0 always fits, so the search starts at 1.
            let mut q = 0u8;
            let (mut low, mut high) = (1u8, 9u8);
            while low <= high {
                let mid = (low + high) / 2;
                let candidate = mul_magnitude_digit(&divisor.digits, mid);
                if compare_magnitudes(&candidate, &remainder) != Ordering::Greater {
                    q = mid;
                    low = mid + 1;
                } else {
                    high = mid - 1;
                }
            }

            if q > 0 {
                let product = mul_magnitude_digit(&divisor.digits, q);
                remainder = sub_magnitudes(&remainder, &product);
                trim_magnitude(&mut remainder);
            }
            quotient.push(q);
        }

        quotient.reverse();
        Ok((
            BigInt::from_digits(quotient, self.negative != divisor.negative),
            BigInt::from_digits(remainder, self.negative),
        ))
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    /// Panics on a zero divisor; fallible callers use [`BigInt::div_rem`].
    fn div(self, divisor: &BigInt) -> BigInt {
        match self.div_rem(divisor) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    /// Panics on a zero divisor; fallible callers use [`BigInt::div_rem`].
    fn rem(self, divisor: &BigInt) -> BigInt {
        match self.div_rem(divisor) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, divisor: BigInt) -> BigInt {
        &self / &divisor
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, divisor: BigInt) -> BigInt {
        &self % &divisor
    }
}
