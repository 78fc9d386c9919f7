//! Arbitrary-precision signed integer arithmetic over base-10 digit vectors,
//! sized for RSA-scale modular work (512–2048-bit operands in decimal).

mod bigint;
mod error;

pub use bigint::BigInt;
pub use error::{ArithmeticError, ParseError};
