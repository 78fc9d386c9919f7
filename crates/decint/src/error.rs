#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid digit {found:?} at byte {offset}")]
pub struct ParseError {
    pub found: char,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("no modular inverse: operand and modulus are not coprime")]
    NoInverse,
}
