//! Per-sample pixel operators
//!
//! Pure functions on single 8-bit channel samples. Every function is total:
//! it is defined for all inputs and never panics. Where the mathematical
//! result leaves `[0, 255]` the result saturates.
//!
//! Binary operators:
//!
//! - [`add`], [`subtract`] (absolute difference), [`average`], [`blend`]
//! - [`and`], [`or`], [`xor`]
//! - [`multiply`], [`divide`]
//!
//! Unary operators:
//!
//! - [`not`], [`multiply_by_factor`], [`divide_by_factor`]
//!
//! Operators that carry a parameter are exposed as values of [`BinaryOp`]
//! and [`UnaryOp`], which the matrix combinators accept.

use crate::error::{Error, Result};

/// Saturating sum: `a + b`, clamped to 255.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Absolute difference `|a - b|`.
#[inline]
pub fn subtract(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

/// Weighted mix `factor * a + (1 - factor) * b`, truncated.
///
/// The factor is not restricted to `[0, 1]`. Results outside `[0, 255]`
/// saturate in the float-to-integer conversion.
#[inline]
pub fn blend(factor: f32, a: u8, b: u8) -> u8 {
    (factor * a as f32 + (1.0 - factor) * b as f32) as u8
}

/// Mean of two samples, truncated.
#[inline]
pub fn average(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}

/// Bitwise AND.
#[inline]
pub fn and(a: u8, b: u8) -> u8 {
    a & b
}

/// Bitwise OR.
#[inline]
pub fn or(a: u8, b: u8) -> u8 {
    a | b
}

/// Bitwise XOR.
#[inline]
pub fn xor(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Normalized product `a * b / 255`, truncated.
#[inline]
pub fn multiply(a: u8, b: u8) -> u8 {
    (a as u32 * b as u32 / 255) as u8
}

/// Ratio of the smaller sample to the larger one, scaled to `[0, 255]`.
///
/// Equal samples (including two zeros) give 255.
#[inline]
pub fn divide(a: u8, b: u8) -> u8 {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    if lo == hi {
        return 255;
    }
    (lo as u32 * 255 / hi as u32) as u8
}

/// Scale a sample: `factor * p`, clamped to 255 and truncated.
///
/// Negative products saturate to 0.
#[inline]
pub fn multiply_by_factor(factor: f32, p: u8) -> u8 {
    (factor * p as f32).min(255.0) as u8
}

/// Scale a sample by the reciprocal of `factor`.
///
/// A zero factor saturates every non-zero sample to 255.
#[inline]
pub fn divide_by_factor(factor: f32, p: u8) -> u8 {
    multiply_by_factor(1.0 / factor, p)
}

/// Complement against the fixed maximum: `255 - p`.
#[inline]
pub fn not(p: u8) -> u8 {
    255 - p
}

/// Two-sample operator, with its parameter if it has one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    /// Saturating sum
    Add,
    /// Absolute difference
    Subtract,
    /// Truncated mean
    Average,
    /// `factor * a + (1 - factor) * b`
    Blend(f32),
    /// Bitwise AND
    And,
    /// Bitwise OR
    Or,
    /// Bitwise XOR
    Xor,
    /// Normalized product
    Multiply,
    /// Min/max ratio
    Divide,
}

impl BinaryOp {
    /// Apply the operator to one pair of samples.
    #[inline]
    pub fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            BinaryOp::Add => add(a, b),
            BinaryOp::Subtract => subtract(a, b),
            BinaryOp::Average => average(a, b),
            BinaryOp::Blend(factor) => blend(factor, a, b),
            BinaryOp::And => and(a, b),
            BinaryOp::Or => or(a, b),
            BinaryOp::Xor => xor(a, b),
            BinaryOp::Multiply => multiply(a, b),
            BinaryOp::Divide => divide(a, b),
        }
    }

    /// Check the operator's parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a blend factor is NaN or infinite.
    pub fn validate(self) -> Result<()> {
        match self {
            BinaryOp::Blend(factor) if !factor.is_finite() => Err(Error::InvalidParameter(
                format!("blend factor must be finite, got {factor}"),
            )),
            _ => Ok(()),
        }
    }
}

/// One-sample operator, with its parameter if it has one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    /// `255 - p`
    Not,
    /// `factor * p`, clamped
    Multiply(f32),
    /// `p / factor`, clamped
    Divide(f32),
}

impl UnaryOp {
    /// Apply the operator to one sample.
    #[inline]
    pub fn apply(self, p: u8) -> u8 {
        match self {
            UnaryOp::Not => not(p),
            UnaryOp::Multiply(factor) => multiply_by_factor(factor, p),
            UnaryOp::Divide(factor) => divide_by_factor(factor, p),
        }
    }

    /// Check the operator's parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a multiply factor is negative or
    /// not finite, or if a divide factor is not strictly positive and finite.
    pub fn validate(self) -> Result<()> {
        match self {
            UnaryOp::Not => Ok(()),
            UnaryOp::Multiply(factor) => {
                if !factor.is_finite() || factor < 0.0 {
                    return Err(Error::InvalidParameter(format!(
                        "multiply factor must be finite and >= 0.0, got {factor}"
                    )));
                }
                Ok(())
            }
            UnaryOp::Divide(factor) => {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(Error::InvalidParameter(format!(
                        "divide factor must be finite and > 0.0, got {factor}"
                    )));
                }
                Ok(())
            }
        }
    }
}
