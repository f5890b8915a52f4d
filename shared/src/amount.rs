//! # Amount Conversion
//!
//! Exact conversion between user-entered decimal amounts and the integer
//! base units the node expects on the wire.
//!
//! Both directions work on decimal digit strings instead of floating point,
//! so conversions stay exact for any token precision up to (and beyond) 18
//! decimal places:
//! - [`to_base_units`] - Scale a decimal string by `10^decimals` into `u128`
//! - [`to_decimal`] - Render base units back into a decimal string
//!
//! ## Usage
//!
//! ```rust
//! use shared::amount::{to_base_units, to_decimal};
//!
//! let base = to_base_units("0.5", 18).unwrap();
//! assert_eq!(base, 500_000_000_000_000_000);
//! assert_eq!(to_decimal(base, 18), "0.5");
//! ```

use thiserror::Error;

/// Errors produced while parsing a user-entered decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input is not an unsigned decimal number
    #[error("invalid amount: '{0}'")]
    Malformed(String),
    /// More significant fractional digits than the token supports
    #[error("'{amount}' has more than {decimals} decimal places")]
    ExcessPrecision { amount: String, decimals: u8 },
    /// Scaled value does not fit into 128 bits
    #[error("amount out of range: '{0}'")]
    Overflow(String),
}

/// Scale a decimal amount string into integer base units.
///
/// Accepts plain unsigned decimals (`"10"`, `"0.5"`, `".5"`, `"1."`). Signs,
/// exponents, separators, and whitespace are rejected. Fractional digits
/// beyond `decimals` places are rejected unless they are zeros, since
/// dropping value-carrying digits would pay out a different amount than the
/// caller asked for.
///
/// # Arguments
///
/// * `amount` - The decimal amount as entered by the user
/// * `decimals` - The token's precision (number of decimal places)
///
/// # Examples
///
/// ```rust
/// use shared::amount::{to_base_units, AmountError};
///
/// assert_eq!(to_base_units("10", 8), Ok(1_000_000_000));
/// assert_eq!(to_base_units("0.5", 3), Ok(500));
/// assert_eq!(to_base_units("1.50", 1), Ok(15));
/// assert!(matches!(
///     to_base_units("1.2345", 3),
///     Err(AmountError::ExcessPrecision { .. })
/// ));
/// ```
pub fn to_base_units(amount: &str, decimals: u8) -> Result<u128, AmountError> {
    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    let all_digits =
        integer.chars().all(|c| c.is_ascii_digit()) && fraction.chars().all(|c| c.is_ascii_digit());
    if !all_digits || (integer.is_empty() && fraction.is_empty()) {
        return Err(AmountError::Malformed(amount.to_string()));
    }

    let places = decimals as usize;
    let (kept, excess) = if fraction.len() > places {
        fraction.split_at(places)
    } else {
        (fraction, "")
    };
    if excess.chars().any(|c| c != '0') {
        return Err(AmountError::ExcessPrecision {
            amount: amount.to_string(),
            decimals,
        });
    }

    let digits = integer
        .chars()
        .chain(kept.chars())
        .chain(std::iter::repeat('0').take(places - kept.len()));

    let mut base: u128 = 0;
    for digit in digits {
        let value = (digit as u8 - b'0') as u128;
        base = base
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(value))
            .ok_or_else(|| AmountError::Overflow(amount.to_string()))?;
    }
    Ok(base)
}

/// Render integer base units as a decimal string for display.
///
/// The inverse of [`to_base_units`]. Trailing fractional zeros are trimmed,
/// so the output always round-trips back to the same base units.
///
/// # Examples
///
/// ```rust
/// use shared::amount::to_decimal;
///
/// assert_eq!(to_decimal(1_000_000_000, 8), "10");
/// assert_eq!(to_decimal(500, 3), "0.5");
/// assert_eq!(to_decimal(42, 0), "42");
/// assert_eq!(to_decimal(1, 18), "0.000000000000000001");
/// ```
pub fn to_decimal(base: u128, decimals: u8) -> String {
    let raw = base.to_string();
    let places = decimals as usize;
    if places == 0 {
        return raw;
    }

    let (integer, fraction) = if raw.len() > places {
        raw.split_at(raw.len() - places)
    } else {
        ("", raw.as_str())
    };

    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = format!("{:0>width$}", fraction, width = places);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}
