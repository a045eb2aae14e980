//! Amount type and rounding helpers
//!
//! Balances are kept as `f64`. Conversion to [`Decimal`] happens only at the
//! edges, for display and for comparing balances at cent precision.

pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Monetary amount
pub type Amount = f64;

/// Precision helpers for common operations
pub mod precision {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;
    use crate::error::{Error, Result};

    /// Default amount precision (2 decimal places)
    pub const AMOUNT_PRECISION: u32 = 2;

    /// Convert an amount to a decimal rounded to standard precision
    pub fn to_decimal(amount: Amount) -> Result<Decimal> {
        let value = Decimal::from_f64(amount).ok_or_else(|| {
            Error::DecimalError(format!("{} is not representable as a decimal", amount))
        })?;
        Ok(value.round_dp(AMOUNT_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::precision::to_decimal;
    use super::*;

    #[test]
    fn test_to_decimal_rounds_to_cents() {
        assert_eq!(to_decimal(11.99 - 4.55).unwrap(), dec!(7.44));
        assert_eq!(to_decimal(12.3 - 5.2).unwrap(), dec!(7.10));
        assert_eq!(to_decimal(0.0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_to_decimal_rejects_non_finite() {
        assert!(to_decimal(f64::NAN).is_err());
        assert!(to_decimal(f64::INFINITY).is_err());
    }
}
