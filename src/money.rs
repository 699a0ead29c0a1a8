//! Money handling at the API boundary and in the conversion step
//!
//! - [`StrictAmount`]: format-validated positive decimal for request input
//! - [`convert`]: amount x rate at the ledger's fixed precision
//!
//! All amounts are `rust_decimal::Decimal` end to end and are stored in
//! NUMERIC columns; amounts serialize as JSON strings to preserve
//! precision.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed decimal precision of ledger amounts (and wallet balances).
pub const LEDGER_SCALE: u32 = 2;

/// Round to the ledger scale, ties to even.
///
/// Used for the conversion result and for report totals so a stored
/// `amount_received` always equals a recomputation at the same precision.
pub fn round_to_ledger(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(LEDGER_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Convert an amount with a rate: `amount * rate`, rounded to the ledger
/// scale (half-even).
pub fn convert(amount: Decimal, rate: Decimal) -> Decimal {
    round_to_ledger(amount * rate)
}

// ============================================================================
// StrictAmount: Format-Validated Positive Decimal at Serde Layer
// ============================================================================

/// Strict positive amount - validates format during deserialization
///
/// Accepts only JSON strings so format control stays with us:
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects scientific notation and a `+` prefix
/// - Rejects empty strings
/// - Rejects zero and negative values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrictAmount(Decimal);

impl StrictAmount {
    /// Wrap a decimal, enforcing the positivity rule for programmatic callers.
    pub fn new(value: Decimal) -> Result<Self, String> {
        if value <= Decimal::ZERO {
            return Err("amount must be greater than zero".to_string());
        }
        Ok(StrictAmount(value))
    }

    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl std::ops::Deref for StrictAmount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StrictAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // Only accept JSON strings; numbers would bypass format validation
        let s = String::deserialize(deserializer)?;

        if s.is_empty() {
            return Err(D::Error::custom("amount cannot be empty"));
        }
        if s.starts_with('.') {
            return Err(D::Error::custom("invalid format: use 0.5 not .5"));
        }
        if s.ends_with('.') {
            return Err(D::Error::custom("invalid format: use 5.0 not 5."));
        }
        if s.contains('e') || s.contains('E') {
            return Err(D::Error::custom(
                "invalid format: scientific notation not allowed",
            ));
        }
        if s.starts_with('+') {
            return Err(D::Error::custom("invalid format: + prefix not allowed"));
        }

        let d = Decimal::from_str(&s)
            .map_err(|e| D::Error::custom(format!("invalid decimal: {}", e)))?;

        if d.is_sign_negative() {
            return Err(D::Error::custom("amount cannot be negative"));
        }
        if d.is_zero() {
            return Err(D::Error::custom("amount must be greater than zero"));
        }

        Ok(StrictAmount(d))
    }
}

impl Serialize for StrictAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // String form preserves precision
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<StrictAmount, serde_json::Error> {
        serde_json::from_str::<StrictAmount>(&format!("\"{}\"", s))
    }

    #[test]
    fn test_strict_amount_accepts_normal_forms() {
        assert_eq!(parse("50").unwrap().inner(), Decimal::new(50, 0));
        assert_eq!(parse("13.50").unwrap().inner(), Decimal::new(1350, 2));
        assert_eq!(parse("0.01").unwrap().inner(), Decimal::new(1, 2));
        assert_eq!(parse("001.23").unwrap().inner(), Decimal::new(123, 2));
    }

    #[test]
    fn test_strict_amount_rejects_bad_formats() {
        let cases = [
            "",      // empty
            ".5",    // missing leading zero
            "5.",    // missing fractional part
            "1e2",   // scientific notation
            "1E2",   // scientific notation, capital
            "+1.23", // explicit plus
            "-1.23", // negative
            "0",     // zero
            "0.00",  // zero with scale
            "1,000", // commas
            "1.2.3", // multiple dots
        ];
        for case in cases {
            assert!(parse(case).is_err(), "should reject {:?}", case);
        }
    }

    #[test]
    fn test_strict_amount_rejects_json_numbers() {
        // Numbers bypass format validation, so they are refused outright
        assert!(serde_json::from_str::<StrictAmount>("1.5").is_err());
    }

    #[test]
    fn test_strict_amount_serializes_as_string() {
        let amount = StrictAmount::new(Decimal::new(1350, 2)).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"13.50\"");
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(StrictAmount::new(Decimal::ZERO).is_err());
        assert!(StrictAmount::new(Decimal::new(-1, 0)).is_err());
        assert!(StrictAmount::new(Decimal::ONE).is_ok());
    }

    #[test]
    fn test_convert_reference_scenario() {
        // 50 SAR at 0.27 -> 13.50 USD
        let got = convert(Decimal::new(50, 0), Decimal::new(27, 2));
        assert_eq!(got, Decimal::new(1350, 2));
    }

    #[test]
    fn test_convert_rounds_half_even() {
        // 0.125 -> 0.12 (ties to even), 0.135 -> 0.14
        assert_eq!(
            convert(Decimal::new(125, 3), Decimal::ONE),
            Decimal::new(12, 2)
        );
        assert_eq!(
            convert(Decimal::new(135, 3), Decimal::ONE),
            Decimal::new(14, 2)
        );
        // 1 * 0.005 -> 0.00, 3 * 0.005 -> 0.02
        assert_eq!(convert(Decimal::ONE, Decimal::new(5, 3)), Decimal::new(0, 2));
        assert_eq!(
            convert(Decimal::new(3, 0), Decimal::new(5, 3)),
            Decimal::new(2, 2)
        );
    }

    #[test]
    fn test_convert_is_exact_below_scale() {
        // No rounding when the product already fits the ledger scale
        assert_eq!(
            convert(Decimal::new(100, 0), Decimal::new(5, 1)),
            Decimal::new(50, 0)
        );
    }
}
