//! Currency representation
//!
//! All monetary amounts are integer cents. Contract values round to the
//! nearest $1,000 and SOV/billing amounts to the nearest $100, so every
//! scheduled or billed amount stays a multiple of $100 and conservation
//! checks hold with integer equality rather than float tolerance.

/// Monetary amount in cents.
pub type Cents = i64;

/// One dollar, in cents.
pub const DOLLAR: Cents = 100;

/// Rounding unit for SOV lines and billing periods ($100).
pub const HUNDRED_DOLLARS: Cents = 100 * DOLLAR;

/// Rounding unit for contract values ($1,000).
pub const THOUSAND_DOLLARS: Cents = 1_000 * DOLLAR;

/// Round to the nearest multiple of `unit`, halves away from zero.
pub fn round_to_nearest(amount: Cents, unit: Cents) -> Cents {
    debug_assert!(unit > 0);
    let half = unit / 2;
    if amount >= 0 {
        (amount + half).div_euclid(unit) * unit
    } else {
        -((-amount + half).div_euclid(unit) * unit)
    }
}

/// Convert a fractional dollar amount to cents, rounded to the cent.
pub fn cents_from_dollars(dollars: f64) -> Cents {
    (dollars * 100.0).round() as Cents
}

/// Apply a fractional multiplier to an amount, rounded to the cent.
pub fn scale(amount: Cents, factor: f64) -> Cents {
    (amount as f64 * factor).round() as Cents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_hundred_dollars() {
        assert_eq!(round_to_nearest(12_345_00, HUNDRED_DOLLARS), 12_300_00);
        assert_eq!(round_to_nearest(12_350_00, HUNDRED_DOLLARS), 12_400_00);
        assert_eq!(round_to_nearest(12_355_00, HUNDRED_DOLLARS), 12_400_00);
    }

    #[test]
    fn rounds_negative_amounts_away_from_zero() {
        assert_eq!(round_to_nearest(-12_350_00, HUNDRED_DOLLARS), -12_400_00);
        assert_eq!(round_to_nearest(-12_340_00, HUNDRED_DOLLARS), -12_300_00);
    }

    #[test]
    fn scale_rounds_to_cent() {
        assert_eq!(scale(10_000, 0.333), 3_330);
        assert_eq!(cents_from_dollars(85.505), 8_551);
    }
}
