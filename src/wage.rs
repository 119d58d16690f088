// 💵 Wage Parsing - Monetary input normalization
// Accepts decorated strings ("$2,500.00", "1 234,56") and applies the single
// rounding rule used at every currency output boundary.

// ============================================================================
// PARSING
// ============================================================================

/// Parse a free-text monetary string into a plain decimal amount.
///
/// Strips every character that is not a digit, a decimal point, or a leading
/// minus sign, then parses the remainder:
/// - "$1,234.56" → 1234.56
/// - "  2500 "   → 2500.0
/// - "-$99.50"   → -99.5
/// - "abc"       → NaN
///
/// Never fails: an unparseable value is NaN, excluded downstream by the
/// wage-valid check. Callers must not treat NaN as an error.
pub fn parse_wage(raw: &str) -> f64 {
    let mut cleaned = String::with_capacity(raw.len());

    for c in raw.chars() {
        if c.is_ascii_digit() || c == '.' {
            cleaned.push(c);
        } else if c == '-' && cleaned.is_empty() {
            // Minus only counts when it leads the cleaned number
            cleaned.push(c);
        }
    }

    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

// ============================================================================
// ROUNDING
// ============================================================================

/// Round a currency amount to 2 decimal places.
///
/// Round-half-away-from-zero on the scaled integer: multiply by 100, round,
/// divide by 100. Applied exactly once, at the output boundary; intermediate
/// sums are never rounded. NaN passes through unchanged.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decorated_currency() {
        assert_eq!(parse_wage("$1,234.56"), 1234.56);
        assert_eq!(parse_wage("$2,500.00"), 2500.0);
        assert_eq!(parse_wage("  2500 "), 2500.0);
    }

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_wage("1800"), 1800.0);
        assert_eq!(parse_wage("1800.5"), 1800.5);
    }

    #[test]
    fn test_parse_leading_minus() {
        assert_eq!(parse_wage("-$99.50"), -99.5);
        assert_eq!(parse_wage("($45.00)-ish"), 45.0);
    }

    #[test]
    fn test_parse_garbage_is_nan() {
        assert!(parse_wage("abc").is_nan());
        assert!(parse_wage("").is_nan());
        assert!(parse_wage("$").is_nan());
        assert!(parse_wage("-").is_nan());
        assert!(parse_wage("..").is_nan());
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(1234.5678), 1234.57);
        assert_eq!(round_currency(100.0 / 3.0), 33.33);
        assert_eq!(round_currency(600.0), 600.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.125 is exactly representable, so this pins the tie-break rule
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(-0.125), -0.13);
    }

    #[test]
    fn test_round_nan_passthrough() {
        assert!(round_currency(f64::NAN).is_nan());
    }
}
