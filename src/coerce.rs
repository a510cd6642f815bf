// Cell-level coercion for loosely typed spreadsheet values.
//
// FantasyPros exports leave cells blank, quote numbers as text, and append
// percent signs to ratio columns. Every helper here maps "absent or
// unparseable" to None; callers pick the per-field default.

/// Parse a cell as an integer, truncating any fractional part toward zero.
///
/// Blank or whitespace-only cells and unparseable text yield `None`.
/// Tolerates a fractional part: `"4.0"` -> 4, `"-2.9"` -> -2.
pub fn to_int(cell: Option<&str>) -> Option<i64> {
    let s = cell?.trim();
    if s.is_empty() {
        return None;
    }
    let v: f64 = s.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    Some(v.trunc() as i64)
}

/// Parse a cell as a float, tolerating percent signs.
///
/// Percent signs are stripped but the value is NOT divided by 100:
/// `"12.5%"` -> 12.5. Blank cells and parse failures yield `None`.
pub fn to_float(cell: Option<&str>) -> Option<f64> {
    let s = cell?.replace('%', "");
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let v: f64 = s.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    Some(v)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- to_int --

    #[test]
    fn int_plain() {
        assert_eq!(to_int(Some("12")), Some(12));
        assert_eq!(to_int(Some("-3")), Some(-3));
        assert_eq!(to_int(Some("0")), Some(0));
    }

    #[test]
    fn int_truncates_fraction_toward_zero() {
        assert_eq!(to_int(Some("4.0")), Some(4));
        assert_eq!(to_int(Some("4.9")), Some(4));
        assert_eq!(to_int(Some("-2.9")), Some(-2));
    }

    #[test]
    fn int_trims_whitespace() {
        assert_eq!(to_int(Some("  7  ")), Some(7));
    }

    #[test]
    fn int_missing_or_blank_is_none() {
        assert_eq!(to_int(None), None);
        assert_eq!(to_int(Some("")), None);
        assert_eq!(to_int(Some("   ")), None);
    }

    #[test]
    fn int_unparseable_is_none() {
        assert_eq!(to_int(Some("n/a")), None);
        assert_eq!(to_int(Some("12abc")), None);
    }

    #[test]
    fn int_non_finite_is_none() {
        assert_eq!(to_int(Some("inf")), None);
        assert_eq!(to_int(Some("NaN")), None);
    }

    // -- to_float --

    #[test]
    fn float_plain() {
        assert_eq!(to_float(Some("1.2")), Some(1.2));
        assert_eq!(to_float(Some("-0.5")), Some(-0.5));
    }

    #[test]
    fn float_strips_percent_without_scaling() {
        assert_eq!(to_float(Some("87.5%")), Some(87.5));
        assert_eq!(to_float(Some("5%")), Some(5.0));
    }

    #[test]
    fn float_trims_after_percent_strip() {
        assert_eq!(to_float(Some(" 5 %")), Some(5.0));
    }

    #[test]
    fn float_missing_or_blank_is_none() {
        assert_eq!(to_float(None), None);
        assert_eq!(to_float(Some("")), None);
        assert_eq!(to_float(Some("  ")), None);
        // A lone percent sign leaves nothing to parse.
        assert_eq!(to_float(Some("%")), None);
    }

    #[test]
    fn float_unparseable_is_none() {
        assert_eq!(to_float(Some("--")), None);
        assert_eq!(to_float(Some("1.2.3")), None);
    }

    #[test]
    fn float_non_finite_is_none() {
        assert_eq!(to_float(Some("inf")), None);
        assert_eq!(to_float(Some("nan")), None);
    }
}
