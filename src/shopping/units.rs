use std::collections::HashMap;
use std::sync::LazyLock;

/// Storage code and display label for every recognized measurement unit.
pub const MEASUREMENTS: &[(&str, &str)] = &[
    ("g", "Gram"),
    ("kg", "Kilogram"),
    ("ml", "Milliliter"),
    ("cl", "Centiliter"),
    ("dl", "Desiliter"),
    ("l", "Liter"),
    ("stk", "Stykk"),
    ("fd", "Fedd"),
    ("ss", "Spiseskje"),
    ("ts", "Teskje"),
    ("hf", "Håndfull"),
    ("kl", "Klype"),
    ("dsj", "Dæsj"),
    ("skv", "Skvett"),
    ("tsk", "Til smak"),
];

/// Storage conversion table: unit code -> (base unit, multiplicative factor).
///
/// Only these units normalize before summation; every other unit is atomic
/// and sums as-is.
static BASE_CONVERSIONS: LazyLock<HashMap<&'static str, (&'static str, f64)>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("kg", ("g", 1000.0));
        m.insert("l", ("ml", 1000.0));
        m.insert("dl", ("ml", 100.0));
        m.insert("cl", ("ml", 10.0));
        m
    });

/// Display conversion table: base unit -> (display unit, threshold).
///
/// Independent of `BASE_CONVERSIONS`: this one is driven by the magnitude of
/// an aggregated total, not by the unit a quantity was entered in.
static DISPLAY_CONVERSIONS: LazyLock<HashMap<&'static str, (&'static str, f64)>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("g", ("kg", 1000.0));
        m.insert("ml", ("l", 1000.0));
        m
    });

/// Whether a unit converts to a base unit before summation.
pub fn is_normalizable(unit: &str) -> bool {
    BASE_CONVERSIONS.contains_key(unit)
}

/// The unit a quantity is summed in: kg -> g, l/dl/cl -> ml, all others are
/// their own base.
pub fn base_unit(unit: &str) -> &str {
    BASE_CONVERSIONS.get(unit).map_or(unit, |&(base, _)| base)
}

/// Convert an amount to its base-unit representation.
///
/// Atomic and unrecognized units pass through unchanged.
pub fn to_base(amount: f64, unit: &str) -> (f64, &str) {
    match BASE_CONVERSIONS.get(unit) {
        Some(&(base, factor)) => (amount * factor, base),
        None => (amount, unit),
    }
}

/// Express a base-unit total in its display unit once it reaches the
/// threshold: g -> kg at 1000, ml -> l at 1000, otherwise unchanged.
pub fn from_base(amount: f64, unit: &str) -> (f64, &str) {
    match DISPLAY_CONVERSIONS.get(unit) {
        Some(&(display, threshold)) if amount >= threshold => (amount / threshold, display),
        _ => (amount, unit),
    }
}

/// Human label for a unit code; unrecognized codes fall back to the code
/// itself.
pub fn unit_label(unit: &str) -> &str {
    MEASUREMENTS
        .iter()
        .find(|(code, _)| *code == unit)
        .map_or(unit, |&(_, label)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizable_set() {
        for unit in ["kg", "l", "dl", "cl"] {
            assert!(is_normalizable(unit), "{} should normalize", unit);
        }
        for unit in ["g", "ml", "stk", "ss", "pose"] {
            assert!(!is_normalizable(unit), "{} should be atomic", unit);
        }
    }

    #[test]
    fn test_base_unit_mapping() {
        assert_eq!(base_unit("kg"), "g");
        assert_eq!(base_unit("l"), "ml");
        assert_eq!(base_unit("dl"), "ml");
        assert_eq!(base_unit("cl"), "ml");
        assert_eq!(base_unit("g"), "g");
        assert_eq!(base_unit("stk"), "stk");
    }

    #[test]
    fn test_to_base_factors() {
        assert_eq!(to_base(2.0, "kg"), (2000.0, "g"));
        assert_eq!(to_base(1.5, "l"), (1500.0, "ml"));
        assert_eq!(to_base(3.0, "dl"), (300.0, "ml"));
        assert_eq!(to_base(4.0, "cl"), (40.0, "ml"));
    }

    #[test]
    fn test_to_base_passthrough_for_atomic_units() {
        assert_eq!(to_base(2.0, "stk"), (2.0, "stk"));
        assert_eq!(to_base(500.0, "g"), (500.0, "g"));
        // User-entered units outside the catalog are atomic too
        assert_eq!(to_base(1.0, "pose"), (1.0, "pose"));
    }

    #[test]
    fn test_from_base_thresholds() {
        assert_eq!(from_base(1000.0, "g"), (1.0, "kg"));
        assert_eq!(from_base(2500.0, "g"), (2.5, "kg"));
        assert_eq!(from_base(999.0, "g"), (999.0, "g"));
        assert_eq!(from_base(1500.0, "ml"), (1.5, "l"));
        assert_eq!(from_base(500.0, "ml"), (500.0, "ml"));
    }

    #[test]
    fn test_display_policy_ignores_origin_units() {
        // "dl" normalizes on the way in but is not a base tag, so the
        // display policy leaves it alone.
        assert_eq!(from_base(2000.0, "dl"), (2000.0, "dl"));
        assert_eq!(from_base(5.0, "stk"), (5.0, "stk"));
    }

    #[test]
    fn test_roundtrip_recovers_scale() {
        let (base, base_tag) = to_base(2.0, "kg");
        let (display, display_tag) = from_base(base, base_tag);
        assert_eq!((display, display_tag), (2.0, "kg"));

        // Below the display threshold the base tag is kept; the scale is
        // still the same quantity.
        let (base, base_tag) = to_base(2.0, "dl");
        let (display, display_tag) = from_base(base, base_tag);
        assert_eq!((display, display_tag), (200.0, "ml"));
    }

    #[test]
    fn test_unit_label() {
        assert_eq!(unit_label("ss"), "Spiseskje");
        assert_eq!(unit_label("stk"), "Stykk");
        assert_eq!(unit_label("pose"), "pose");
    }
}
