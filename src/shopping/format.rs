use crate::shopping::units::{from_base, unit_label};

/// Render an aggregated amount in its most readable unit.
///
/// Gram and milliliter totals promote to kg/l once they reach 1000;
/// everything else renders as an integer when whole, otherwise with one
/// decimal, suffixed with the unit's display label.
pub fn format_measurement(amount: f64, unit: &str) -> String {
    let (display_amount, display_unit) = from_base(amount, unit);

    if display_unit != unit {
        return format!("{:.1} {}", display_amount, display_unit);
    }

    if amount.fract() == 0.0 {
        format!("{} {}", amount as i64, unit_label(unit))
    } else {
        format!("{:.1} {}", amount, unit_label(unit))
    }
}
