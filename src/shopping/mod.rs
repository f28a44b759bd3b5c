pub mod aggregate;
pub mod format;
pub mod units;

pub use aggregate::{
    AggregatedItem, AggregationOutcome, PlannedServing, SkipReason, SkippedMeal, aggregate,
};
pub use format::format_measurement;
pub use units::{MEASUREMENTS, base_unit, from_base, is_normalizable, to_base, unit_label};
