use super::util;
use crate::model::HolidaySet;
use chrono::NaiveDate;

/// Jours de `[start, end]` retenus pour un turno : samedi, dimanche ou férié.
///
/// Ordre chronologique strict. `start > end` donne une séquence vide.
pub fn filter_applicable_dates(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HolidaySet,
) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| util::is_weekend(*d) || holidays.contains(*d))
        .collect()
}
