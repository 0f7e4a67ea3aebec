use super::{label::label_day, types::SchedError, util};
use crate::model::{AssignmentRow, HolidaySet, Roster};
use chrono::NaiveDate;

/// Assigne une entrée du roster à chaque date, dans l'ordre du cycle.
///
/// Le compteur `order` démarre à 1 et n'est jamais réinitialisé : il avance
/// d'un cran par date retenue, quelles que soient les dates sautées.
pub fn assign_rotation(
    dates: &[NaiveDate],
    roster: &Roster,
    holidays: &HolidaySet,
) -> Result<Vec<AssignmentRow>, SchedError> {
    if roster.is_empty() {
        return Err(SchedError::Configuration(
            "roster is empty: rotation cycle length is zero".to_string(),
        ));
    }

    let cycle_len = roster.cycle_len();
    let mut order = 1usize;
    let mut rows = Vec::with_capacity(dates.len());

    for &date in dates {
        let entry = &roster.entries[(order - 1) % cycle_len];
        rows.push(AssignmentRow {
            order,
            date,
            day_label: label_day(date, holidays),
            primary: entry.primary_code.clone(),
            support: entry.support_code.clone(),
        });
        order = util::next_order(order, cycle_len);
    }

    Ok(rows)
}
