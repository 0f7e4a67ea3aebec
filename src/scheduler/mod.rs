mod assignment;
mod filter;
mod label;
mod resolve;
mod types;
mod util;

pub use assignment::assign_rotation;
pub use filter::filter_applicable_dates;
pub use label::{label_day, spanish_day_name};
pub use resolve::resolve_rows;
pub use types::{InputSource, SchedError};

use crate::model::{CodeDirectory, HolidaySet, Roster, Schedule};
use chrono::NaiveDate;

/// Un run de génération : entrées possédées, aucun état partagé.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub holidays: HolidaySet,
    pub roster: Roster,
    pub directory: CodeDirectory,
}

impl ScheduleRun {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        holidays: HolidaySet,
        roster: Roster,
        directory: CodeDirectory,
    ) -> Self {
        Self {
            start,
            end,
            holidays,
            roster,
            directory,
        }
    }

    /// Dates retenues pour ce run.
    pub fn applicable_dates(&self) -> Vec<NaiveDate> {
        filter_applicable_dates(self.start, self.end, &self.holidays)
    }

    /// Produit les vues codée et résolue ; échoue avant toute ligne si le
    /// roster est vide.
    pub fn generate(&self) -> Result<Schedule, SchedError> {
        let dates = self.applicable_dates();
        let coded = assign_rotation(&dates, &self.roster, &self.holidays)?;
        let resolved = resolve_rows(&coded, &self.directory);

        #[cfg(feature = "logging")]
        tracing::debug!(
            start = %self.start,
            end = %self.end,
            cycle_len = self.roster.cycle_len(),
            rows = coded.len(),
            "schedule generated"
        );

        Ok(Schedule { coded, resolved })
    }
}
