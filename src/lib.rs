#![forbid(unsafe_code)]
//! Turnos — génération de rotations de turnos sur les week-ends et jours fériés.
//!
//! - Filtrage des dates (samedi, dimanche, fériés fournis).
//! - Rotation round-robin continue (despacho + turno de apoyo).
//! - Résolution code → nom, avec repli "Desconocido".
//! - Export classeur XLSX deux feuilles, éventuellement zippé.

pub mod config;
pub mod export;
pub mod io;
pub mod model;
pub mod preview;
pub mod scheduler;
pub mod storage;

pub use config::RunConfig;
pub use export::{ScheduleExporter, XlsxExporter, ZipExporter};
pub use model::{
    AssignmentRow, CodeDirectory, HolidaySet, Roster, RosterEntry, Schedule, UNKNOWN_NAME,
};
pub use scheduler::{
    assign_rotation, filter_applicable_dates, label_day, resolve_rows, InputSource, SchedError,
    ScheduleRun,
};
