use crate::model::HolidaySet;
use chrono::{Datelike, NaiveDate, Weekday};

const HOLIDAY_SUFFIX: &str = " Festivo";

/// Nom espagnol du jour de la semaine.
pub fn spanish_day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Libellé de la colonne DIA, suffixé par " Festivo" pour un jour férié.
pub fn label_day(date: NaiveDate, holidays: &HolidaySet) -> String {
    let name = spanish_day_name(date.weekday());
    if holidays.contains(date) {
        format!("{name}{HOLIDAY_SUFFIX}")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_weekday_has_a_name() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let names: Vec<&str> = monday
            .iter_days()
            .take(7)
            .map(|d| spanish_day_name(d.weekday()))
            .collect();
        assert_eq!(
            names,
            ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"]
        );
    }

    #[test]
    fn holiday_gets_suffix() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let mut holidays = HolidaySet::new();
        assert_eq!(label_day(date, &holidays), "Lunes");
        holidays.insert(date);
        assert_eq!(label_day(date, &holidays), "Lunes Festivo");
    }
}
