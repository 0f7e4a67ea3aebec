#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use turnos::{
    assign_rotation, filter_applicable_dates, label_day, resolve_rows, CodeDirectory, HolidaySet,
    Roster, RosterEntry, SchedError, ScheduleRun,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn two_entry_roster() -> Roster {
    Roster::new(vec![RosterEntry::new("A", "X"), RosterEntry::new("B", "Y")])
}

#[test]
fn reversed_range_is_empty() {
    let holidays: HolidaySet = [d(2024, 1, 8)].into_iter().collect();
    assert!(filter_applicable_dates(d(2024, 1, 10), d(2024, 1, 1), &holidays).is_empty());
}

#[test]
fn filter_matches_weekend_or_holiday_predicate() {
    let holidays: HolidaySet = [d(2024, 1, 1), d(2024, 1, 8), d(2024, 3, 28)]
        .into_iter()
        .collect();
    let start = d(2023, 12, 15);
    let end = d(2024, 4, 2);
    let kept = filter_applicable_dates(start, end, &holidays);

    for pair in kept.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    let expected: Vec<NaiveDate> = start
        .iter_days()
        .take_while(|x| *x <= end)
        .filter(|x| matches!(x.weekday(), Weekday::Sat | Weekday::Sun) || holidays.contains(*x))
        .collect();
    assert_eq!(kept, expected);
    assert_eq!(kept.first().copied(), Some(d(2023, 12, 16)));
}

#[test]
fn single_day_range_is_inclusive() {
    let holidays = HolidaySet::new();
    assert_eq!(
        filter_applicable_dates(d(2024, 1, 6), d(2024, 1, 6), &holidays),
        vec![d(2024, 1, 6)]
    );
    assert!(filter_applicable_dates(d(2024, 1, 8), d(2024, 1, 8), &holidays).is_empty());
}

#[test]
fn monday_included_only_when_holiday() {
    let mut holidays = HolidaySet::new();
    let monday = d(2024, 1, 8);
    let dates = filter_applicable_dates(d(2024, 1, 6), d(2024, 1, 9), &holidays);
    assert_eq!(dates, vec![d(2024, 1, 6), d(2024, 1, 7)]);

    holidays.insert(monday);
    let dates = filter_applicable_dates(d(2024, 1, 6), d(2024, 1, 9), &holidays);
    assert_eq!(dates, vec![d(2024, 1, 6), d(2024, 1, 7), monday]);
    assert_eq!(label_day(monday, &holidays), "Lunes Festivo");
}

#[test]
fn cycle_wraps_after_roster_length() {
    let holidays: HolidaySet = [d(2024, 1, 8)].into_iter().collect();
    let dates = [d(2024, 1, 6), d(2024, 1, 7), d(2024, 1, 8)];
    let rows = assign_rotation(&dates, &two_entry_roster(), &holidays).unwrap();

    let got: Vec<(usize, &str, &str)> = rows
        .iter()
        .map(|r| (r.order, r.primary.as_str(), r.support.as_str()))
        .collect();
    assert_eq!(got, vec![(1, "A", "X"), (2, "B", "Y"), (1, "A", "X")]);
    assert_eq!(rows[0].day_label, "Sábado");
    assert_eq!(rows[1].day_label, "Domingo");
    assert_eq!(rows[2].day_label, "Lunes Festivo");
}

#[test]
fn empty_roster_is_configuration_error() {
    let dates = [d(2024, 1, 6)];
    let err = assign_rotation(&dates, &Roster::default(), &HolidaySet::new()).unwrap_err();
    assert!(matches!(err, SchedError::Configuration(_)));

    let run = ScheduleRun::new(
        d(2024, 1, 1),
        d(2024, 1, 31),
        HolidaySet::new(),
        Roster::default(),
        CodeDirectory::new(),
    );
    assert!(matches!(run.generate(), Err(SchedError::Configuration(_))));
}

#[test]
fn empty_roster_rejected_even_without_dates() {
    let err = assign_rotation(&[], &Roster::default(), &HolidaySet::new()).unwrap_err();
    assert!(matches!(err, SchedError::Configuration(_)));
}

#[test]
fn order_is_continuous_across_skipped_dates() {
    let roster = Roster::new(
        ["C1", "C2", "C3"]
            .iter()
            .map(|c| RosterEntry::new(*c, format!("{c}-apoyo")))
            .collect(),
    );
    let holidays: HolidaySet = [d(2024, 5, 1), d(2024, 5, 13)].into_iter().collect();
    let dates = filter_applicable_dates(d(2024, 4, 1), d(2024, 6, 30), &holidays);
    let rows = assign_rotation(&dates, &roster, &holidays).unwrap();

    assert_eq!(rows.len(), dates.len());
    for (idx, row) in rows.iter().enumerate() {
        assert_eq!(row.order, idx % 3 + 1);
        assert_eq!(row.date, dates[idx]);
        let entry = &roster.entries[row.order - 1];
        assert_eq!(row.primary, entry.primary_code);
        assert_eq!(row.support, entry.support_code);
    }
}

#[test]
fn resolved_view_is_aligned_with_coded_view() {
    let directory: CodeDirectory = [("A", "Juzgado Primero"), ("X", "Juzgado Tercero")]
        .into_iter()
        .collect();
    let run = ScheduleRun::new(
        d(2024, 1, 1),
        d(2024, 1, 21),
        [d(2024, 1, 8)].into_iter().collect(),
        two_entry_roster(),
        directory,
    );
    let schedule = run.generate().unwrap();

    assert_eq!(schedule.coded.len(), schedule.resolved.len());
    assert_eq!(schedule.len(), 7);
    for (coded, resolved) in schedule.coded.iter().zip(&schedule.resolved) {
        assert_eq!(coded.order, resolved.order);
        assert_eq!(coded.date, resolved.date);
        assert_eq!(coded.day_label, resolved.day_label);
    }
    assert_eq!(schedule.resolved[0].primary, "Juzgado Primero");
    assert_eq!(schedule.resolved[0].support, "Juzgado Tercero");
    assert_eq!(schedule.resolved[1].primary, "Desconocido");
    assert_eq!(schedule.resolved[1].support, "Desconocido");
}

#[test]
fn resolve_keeps_row_count_and_order() {
    let holidays = HolidaySet::new();
    let dates = filter_applicable_dates(d(2024, 2, 1), d(2024, 2, 29), &holidays);
    let coded = assign_rotation(&dates, &two_entry_roster(), &holidays).unwrap();
    let resolved = resolve_rows(&coded, &CodeDirectory::new());
    assert_eq!(resolved.len(), coded.len());
    assert!(resolved.iter().all(|r| r.primary == turnos::UNKNOWN_NAME));
    assert_eq!(resolved[0].formatted_date(), "03/02/2024");
}
