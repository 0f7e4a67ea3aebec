use chrono::{Datelike, NaiveDate, Weekday};

pub(super) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Position suivante dans un cycle 1-based : `n` revient à 1.
pub(super) fn next_order(order: usize, cycle_len: usize) -> usize {
    order % cycle_len + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_order_wraps_to_one() {
        assert_eq!(next_order(1, 3), 2);
        assert_eq!(next_order(3, 3), 1);
        assert_eq!(next_order(1, 1), 1);
    }

    #[test]
    fn weekend_detection() {
        let sat = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let mon = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert!(is_weekend(sat));
        assert!(is_weekend(sat.succ_opt().unwrap()));
        assert!(!is_weekend(mon));
    }
}
