use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone};
use proptest::prelude::*;
use rplanner::core::recurrence::occurs;
use rplanner::models::RecurrenceKind;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn anchor_at(days: i64, minutes: u32, offset_secs: i32) -> DateTime<FixedOffset> {
    let date = base() + Duration::days(days);
    let naive = date
        .and_hms_opt(minutes / 60, minutes % 60, 0)
        .unwrap();
    FixedOffset::east_opt(offset_secs)
        .unwrap()
        .from_local_datetime(&naive)
        .unwrap()
}

fn kind_strategy() -> impl Strategy<Value = RecurrenceKind> {
    prop_oneof![
        Just(RecurrenceKind::Once),
        Just(RecurrenceKind::Daily),
        Just(RecurrenceKind::Weekly),
        Just(RecurrenceKind::Yearly),
    ]
}

proptest! {
    #[test]
    fn nothing_occurs_before_its_anchor_date(
        days in 0i64..20_000,
        minutes in 0u32..1440,
        offset in -12i32 * 3600..=14 * 3600,
        back in 1i64..5_000,
        kind in kind_strategy(),
    ) {
        let anchor = anchor_at(days, minutes, offset);
        let before = anchor.date_naive() - Duration::days(back);
        prop_assert!(!occurs(anchor, kind, before));
    }

    #[test]
    fn every_kind_occurs_on_its_anchor_date(
        days in 0i64..20_000,
        minutes in 0u32..1440,
        offset in -12i32 * 3600..=14 * 3600,
        kind in kind_strategy(),
    ) {
        let anchor = anchor_at(days, minutes, offset);
        prop_assert!(occurs(anchor, kind, anchor.date_naive()));
    }

    #[test]
    fn once_occurs_on_no_other_day(
        days in 0i64..20_000,
        minutes in 0u32..1440,
        after in 1i64..5_000,
    ) {
        let anchor = anchor_at(days, minutes, 0);
        let later = anchor.date_naive() + Duration::days(after);
        prop_assert!(!occurs(anchor, RecurrenceKind::Once, later));
    }

    #[test]
    fn daily_occurs_on_every_later_day(
        days in 0i64..20_000,
        minutes in 0u32..1440,
        after in 0i64..5_000,
    ) {
        let anchor = anchor_at(days, minutes, 0);
        let later = anchor.date_naive() + Duration::days(after);
        prop_assert!(occurs(anchor, RecurrenceKind::Daily, later));
    }

    #[test]
    fn weekly_occurs_every_seventh_day(
        days in 0i64..20_000,
        minutes in 0u32..1440,
        after in 0i64..5_000,
    ) {
        let anchor = anchor_at(days, minutes, 0);
        let later = anchor.date_naive() + Duration::days(after);
        prop_assert_eq!(
            occurs(anchor, RecurrenceKind::Weekly, later),
            after % 7 == 0
        );
    }

    #[test]
    fn yearly_occurs_on_the_same_day_of_later_years(
        days in 0i64..20_000,
        minutes in 0u32..1440,
        years in 0i32..50,
    ) {
        let anchor = anchor_at(days, minutes, 0);
        let start = anchor.date_naive();
        prop_assume!(!(start.month() == 2 && start.day() == 29));

        let same_day = NaiveDate::from_ymd_opt(start.year() + years, start.month(), start.day()).unwrap();
        prop_assert!(occurs(anchor, RecurrenceKind::Yearly, same_day));

        let next_day = same_day + Duration::days(1);
        prop_assert!(!occurs(anchor, RecurrenceKind::Yearly, next_day));
    }
}

#[test]
fn weekly_anchor_on_friday_scenario() {
    let anchor = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 15, 9, 0, 0)
        .unwrap();
    let d = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();

    assert!(occurs(anchor, RecurrenceKind::Weekly, d(3, 22)));
    assert!(!occurs(anchor, RecurrenceKind::Weekly, d(3, 21)));
    assert!(!occurs(anchor, RecurrenceKind::Weekly, d(3, 8)));
}

#[test]
fn yearly_leap_day_skips_common_years() {
    let anchor = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 2, 29, 8, 0, 0)
        .unwrap();

    for year in 2025..=2027 {
        for (m, d) in [(2, 28), (3, 1)] {
            let date = NaiveDate::from_ymd_opt(year, m, d).unwrap();
            assert!(!occurs(anchor, RecurrenceKind::Yearly, date));
        }
    }
    assert!(occurs(
        anchor,
        RecurrenceKind::Yearly,
        NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
    ));
}

#[test]
fn anchor_date_follows_the_recorded_offset() {
    // 23:30 at UTC-5 is already the next day in UTC
    let anchor = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 10, 23, 30, 0)
        .unwrap();

    let june_10 = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let june_11 = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
    assert!(occurs(anchor, RecurrenceKind::Once, june_10));
    assert!(!occurs(anchor, RecurrenceKind::Once, june_11));
}
