mod helpers;

use helpers::*;
use leavedesk::calendar::{classify, DateWindow, DayType};
use leavedesk::models::WorkWeek;

#[test]
fn test_one_entry_per_date_inclusive_of_endpoints() {
    let window = DateWindow::new(date(2025, 12, 29), date(2026, 1, 9)).unwrap();
    let days = classify(&window, &monday_to_friday(), &[], &[]);

    assert_eq!(days.len(), 12);
    let dates: Vec<_> = days.keys().copied().collect();
    assert_eq!(dates.first(), Some(&date(2025, 12, 29)));
    assert_eq!(dates.last(), Some(&date(2026, 1, 9)));
    for pair in dates.windows(2) {
        assert_eq!(pair[1], pair[0].succ_opt().unwrap(), "gap in classified window");
    }
}

#[test]
fn test_basic_tags() {
    // 2026-08-03 is a Monday
    let window = DateWindow::new(date(2026, 8, 3), date(2026, 8, 9)).unwrap();
    let days = classify(
        &window,
        &monday_to_friday(),
        &[holiday(date(2026, 8, 5), "Foundation Day")],
        &[approved_leave(date(2026, 8, 7), date(2026, 8, 7))],
    );

    assert_eq!(days[&date(2026, 8, 3)].day_type, DayType::Workday);
    assert_eq!(days[&date(2026, 8, 5)].day_type, DayType::Holiday);
    assert_eq!(days[&date(2026, 8, 5)].tooltip, "Holiday: Foundation Day");
    assert_eq!(days[&date(2026, 8, 7)].day_type, DayType::Leave);
    assert_eq!(days[&date(2026, 8, 7)].tooltip, "Your leave (Casual Leave)");
    assert_eq!(days[&date(2026, 8, 8)].day_type, DayType::Weekend);
    assert_eq!(days[&date(2026, 8, 8)].tooltip, "Weekend (Saturday)");
    assert_eq!(days[&date(2026, 8, 9)].day_type, DayType::Weekend);
}

#[test]
fn test_leave_wins_over_holiday() {
    let window = DateWindow::new(date(2026, 8, 3), date(2026, 8, 7)).unwrap();
    let days = classify(
        &window,
        &monday_to_friday(),
        &[holiday(date(2026, 8, 5), "Foundation Day")],
        &[approved_leave(date(2026, 8, 4), date(2026, 8, 6))],
    );

    assert_eq!(days[&date(2026, 8, 5)].day_type, DayType::Leave);
}

#[test]
fn test_leave_wins_over_weekend() {
    let window = DateWindow::new(date(2026, 8, 7), date(2026, 8, 10)).unwrap();
    let days = classify(
        &window,
        &monday_to_friday(),
        &[],
        &[approved_leave(date(2026, 8, 7), date(2026, 8, 10))],
    );

    // Saturday inside a booked range shows as leave, not weekend.
    assert_eq!(days[&date(2026, 8, 8)].day_type, DayType::Leave);
}

#[test]
fn test_pending_leave_occupies_calendar_rejected_does_not() {
    let window = DateWindow::new(date(2026, 8, 3), date(2026, 8, 7)).unwrap();

    let days = classify(
        &window,
        &monday_to_friday(),
        &[],
        &[pending_leave(date(2026, 8, 4), date(2026, 8, 4))],
    );
    assert_eq!(days[&date(2026, 8, 4)].day_type, DayType::Leave);

    let days = classify(
        &window,
        &monday_to_friday(),
        &[],
        &[rejected_leave(date(2026, 8, 4), date(2026, 8, 4))],
    );
    assert_eq!(days[&date(2026, 8, 4)].day_type, DayType::Workday);
}

#[test]
fn test_six_day_week_saturday_is_workday() {
    let window = DateWindow::new(date(2026, 8, 8), date(2026, 8, 9)).unwrap();
    let days = classify(&window, &six_day_week(), &[], &[]);

    assert_eq!(days[&date(2026, 8, 8)].day_type, DayType::Workday);
    assert_eq!(days[&date(2026, 8, 9)].day_type, DayType::Weekend);
}

#[test]
fn test_recurring_holiday_resolves_into_query_year() {
    let window = DateWindow::new(date(2026, 12, 21), date(2026, 12, 27)).unwrap();
    let days = classify(
        &window,
        &monday_to_friday(),
        &[recurring_holiday(date(2024, 12, 25), "Christmas")],
        &[],
    );

    assert_eq!(days[&date(2026, 12, 25)].day_type, DayType::Holiday);
    assert_eq!(days[&date(2026, 12, 25)].tooltip, "Holiday: Christmas");
}

#[test]
fn test_non_recurring_holiday_does_not_leak_across_years() {
    let window = DateWindow::new(date(2026, 12, 21), date(2026, 12, 27)).unwrap();
    let days = classify(
        &window,
        &monday_to_friday(),
        &[holiday(date(2024, 12, 25), "Christmas 2024")],
        &[],
    );

    assert_eq!(days[&date(2026, 12, 25)].day_type, DayType::Workday);
}

#[test]
fn test_recurring_feb_29_clamps_to_feb_28() {
    let window = DateWindow::new(date(2026, 2, 23), date(2026, 3, 1)).unwrap();
    let days = classify(
        &window,
        &monday_to_friday(),
        &[recurring_holiday(date(2024, 2, 29), "Leap Fest")],
        &[],
    );

    // 2026 is not a leap year; the holiday is observed on Feb 28.
    assert_eq!(days[&date(2026, 2, 27)].day_type, DayType::Workday);
    assert_eq!(days[&date(2026, 2, 28)].day_type, DayType::Holiday);
}

#[test]
fn test_optional_holiday_stays_workday_with_annotation() {
    // 2026-08-05 is a Wednesday
    let window = DateWindow::new(date(2026, 8, 3), date(2026, 8, 7)).unwrap();
    let days = classify(
        &window,
        &monday_to_friday(),
        &[optional_holiday(date(2026, 8, 5), "Regatta Day")],
        &[],
    );

    assert_eq!(days[&date(2026, 8, 5)].day_type, DayType::Workday);
    assert_eq!(days[&date(2026, 8, 5)].tooltip, "Optional holiday: Regatta Day");
}

#[test]
fn test_window_straddling_year_boundary_resolves_both_years() {
    let window = DateWindow::new(date(2025, 12, 29), date(2026, 1, 2)).unwrap();
    let days = classify(
        &window,
        &monday_to_friday(),
        &[
            recurring_holiday(date(2020, 12, 31), "New Year's Eve"),
            recurring_holiday(date(2020, 1, 1), "New Year"),
        ],
        &[],
    );

    assert_eq!(days[&date(2025, 12, 31)].day_type, DayType::Holiday);
    assert_eq!(days[&date(2026, 1, 1)].day_type, DayType::Holiday);
}

#[test]
fn test_classification_is_deterministic() {
    let window = DateWindow::new(date(2025, 12, 29), date(2026, 1, 9)).unwrap();
    let holidays = vec![holiday(date(2026, 1, 1), "New Year")];
    let leaves = vec![approved_leave(date(2026, 1, 6), date(2026, 1, 7))];

    let first = classify(&window, &monday_to_friday(), &holidays, &leaves);
    let second = classify(&window, &monday_to_friday(), &holidays, &leaves);
    assert_eq!(first, second);
}

#[test]
fn test_malformed_inputs_fail_fast() {
    assert!(DateWindow::new(date(2026, 3, 10), date(2026, 3, 1)).is_err());
    assert!(WorkWeek::new("c1".to_string(), &[]).is_err());
    assert!(WorkWeek::new("c1".to_string(), &[9]).is_err());
}
