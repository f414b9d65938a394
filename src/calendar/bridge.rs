use crate::calendar::day::{DayRecord, DayType};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

pub const SMART_LEAVE_TOOLTIP: &str =
    "Smart leave suggestion: take this day off to extend your break";

/// Promote bridge-day segments to smart-leave candidates.
///
/// A segment is a maximal run of consecutive workday-classified dates. It
/// qualifies when the dates immediately before and after it are both inside
/// the classified window, each side has a contiguous buffer of weekend or
/// holiday days, and at least one of the two buffers contains a holiday.
/// Weekends alone recur every week and are not an opportunity worth
/// flagging.
///
/// Scan decisions read the pre-promotion classification only; promotions
/// are applied after the whole scan so earlier segments never influence
/// later ones.
pub fn detect_bridges(days: &mut BTreeMap<NaiveDate, DayRecord>) {
    let dates: Vec<NaiveDate> = days.keys().copied().collect();
    let mut promoted: Vec<NaiveDate> = Vec::new();

    let mut idx = 0;
    while idx < dates.len() {
        if days[&dates[idx]].day_type != DayType::Workday {
            idx += 1;
            continue;
        }

        // Extend to the end of this workday segment. Adjacency is by
        // calendar date, so a gap in the map ends the segment.
        let segment_start = idx;
        let mut segment_end = idx;
        while segment_end + 1 < dates.len()
            && dates[segment_end + 1] == next_day(dates[segment_end])
            && days[&dates[segment_end + 1]].day_type == DayType::Workday
        {
            segment_end += 1;
        }

        if qualifies(days, dates[segment_start], dates[segment_end]) {
            promoted.extend_from_slice(&dates[segment_start..=segment_end]);
        }

        idx = segment_end + 1;
    }

    for date in promoted {
        if let Some(record) = days.get_mut(&date) {
            record.day_type = DayType::SmartLeave;
            record.tooltip = SMART_LEAVE_TOOLTIP.to_string();
        }
    }
}

fn qualifies(
    days: &BTreeMap<NaiveDate, DayRecord>,
    segment_first: NaiveDate,
    segment_last: NaiveDate,
) -> bool {
    // A segment touching either window edge cannot qualify; there is no
    // information beyond the edge.
    let Some(before) = prev_day(segment_first) else {
        return false;
    };
    if !days.contains_key(&before) || !days.contains_key(&next_day(segment_last)) {
        return false;
    }

    let mut backward_buffer = false;
    let mut backward_holiday = false;
    let mut scan = Some(before);
    while let Some(date) = scan {
        let Some(record) = days.get(&date) else { break };
        if !record.day_type.is_non_working_buffer() {
            break;
        }
        backward_buffer = true;
        backward_holiday |= record.day_type == DayType::Holiday;
        scan = prev_day(date);
    }

    let mut forward_buffer = false;
    let mut forward_holiday = false;
    let mut scan = next_day(segment_last);
    while let Some(record) = days.get(&scan) {
        if !record.day_type.is_non_working_buffer() {
            break;
        }
        forward_buffer = true;
        forward_holiday |= record.day_type == DayType::Holiday;
        scan = next_day(scan);
    }

    backward_buffer && forward_buffer && (backward_holiday || forward_holiday)
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}

fn prev_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(1))
}
