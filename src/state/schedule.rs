use chrono::{Duration, NaiveDate};

use crate::state::i18n::{self, Language};

/// Relative-date arithmetic for task templates. Offsets are counted in days
/// from the wedding date; negative offsets fall before it.
pub fn resolve_due_date(wedding_date: NaiveDate, offset_days: i64) -> NaiveDate {
    wedding_date + Duration::days(offset_days)
}

pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human-readable offset for the template preview column, e.g.
/// "3 weeks before the wedding". Whole weeks are shown as weeks.
pub fn format_offset(language: Language, offset_days: i64) -> String {
    if offset_days == 0 {
        return i18n::tr(language, "schedule.on_wedding_day").to_string();
    }

    let magnitude = offset_days.unsigned_abs();
    let before = offset_days < 0;
    let (key, count) = if magnitude % 7 == 0 {
        let weeks = magnitude / 7;
        let key = match (before, weeks) {
            (true, 1) => "schedule.week_before",
            (true, _) => "schedule.weeks_before",
            (false, 1) => "schedule.week_after",
            (false, _) => "schedule.weeks_after",
        };
        (key, weeks)
    } else {
        let key = match (before, magnitude) {
            (true, 1) => "schedule.day_before",
            (true, _) => "schedule.days_before",
            (false, 1) => "schedule.day_after",
            (false, _) => "schedule.days_after",
        };
        (key, magnitude)
    };

    i18n::tr(language, key).replace("{count}", &count.to_string())
}
