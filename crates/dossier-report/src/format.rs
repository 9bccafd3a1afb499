//! Italian (`it-IT`) date and time wording used throughout the report.
//!
//! Input values are whatever the user typed. Anything that does not parse as
//! an ISO date is passed through untouched.

use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS: [&str; 12] = [
  "gennaio",
  "febbraio",
  "marzo",
  "aprile",
  "maggio",
  "giugno",
  "luglio",
  "agosto",
  "settembre",
  "ottobre",
  "novembre",
  "dicembre",
];

fn weekday_name(day: Weekday) -> &'static str {
  match day {
    Weekday::Mon => "lunedì",
    Weekday::Tue => "martedì",
    Weekday::Wed => "mercoledì",
    Weekday::Thu => "giovedì",
    Weekday::Fri => "venerdì",
    Weekday::Sat => "sabato",
    Weekday::Sun => "domenica",
  }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// `2024-03-10` → `10/03/2024`.
pub(crate) fn format_short(date: NaiveDate) -> String {
  date.format("%d/%m/%Y").to_string()
}

/// `2024-03-10` → `domenica 10 marzo 2024`.
pub(crate) fn format_long(date: NaiveDate) -> String {
  format!(
    "{} {} {} {}",
    weekday_name(date.weekday()),
    date.day(),
    MONTHS[date.month0() as usize],
    date.year()
  )
}

pub(crate) fn short_date(value: &str) -> String {
  parse_date(value).map_or_else(|| value.to_string(), format_short)
}

pub(crate) fn long_date(value: &str) -> String {
  parse_date(value).map_or_else(|| value.to_string(), format_long)
}

/// Wording for a time span where either end may be missing.
pub(crate) fn time_range(start: &str, end: &str) -> Option<String> {
  match (start.trim(), end.trim()) {
    ("", "") => None,
    (start, "") => Some(format!("dalle ore {start}")),
    ("", end) => Some(format!("fino alle ore {end}")),
    (start, end) => Some(format!("dalle ore {start} alle ore {end}")),
  }
}

/// `Place (Address)`, dropping whichever part is empty.
pub(crate) fn place(name: &str, address: &str) -> Option<String> {
  match (name.trim(), address.trim()) {
    ("", "") => None,
    (name, "") => Some(name.to_string()),
    ("", address) => Some(address.to_string()),
    (name, address) => Some(format!("{name} ({address})")),
  }
}

/// Join clauses as `a, b e c`.
pub(crate) fn join_list(items: &[String]) -> String {
  match items {
    [] => String::new(),
    [only] => only.clone(),
    [init @ .., last] => format!("{} e {}", init.join(", "), last),
  }
}
