//! Derived Views
//!
//! Read-only computations over a `TodoList`. Nothing is cached; every call
//! recomputes from the current list.

use chrono::{DateTime, Local, TimeZone, Timelike, Datelike, Utc};

use crate::domain::{Priority, StatusFilter, Todo};
use crate::state::TodoList;

/// Aggregate counts shown in the header and stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

impl Counts {
    /// Completed share in whole percent, rounded; 0 for an empty list
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Number of open (not completed) todos per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityHistogram {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityHistogram {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

impl TodoList {
    /// Todos whose title contains `search_term` (case-insensitive) and that pass `filter`, in list order
    pub fn filtered(&self, search_term: &str, filter: StatusFilter) -> Vec<&Todo> {
        let needle = search_term.to_lowercase();
        self.iter()
            .filter(|t| filter.matches(t))
            .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn counts(&self) -> Counts {
        let total = self.len();
        let completed = self.iter().filter(|t| t.completed).count();
        Counts { total, completed, active: total - completed }
    }

    pub fn has_completed(&self) -> bool {
        self.iter().any(|t| t.completed)
    }

    /// Todos created on the same calendar day as `now`, in `now`'s timezone
    pub fn today_bucket_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<&Todo> {
        let tz = now.timezone();
        let today = now.date_naive();
        self.iter()
            .filter(|t| t.created_at.with_timezone(&tz).date_naive() == today)
            .collect()
    }

    /// Todos created today in the local timezone
    pub fn today_bucket(&self) -> Vec<&Todo> {
        self.today_bucket_at(&Local::now())
    }

    pub fn priority_histogram(&self) -> PriorityHistogram {
        let mut histogram = PriorityHistogram::default();
        for todo in self.iter().filter(|t| !t.completed) {
            match todo.priority {
                Priority::High => histogram.high += 1,
                Priority::Medium => histogram.medium += 1,
                Priority::Low => histogram.low += 1,
            }
        }
        histogram
    }
}

/// Short Korean timestamp, e.g. `7월 6일 오후 09:05`
pub fn format_created_at<Tz: TimeZone>(created_at: &DateTime<Utc>, tz: &Tz) -> String {
    let local = created_at.with_timezone(tz);
    let (is_pm, hour) = local.hour12();
    format!(
        "{}월 {}일 {} {:02}:{:02}",
        local.month(),
        local.day(),
        if is_pm { "오후" } else { "오전" },
        hour,
        local.minute()
    )
}

/// `format_created_at` in the local timezone
pub fn format_created_at_local(created_at: &DateTime<Utc>) -> String {
    format_created_at(created_at, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{todo, with_priority};
    use chrono::FixedOffset;

    fn sample() -> TodoList {
        TodoList::from_records(vec![
            todo("1", "Write report", 1, false),
            todo("2", "Write email", 2, true),
            todo("3", "Buy milk", 3, false),
        ])
    }

    fn titles(todos: Vec<&Todo>) -> Vec<&str> {
        todos.into_iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let list = sample();
        assert_eq!(titles(list.filtered("write", StatusFilter::All)), vec!["Write email", "Write report"]);
        assert_eq!(titles(list.filtered("REPORT", StatusFilter::All)), vec!["Write report"]);
        assert!(list.filtered("nothing", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_empty_search_all_returns_everything_in_order() {
        let list = sample();
        let all: Vec<&Todo> = list.iter().collect();
        assert_eq!(list.filtered("", StatusFilter::All), all);
    }

    #[test]
    fn test_status_filters() {
        let list = sample();
        assert_eq!(titles(list.filtered("", StatusFilter::Active)), vec!["Buy milk", "Write report"]);
        assert_eq!(titles(list.filtered("write", StatusFilter::Completed)), vec!["Write email"]);
    }

    #[test]
    fn test_counts_and_progress() {
        let counts = sample().counts();
        assert_eq!(counts, Counts { total: 3, completed: 1, active: 2 });
        assert_eq!(counts.progress_percent(), 33);
        assert_eq!(TodoList::new().counts().progress_percent(), 0);
        assert_eq!(Counts { total: 3, completed: 2, active: 1 }.progress_percent(), 67);
    }

    #[test]
    fn test_priority_histogram_ignores_completed() {
        let list = TodoList::from_records(vec![
            with_priority(todo("1", "a", 1, false), Priority::High),
            with_priority(todo("2", "b", 2, true), Priority::High),
            with_priority(todo("3", "c", 3, false), Priority::Low),
        ]);
        let histogram = list.priority_histogram();
        assert_eq!(histogram, PriorityHistogram { high: 1, medium: 0, low: 1 });
        assert_eq!(histogram.get(Priority::Medium), 0);
    }

    #[test]
    fn test_today_bucket_uses_timezone_of_now() {
        // Fixtures are created 2025-07-06 09:0x UTC
        let list = sample();
        let utc = FixedOffset::east_opt(0).unwrap();
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        let honolulu = FixedOffset::west_opt(10 * 3600).unwrap();

        let now = utc.with_ymd_and_hms(2025, 7, 6, 23, 0, 0).unwrap();
        assert_eq!(list.today_bucket_at(&now).len(), 3);

        // 18:0x in Seoul, still July 6th
        let now = seoul.with_ymd_and_hms(2025, 7, 6, 23, 59, 0).unwrap();
        assert_eq!(list.today_bucket_at(&now).len(), 3);

        // 23:0x on July 5th in Honolulu
        let now = honolulu.with_ymd_and_hms(2025, 7, 6, 8, 0, 0).unwrap();
        assert!(list.today_bucket_at(&now).is_empty());
    }

    #[test]
    fn test_format_created_at() {
        let created_at = Utc.with_ymd_and_hms(2025, 7, 6, 3, 5, 0).unwrap();
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_created_at(&created_at, &seoul), "7월 6일 오후 12:05");

        let created_at = Utc.with_ymd_and_hms(2025, 12, 31, 20, 30, 0).unwrap();
        assert_eq!(format_created_at(&created_at, &seoul), "1월 1일 오전 05:30");
    }
}
