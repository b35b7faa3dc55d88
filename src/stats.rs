//! Task Aggregator
//!
//! Pure derived-statistics over a task snapshot, feeding the analytics
//! charts and the stat cards. All bucketing compares local calendar days
//! and local hours, never UTC. Every function tolerates an empty snapshot
//! and returns a zeroed structure of the expected shape.

use chrono::{Duration, Local, NaiveDate, TimeZone, Timelike};

use crate::models::{Category, Task};

/// Display heuristic for the "not started" pie slice; not persisted config
pub const DAILY_TARGET: usize = 5;

/// First and last hour (inclusive) of the hourly productivity chart
pub const WORK_HOURS: (u32, u32) = (9, 17);

const HOUR_LABELS: [&str; 9] = [
    "9AM", "10AM", "11AM", "12PM", "1PM", "2PM", "3PM", "4PM", "5PM",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    /// Weekday short name ("Mon")
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBucket {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodayDistribution {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

/// Overall completion counts; `pending = total - completed`
pub fn totals(tasks: &[Task]) -> Totals {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    Totals {
        total,
        completed,
        pending: total - completed,
    }
}

/// One entry per configured category, in fixed order, zero counts included
pub fn by_category(tasks: &[Task]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let count = tasks.iter().filter(|t| t.category == category).count();
            (category, count)
        })
        .collect()
}

/// Completions per local calendar day over the 7 days ending at `today`,
/// oldest bucket first
pub fn weekly_completion(tasks: &[Task], today: NaiveDate) -> Vec<DayBucket> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let count = tasks
                .iter()
                .filter(|t| t.completed_at.and_then(local_date) == Some(day))
                .count();
            DayBucket {
                label: day.format("%a").to_string(),
                count,
            }
        })
        .collect()
}

/// Completion split of the tasks created `today`, padded with a fixed
/// daily target so the pie has a "not started" slice
pub fn today_distribution(tasks: &[Task], today: NaiveDate, daily_target: usize) -> TodayDistribution {
    let today_tasks: Vec<&Task> = tasks
        .iter()
        .filter(|t| local_date(t.timestamp) == Some(today))
        .collect();
    let total = today_tasks.len();
    let completed = today_tasks.iter().filter(|t| t.completed).count();
    TodayDistribution {
        completed,
        in_progress: total - completed,
        not_started: daily_target.saturating_sub(total),
    }
}

/// Completions of `today` bucketed by local hour, 9AM through 5PM.
/// Completions outside the window are dropped.
pub fn hourly_completion(tasks: &[Task], today: NaiveDate) -> Vec<HourBucket> {
    let mut counts = [0usize; 9];
    for task in tasks {
        let Some(completed_at) = task.completed_at else {
            continue;
        };
        if local_date(completed_at) != Some(today) {
            continue;
        }
        if let Some(hour) = local_hour(completed_at) {
            if (WORK_HOURS.0..=WORK_HOURS.1).contains(&hour) {
                counts[(hour - WORK_HOURS.0) as usize] += 1;
            }
        }
    }
    HOUR_LABELS
        .iter()
        .zip(counts)
        .map(|(&label, count)| HourBucket { label, count })
        .collect()
}

/// Local calendar day of an epoch-millisecond instant
pub fn local_date(ms: i64) -> Option<NaiveDate> {
    Local.timestamp_millis_opt(ms).single().map(|dt| dt.date_naive())
}

fn local_hour(ms: i64) -> Option<u32> {
    Local.timestamp_millis_opt(ms).single().map(|dt| dt.hour())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

pub fn current_hour() -> u32 {
    Local::now().hour()
}

/// Clock-time caption for record lists ("14:05")
pub fn time_label(ms: i64) -> String {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Date-and-time caption ("2026-08-30 14:05")
pub fn datetime_label(ms: i64) -> String {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Task};
    use chrono::{Datelike, Local, TimeZone};

    fn ms(date: NaiveDate, hour: u32, min: u32) -> i64 {
        Local
            .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, min, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn task(id: &str, category: Category, created: i64, completed_at: Option<i64>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            completed: completed_at.is_some(),
            timestamp: created,
            category,
            completed_at,
            user_id: None,
        }
    }

    fn sample_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    #[test]
    fn totals_sum_property() {
        let today = sample_day();
        let tasks = vec![
            task("a", Category::Work, ms(today, 9, 0), None),
            task("b", Category::Study, ms(today, 10, 0), Some(ms(today, 11, 0))),
            task("c", Category::Health, ms(today, 12, 0), None),
        ];
        let t = totals(&tasks);
        assert_eq!(t.total, 3);
        assert_eq!(t.completed + t.pending, t.total);
        assert_eq!(t.completed, 1);
    }

    #[test]
    fn totals_of_empty_snapshot_are_zero() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn by_category_keeps_fixed_order_and_zero_counts() {
        let today = sample_day();
        let tasks = vec![
            task("a", Category::Health, ms(today, 9, 0), None),
            task("b", Category::Health, ms(today, 9, 5), None),
            task("c", Category::Personal, ms(today, 9, 10), None),
        ];
        let counts = by_category(&tasks);
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(counts[0], (Category::Work, 0));
        assert_eq!(counts[1], (Category::Personal, 1));
        assert_eq!(counts[2], (Category::Study, 0));
        assert_eq!(counts[3], (Category::Health, 2));
    }

    #[test]
    fn weekly_has_seven_buckets_ending_today() {
        let today = sample_day();
        let yesterday = today - Duration::days(1);
        let tasks = vec![
            task("a", Category::Work, ms(yesterday, 8, 0), Some(ms(yesterday, 9, 0))),
            task("b", Category::Work, ms(today, 8, 0), Some(ms(today, 9, 0))),
            task("c", Category::Work, ms(today, 8, 5), Some(ms(today, 15, 0))),
            // completed 8 days ago, outside the window
            task(
                "d",
                Category::Work,
                ms(today - Duration::days(8), 8, 0),
                Some(ms(today - Duration::days(8), 9, 0)),
            ),
        ];
        let buckets = weekly_completion(&tasks, today);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[6].label, today.format("%a").to_string());
        assert_eq!(buckets[6].count, 2);
        assert_eq!(buckets[5].count, 1);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn weekly_of_empty_snapshot_is_zeroed() {
        let buckets = weekly_completion(&[], sample_day());
        assert_eq!(buckets.len(), 7);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn today_distribution_counts_only_todays_tasks() {
        let today = sample_day();
        let yesterday = today - Duration::days(1);
        let tasks = vec![
            task("a", Category::Work, ms(today, 9, 0), Some(ms(today, 10, 0))),
            task("b", Category::Work, ms(today, 9, 30), None),
            task("c", Category::Work, ms(yesterday, 9, 0), None),
        ];
        let dist = today_distribution(&tasks, today, DAILY_TARGET);
        assert_eq!(dist.completed, 1);
        assert_eq!(dist.in_progress, 1);
        assert_eq!(dist.not_started, 3);
    }

    #[test]
    fn today_distribution_of_empty_snapshot_is_all_target() {
        let dist = today_distribution(&[], sample_day(), DAILY_TARGET);
        assert_eq!(dist.completed, 0);
        assert_eq!(dist.in_progress, 0);
        assert_eq!(dist.not_started, DAILY_TARGET);
    }

    #[test]
    fn today_distribution_target_never_goes_negative() {
        let today = sample_day();
        let tasks: Vec<Task> = (0..7u32)
            .map(|i| task(&format!("t{}", i), Category::Work, ms(today, 9, i), None))
            .collect();
        let dist = today_distribution(&tasks, today, DAILY_TARGET);
        assert_eq!(dist.not_started, 0);
        assert_eq!(dist.in_progress, 7);
    }

    #[test]
    fn hourly_has_nine_buckets_and_drops_out_of_window() {
        let today = sample_day();
        let tasks = vec![
            task("a", Category::Work, ms(today, 8, 0), Some(ms(today, 9, 15))),
            task("b", Category::Work, ms(today, 8, 0), Some(ms(today, 9, 45))),
            task("c", Category::Work, ms(today, 8, 0), Some(ms(today, 17, 30))),
            // 7AM and 8PM fall outside the 9-17 window
            task("d", Category::Work, ms(today, 6, 0), Some(ms(today, 7, 0))),
            task("e", Category::Work, ms(today, 6, 0), Some(ms(today, 20, 0))),
        ];
        let buckets = hourly_completion(&tasks, today);
        assert_eq!(buckets.len(), 9);
        assert_eq!(buckets[0].label, "9AM");
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[8].label, "5PM");
        assert_eq!(buckets[8].count, 1);

        let completed_today = tasks
            .iter()
            .filter(|t| t.completed_at.and_then(local_date) == Some(today))
            .count();
        assert!(buckets.iter().map(|b| b.count).sum::<usize>() <= completed_today);
    }

    #[test]
    fn hourly_of_empty_snapshot_is_zeroed() {
        let buckets = hourly_completion(&[], sample_day());
        assert_eq!(buckets.len(), 9);
        assert!(buckets.iter().all(|b| b.count == 0));
    }
}
