//! Calendar page: the current month laid out by week.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use leptos::prelude::*;
use time::{Date, Month, OffsetDateTime};

use crate::util::clock;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Year and month containing `unix_ms`, in UTC.
pub(crate) fn current_month(unix_ms: i64) -> Option<(i32, Month)> {
    let now = OffsetDateTime::from_unix_timestamp_nanos(i128::from(unix_ms) * 1_000_000).ok()?;
    Some((now.year(), now.month()))
}

/// Day numbers for `month`, padded with `None` so that index 0 is a Sunday
/// and the length is a whole number of weeks.
pub(crate) fn month_grid(year: i32, month: Month) -> Vec<Option<u8>> {
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return Vec::new();
    };
    let mut cells = vec![None; usize::from(first.weekday().number_days_from_sunday())];
    cells.extend((1..=month.length(year)).map(Some));
    let trailing = (7 - cells.len() % 7) % 7;
    cells.extend(std::iter::repeat_n(None, trailing));
    cells
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let (title, cells) = match current_month(clock::now_ms()) {
        Some((year, month)) => (format!("{month} {year}"), month_grid(year, month)),
        None => (String::new(), Vec::new()),
    };

    view! {
        <div class="page calendar-page">
            <h2>"Calendar"</h2>
            <p class="page__subtitle">{title}</p>
            <div class="calendar-grid">
                {WEEKDAYS
                    .into_iter()
                    .map(|day| view! { <span class="calendar-grid__weekday">{day}</span> })
                    .collect_view()}
                {cells
                    .into_iter()
                    .map(|cell| {
                        view! {
                            <span class="calendar-grid__day">
                                {cell.map(|day| day.to_string()).unwrap_or_default()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
