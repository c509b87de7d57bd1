//! Reporting: pure derivations from the attendance collection.
//! Nothing in this module mutates the store.

use crate::models::AttendanceRecord;

/// Fixed page size of the history listing.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub approved: usize,
    pub unapproved: usize,
}

pub fn summarize(records: &[AttendanceRecord]) -> ReportSummary {
    let total = records.len();
    let approved = records.iter().filter(|r| r.approved).count();
    ReportSummary {
        total,
        approved,
        unapproved: total - approved,
    }
}

/// Canonical display order: descending by timestamp, most recent first.
/// The sort is stable, so same-instant records keep their insertion order.
pub fn sort_desc(records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out
}

pub fn total_pages(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// The 1-based `page` slice of an already-sorted sequence. Out-of-range pages
/// yield an empty slice.
pub fn page_slice<T>(sorted: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1) * PAGE_SIZE;
    if start >= sorted.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(sorted.len());
    &sorted[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// The page-number bar: always shows page 1, the last page and the pages
/// within 1 of the current page; every other run collapses to one ellipsis.
pub fn page_bar(current: usize, pages: usize) -> Vec<PageItem> {
    let mut out = Vec::new();
    for p in 1..=pages {
        let visible = p == 1 || p == pages || p.abs_diff(current) <= 1;
        if visible {
            out.push(PageItem::Page(p));
        } else if out.last() != Some(&PageItem::Ellipsis) {
            out.push(PageItem::Ellipsis);
        }
    }
    out
}

/// One row of the monthly hours chart.
#[derive(Debug, Clone, Copy)]
pub struct MonthlyHours {
    pub month: &'static str,
    pub total_hours: u32,
    pub expected_hours: u32,
}

/// Static sample data for the monthly chart. Placeholder: these figures are
/// not derived from the record collection yet.
pub fn sample_monthly_hours() -> Vec<MonthlyHours> {
    vec![
        MonthlyHours { month: "January", total_hours: 168, expected_hours: 176 },
        MonthlyHours { month: "February", total_hours: 160, expected_hours: 160 },
        MonthlyHours { month: "March", total_hours: 184, expected_hours: 176 },
        MonthlyHours { month: "April", total_hours: 170, expected_hours: 168 },
        MonthlyHours { month: "May", total_hours: 172, expected_hours: 176 },
        MonthlyHours { month: "June", total_hours: 168, expected_hours: 168 },
    ]
}
