//! The listing filter pipeline: criteria in, visible subset out.
//!
//! Pure over its inputs. Every stage copies; the fetched array and its
//! elements are never mutated, so memoized views can compare by value.

use chrono::{DateTime, Utc};

use crate::domain::a001_cleaner::Cleaner;
use crate::domain::a002_job::Job;
use crate::enums::ExperienceBucket;

/// Sort direction over the derived created-at timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Original fetch order.
    #[default]
    None,
    /// Oldest first.
    Asc,
    /// Newest first.
    Des,
}

impl SortOrder {
    /// Parse the select-box value ("asc" / "des" / anything else).
    pub fn from_code(code: &str) -> Self {
        match code {
            "asc" => SortOrder::Asc,
            "des" => SortOrder::Des,
            _ => SortOrder::None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::None => "",
            SortOrder::Asc => "asc",
            SortOrder::Des => "des",
        }
    }
}

/// Visible slice of the filtered list. `end == 0` means no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn all() -> Self {
        PageWindow { start: 0, end: 0 }
    }

    pub fn first(per_page: usize) -> Self {
        PageWindow { start: 0, end: per_page }
    }

    pub fn is_unbounded(&self) -> bool {
        self.end == 0
    }

    /// Rows the window can hold. Zero when unbounded.
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Shift one page forward. Unbounded windows do not move.
    pub fn next(&self) -> Self {
        if self.is_unbounded() {
            return *self;
        }
        PageWindow {
            start: self.end,
            end: self.end + self.size(),
        }
    }

    /// Shift one page back, clamped at the first page.
    pub fn prev(&self) -> Self {
        if self.is_unbounded() {
            return *self;
        }
        let size = self.size();
        PageWindow {
            start: self.start.saturating_sub(size),
            end: self.start.max(size),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub keyword: String,
    pub location: String,
    pub experience: Vec<ExperienceBucket>,
    pub sort: SortOrder,
    pub per_page: PageWindow,
}

impl FilterCriteria {
    /// Number of active narrowing filters, for the filter-panel badge.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.keyword.trim().is_empty() {
            count += 1;
        }
        if !self.location.trim().is_empty() {
            count += 1;
        }
        if !self.experience.is_empty() {
            count += 1;
        }
        count
    }

    pub fn clear(&mut self) {
        *self = FilterCriteria {
            per_page: self.per_page,
            ..FilterCriteria::default()
        };
    }
}

/// Listing row the pipeline can filter. Implemented by cleaners and jobs.
pub trait FilterItem {
    /// Fields matched by the keyword filter (OR across fields).
    fn keyword_fields(&self) -> Vec<&str>;
    fn location_field(&self) -> &str;
    /// Continuous experience value, `None` when the filter does not apply
    /// to this entity (such rows always pass the bucket test).
    fn years_experience(&self) -> Option<f64>;
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

impl FilterItem for Cleaner {
    fn keyword_fields(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.as_str()).collect()
    }

    fn location_field(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    fn years_experience(&self) -> Option<f64> {
        Some(self.years_experience)
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl FilterItem for Job {
    fn keyword_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.title.as_str()];
        fields.extend(self.services.iter().map(|s| s.as_str()));
        fields
    }

    fn location_field(&self) -> &str {
        &self.location
    }

    fn years_experience(&self) -> Option<f64> {
        None
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

fn keyword_matches<T: FilterItem>(item: &T, name: &str, keyword: &str) -> bool {
    if keyword.trim().is_empty() {
        return true;
    }
    let needle = keyword.to_lowercase();
    if name.to_lowercase().contains(&needle) {
        return true;
    }
    item.keyword_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn location_matches<T: FilterItem>(item: &T, location: &str) -> bool {
    if location.trim().is_empty() {
        return true;
    }
    item.location_field()
        .to_lowercase()
        .contains(&location.to_lowercase())
}

fn experience_matches<T: FilterItem>(item: &T, buckets: &[ExperienceBucket]) -> bool {
    if buckets.is_empty() {
        return true;
    }
    match item.years_experience() {
        Some(years) => buckets.contains(&ExperienceBucket::from_years(years)),
        None => true,
    }
}

/// Run the pipeline: keyword, location, experience buckets, sort, window.
///
/// Sorting is stable over the fetch order, so rows with equal timestamps
/// keep their original relative order in both directions; this is the
/// tie-break contract list pages rely on for deterministic rendering.
/// Rows without a timestamp sort as oldest.
pub fn apply<T, F>(items: &[T], criteria: &FilterCriteria, display_name: F) -> Vec<T>
where
    T: FilterItem + Clone,
    F: Fn(&T) -> String,
{
    let mut visible: Vec<T> = items
        .iter()
        .filter(|item| keyword_matches(*item, &display_name(item), &criteria.keyword))
        .filter(|item| location_matches(*item, &criteria.location))
        .filter(|item| experience_matches(*item, &criteria.experience))
        .cloned()
        .collect();

    match criteria.sort {
        SortOrder::None => {}
        SortOrder::Asc => visible.sort_by_key(|item| item.created_at()),
        SortOrder::Des => {
            visible.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        }
    }

    let start = criteria.per_page.start.min(visible.len());
    let end = if criteria.per_page.is_unbounded() {
        visible.len()
    } else {
        criteria.per_page.end.min(visible.len())
    };
    visible[start..start.max(end)].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cleaner(id: i64, name: &str, years: f64, minute: u32) -> Cleaner {
        let mut cleaner = Cleaner {
            id,
            years_experience: years,
            services: vec!["deep-clean".into()],
            location: Some("Cambridge, UK".into()),
            created_at: Some(Utc.with_ymd_and_hms(2025, 1, 5, 10, minute, 0).unwrap()),
            ..Cleaner::default()
        };
        cleaner.flat.name = Some(name.to_string());
        cleaner
    }

    fn names(items: &[Cleaner]) -> Vec<String> {
        items.iter().map(|c| c.display_name()).collect()
    }

    fn run(items: &[Cleaner], criteria: &FilterCriteria) -> Vec<Cleaner> {
        apply(items, criteria, |c| c.display_name())
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let items = vec![cleaner(1, "Ana", 0.5, 0), cleaner(2, "Bo", 6.0, 1)];
        let out = run(&items, &FilterCriteria::default());
        assert_eq!(names(&out), names(&items));
    }

    #[test]
    fn test_empty_input() {
        let out = run(&[], &FilterCriteria {
            keyword: "x".into(),
            ..FilterCriteria::default()
        });
        assert!(out.is_empty());
    }

    #[test]
    fn test_keyword_or_across_name_and_services() {
        let items = vec![cleaner(1, "Ana", 0.5, 0), cleaner(2, "Bo", 6.0, 1)];
        let by_name = run(&items, &FilterCriteria {
            keyword: "ANA".into(),
            ..FilterCriteria::default()
        });
        assert_eq!(names(&by_name), vec!["Ana"]);

        let by_service = run(&items, &FilterCriteria {
            keyword: "deep".into(),
            ..FilterCriteria::default()
        });
        assert_eq!(by_service.len(), 2);
    }

    #[test]
    fn test_location_substring_case_insensitive() {
        let items = vec![cleaner(1, "Ana", 0.5, 0)];
        let hit = run(&items, &FilterCriteria {
            location: "cambridge".into(),
            ..FilterCriteria::default()
        });
        assert_eq!(hit.len(), 1);

        let miss = run(&items, &FilterCriteria {
            location: "Oxford".into(),
            ..FilterCriteria::default()
        });
        assert!(miss.is_empty());
    }

    #[test]
    fn test_bucket_filter_excludes_before_sort() {
        // Ana (0.5y, older) kept, Bo (6y, newer) excluded by bucket even
        // under descending sort
        let items = vec![cleaner(1, "Ana", 0.5, 0), cleaner(2, "Bo", 6.0, 1)];
        let out = run(&items, &FilterCriteria {
            experience: vec![ExperienceBucket::EntryLevel],
            sort: SortOrder::Des,
            ..FilterCriteria::default()
        });
        assert_eq!(names(&out), vec!["Ana"]);
    }

    #[test]
    fn test_bucket_membership_exact() {
        let items = vec![
            cleaner(1, "A", 0.0, 0),
            cleaner(2, "B", 1.0, 1),
            cleaner(3, "C", 5.0, 2),
        ];
        let out = run(&items, &FilterCriteria {
            experience: vec![ExperienceBucket::EntryLevel, ExperienceBucket::FiveToTen],
            ..FilterCriteria::default()
        });
        assert_eq!(names(&out), vec!["A", "C"]);
    }

    #[test]
    fn test_sort_directions_reverse_distinct_timestamps() {
        let items = vec![cleaner(1, "Old", 1.0, 0), cleaner(2, "New", 1.0, 5)];
        let asc = run(&items, &FilterCriteria {
            sort: SortOrder::Asc,
            ..FilterCriteria::default()
        });
        assert_eq!(names(&asc), vec!["Old", "New"]);

        let des = run(&items, &FilterCriteria {
            sort: SortOrder::Des,
            ..FilterCriteria::default()
        });
        assert_eq!(names(&des), vec!["New", "Old"]);
    }

    #[test]
    fn test_timestamp_ties_keep_fetch_order_both_directions() {
        let items = vec![cleaner(1, "First", 1.0, 3), cleaner(2, "Second", 1.0, 3)];
        for sort in [SortOrder::Asc, SortOrder::Des] {
            let out = run(&items, &FilterCriteria {
                sort,
                ..FilterCriteria::default()
            });
            assert_eq!(names(&out), vec!["First", "Second"]);
        }
    }

    #[test]
    fn test_window_zero_end_means_all() {
        let items: Vec<Cleaner> =
            (0..12).map(|i| cleaner(i, &format!("C{}", i), 1.0, i as u32)).collect();
        let all = run(&items, &FilterCriteria {
            per_page: PageWindow { start: 0, end: 0 },
            ..FilterCriteria::default()
        });
        assert_eq!(all.len(), 12);

        let page = run(&items, &FilterCriteria {
            per_page: PageWindow { start: 5, end: 10 },
            ..FilterCriteria::default()
        });
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].id, 5);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let items = vec![cleaner(1, "Ana", 1.0, 0)];
        let out = run(&items, &FilterCriteria {
            per_page: PageWindow { start: 5, end: 10 },
            ..FilterCriteria::default()
        });
        assert!(out.is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let items = vec![cleaner(2, "B", 1.0, 5), cleaner(1, "A", 1.0, 0)];
        let before = names(&items);
        let _ = run(&items, &FilterCriteria {
            sort: SortOrder::Asc,
            ..FilterCriteria::default()
        });
        assert_eq!(names(&items), before);
    }

    #[test]
    fn test_window_paging_forward_and_back() {
        let page = PageWindow::first(10);
        assert_eq!(page.next(), PageWindow { start: 10, end: 20 });
        assert_eq!(page.next().next(), PageWindow { start: 20, end: 30 });
        assert_eq!(page.next().prev(), page);
        // first page clamps instead of going negative
        assert_eq!(page.prev(), page);
        // unbounded windows ignore paging
        assert_eq!(PageWindow::all().next(), PageWindow::all());
        assert_eq!(PageWindow::all().prev(), PageWindow::all());
    }

    #[test]
    fn test_second_page_slices_offset_rows() {
        let items: Vec<Cleaner> =
            (0..7).map(|i| cleaner(i, &format!("C{}", i), 1.0, i as u32)).collect();
        let out = run(&items, &FilterCriteria {
            per_page: PageWindow::first(5).next(),
            ..FilterCriteria::default()
        });
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 5);
    }

    #[test]
    fn test_active_count_and_clear() {
        let mut criteria = FilterCriteria {
            keyword: "deep".into(),
            location: "cam".into(),
            experience: vec![ExperienceBucket::TenPlus],
            sort: SortOrder::Des,
            per_page: PageWindow::first(10),
        };
        assert_eq!(criteria.active_count(), 3);
        criteria.clear();
        assert_eq!(criteria.active_count(), 0);
        // per-page survives a clear, sort resets
        assert_eq!(criteria.per_page, PageWindow::first(10));
        assert_eq!(criteria.sort, SortOrder::None);
    }
}
