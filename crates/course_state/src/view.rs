//! Derived views over the cached lesson collection.
//!
//! Pure filtering and pagination; no I/O. Given the same lessons and filter,
//! the output is always the same, preserving the original relative order of
//! the collection.

use entities::{Lesson, LessonStatus};
use serde::{Deserialize, Serialize};

/// Default number of lessons per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Filter and pagination state over a lesson collection.
///
/// The fields are open, but the mutators implement the view contract:
/// changing the search term or the status filter resets the page to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonFilter {
    /// Case-insensitive substring match on the title; empty matches all.
    pub search_term: String,
    /// Exact status match; `None` matches all.
    pub status: Option<LessonStatus>,
    /// 1-based page number.
    pub page: usize,
    /// Lessons per page, at least 1.
    pub page_size: usize,
}

impl Default for LessonFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl LessonFilter {
    /// Sets the title search term and resets to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Sets the status filter and resets to the first page.
    pub fn set_status(&mut self, status: Option<LessonStatus>) {
        self.status = status;
        self.page = 1;
    }

    /// Moves to the given page, clamping to at least 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Whether a lesson passes both filter predicates.
    fn matches(&self, lesson: &Lesson) -> bool {
        let status_match = self.status.is_none_or(|status| lesson.status == status);
        let search_match = self.search_term.is_empty()
            || lesson
                .title
                .to_lowercase()
                .contains(&self.search_term.to_lowercase());
        status_match && search_match
    }
}

/// One visible page of a filtered lesson collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonView<'a> {
    /// The lessons on the current page, in original relative order.
    pub items: Vec<&'a Lesson>,
    /// How many lessons pass the filter across all pages.
    pub total: usize,
    /// The 1-based page this view shows.
    pub page: usize,
    /// Total number of pages for the filtered collection.
    pub page_count: usize,
}

/// Derives the visible page of a lesson collection under a filter.
pub fn lesson_page<'a>(lessons: &'a [Lesson], filter: &LessonFilter) -> LessonView<'a> {
    let page_size = filter.page_size.max(1);
    let filtered: Vec<&Lesson> = lessons.iter().filter(|l| filter.matches(l)).collect();
    let total = filtered.len();
    let page_count = total.div_ceil(page_size);

    let start = (filter.page.max(1) - 1) * page_size;
    let items = filtered.into_iter().skip(start).take(page_size).collect();

    LessonView {
        items,
        total,
        page: filter.page.max(1),
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn lesson(id: u64, title: &str, status: LessonStatus) -> Lesson {
        Lesson {
            id,
            course_id: 1,
            creator_id: 10,
            title: title.to_string(),
            status,
            publish_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            video_url: format!("https://videos.example.com/{id}"),
        }
    }

    #[test]
    fn test_status_filter_matches_exactly() {
        let lessons = vec![
            lesson(1, "Intro", LessonStatus::Draft),
            lesson(2, "Advanced", LessonStatus::Published),
        ];

        let mut filter = LessonFilter::default();
        filter.set_status(Some(LessonStatus::Published));

        let view = lesson_page(&lessons, &filter);
        assert_eq!(view.total, 1);
        assert_eq!(view.items[0].title, "Advanced");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let lessons = vec![
            lesson(1, "Ownership and Borrowing", LessonStatus::Draft),
            lesson(2, "Lifetimes", LessonStatus::Draft),
        ];

        let mut filter = LessonFilter::default();
        filter.set_search("OWNER");

        let view = lesson_page(&lessons, &filter);
        assert_eq!(view.total, 1);
        assert_eq!(view.items[0].id, 1);
    }

    #[test]
    fn test_pagination_windows_in_order() {
        let lessons: Vec<Lesson> = (1..=12)
            .map(|id| lesson(id, &format!("Lesson {id}"), LessonStatus::Draft))
            .collect();

        let mut filter = LessonFilter::default();
        filter.set_page(3);

        let view = lesson_page(&lessons, &filter);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.total, 12);
        assert_eq!(view.items.iter().map(|l| l.id).collect::<Vec<_>>(), vec![11, 12]);
    }

    #[test]
    fn test_changing_filters_resets_page() {
        let mut filter = LessonFilter {
            page: 4,
            ..LessonFilter::default()
        };
        filter.set_search("intro");
        assert_eq!(filter.page, 1);

        filter.set_page(4);
        filter.set_status(Some(LessonStatus::Archived));
        assert_eq!(filter.page, 1);
    }

    #[test]
    fn test_empty_collection_has_no_pages() {
        let view = lesson_page(&[], &LessonFilter::default());
        assert!(view.items.is_empty());
        assert_eq!(view.total, 0);
        assert_eq!(view.page_count, 0);
    }
}
