//! Property tests for the derived lesson view.
//!
//! The view layer is pure, so it can be checked against a direct restatement
//! of its contract: the returned page is exactly the `(page-1)*n..page*n`
//! slice of the filtered collection, in original relative order.

use chrono::NaiveDate;
use course_state::{lesson_page, LessonFilter};
use entities::{Lesson, LessonStatus};
use proptest::prelude::*;

fn lesson(id: u64, title: String, status: LessonStatus) -> Lesson {
    Lesson {
        id,
        course_id: 1,
        creator_id: 10,
        title,
        status,
        publish_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        video_url: format!("https://videos.example.com/{id}"),
    }
}

fn status_strategy() -> impl Strategy<Value = LessonStatus> {
    prop_oneof![
        Just(LessonStatus::Draft),
        Just(LessonStatus::Published),
        Just(LessonStatus::Archived),
    ]
}

fn lessons_strategy() -> impl Strategy<Value = Vec<Lesson>> {
    prop::collection::vec(("[a-dA-D]{0,6}", status_strategy()), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (title, status))| lesson(i as u64 + 1, title, status))
            .collect()
    })
}

/// Direct restatement of the filter predicate.
fn reference_filter<'a>(
    lessons: &'a [Lesson],
    term: &str,
    status: Option<LessonStatus>,
) -> Vec<&'a Lesson> {
    lessons
        .iter()
        .filter(|l| status.is_none_or(|s| l.status == s))
        .filter(|l| term.is_empty() || l.title.to_lowercase().contains(&term.to_lowercase()))
        .collect()
}

proptest! {
    #[test]
    fn prop_page_is_exact_window_of_filtered_sequence(
        lessons in lessons_strategy(),
        term in "[a-dA-D]{0,3}",
        status in prop::option::of(status_strategy()),
        page in 1usize..6,
        page_size in 1usize..8,
    ) {
        let filter = LessonFilter {
            search_term: term.clone(),
            status,
            page,
            page_size,
        };
        let view = lesson_page(&lessons, &filter);

        let filtered = reference_filter(&lessons, &term, status);
        let start = (page - 1) * page_size;
        let expected: Vec<&Lesson> =
            filtered.iter().skip(start).take(page_size).copied().collect();

        prop_assert_eq!(&view.items, &expected);
        prop_assert_eq!(view.total, filtered.len());
        prop_assert_eq!(view.page_count, filtered.len().div_ceil(page_size));
    }

    #[test]
    fn prop_page_preserves_original_relative_order(
        lessons in lessons_strategy(),
        status in prop::option::of(status_strategy()),
        page in 1usize..4,
        page_size in 1usize..8,
    ) {
        let filter = LessonFilter {
            search_term: String::new(),
            status,
            page,
            page_size,
        };
        let view = lesson_page(&lessons, &filter);

        let ids: Vec<u64> = view.items.iter().map(|l| l.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        // Ids were assigned in collection order, so order preservation means
        // the page ids come out already sorted.
        prop_assert_eq!(ids, sorted);
    }

    #[test]
    fn prop_changing_filters_resets_page(
        page in 1usize..50,
        term in "[a-z]{0,6}",
        status in prop::option::of(status_strategy()),
    ) {
        let mut filter = LessonFilter { page, ..LessonFilter::default() };
        filter.set_search(term);
        prop_assert_eq!(filter.page, 1);

        filter.set_page(page);
        filter.set_status(status);
        prop_assert_eq!(filter.page, 1);
    }

    #[test]
    fn prop_view_is_deterministic(
        lessons in lessons_strategy(),
        term in "[a-dA-D]{0,3}",
        status in prop::option::of(status_strategy()),
        page in 1usize..6,
        page_size in 1usize..8,
    ) {
        let filter = LessonFilter { search_term: term, status, page, page_size };
        prop_assert_eq!(lesson_page(&lessons, &filter), lesson_page(&lessons, &filter));
    }
}
