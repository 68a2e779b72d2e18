use chrono::NaiveDate;
use habitline_core::{
    visible_structure, FilterQuery, Tracker, TrackerCategory, TrackerFilter, TrackerRecord,
    TrackerType, Weekday, PINNED_CATEGORY_TITLE,
};
use std::collections::BTreeSet;

// Calendar anchors: 2024-10-01 is a Tuesday, 2024-10-02 a Wednesday,
// 2024-10-07 a Monday.
fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
}

const MONDAY: u32 = 7;
const TUESDAY: u32 = 1;
const WEDNESDAY: u32 = 2;

fn habit(name: &str, schedule: &[Weekday]) -> Tracker {
    Tracker::new(
        name,
        "#FD4C49",
        "🌱",
        schedule.iter().copied().collect(),
        TrackerType::Habit,
    )
}

fn irregular(name: &str) -> Tracker {
    Tracker::new(name, "#8D72E3", "🎯", BTreeSet::new(), TrackerType::Irregular)
}

fn query(selected: NaiveDate) -> FilterQuery {
    FilterQuery::for_date(selected, selected)
}

#[test]
fn habit_absent_on_unscheduled_weekday() {
    let categories = vec![TrackerCategory::new(
        "Health",
        vec![habit("Gym", &[Weekday::Monday, Weekday::Wednesday])],
    )];

    let visible = visible_structure(&categories, &[], &query(date(TUESDAY)));
    assert!(visible.is_empty());
}

#[test]
fn habit_visible_on_scheduled_weekday() {
    let categories = vec![TrackerCategory::new(
        "Health",
        vec![habit("Gym", &[Weekday::Monday, Weekday::Wednesday])],
    )];

    let visible = visible_structure(&categories, &[], &query(date(WEDNESDAY)));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Health");
    assert_eq!(visible[0].trackers[0].name, "Gym");
}

#[test]
fn irregular_is_visible_on_every_date() {
    let categories = vec![TrackerCategory::new("Errands", vec![irregular("Post office")])];

    for d in 1..=5 {
        let visible = visible_structure(&categories, &[], &query(date(d)));
        assert_eq!(visible.len(), 1, "expected visibility on day {d}");
    }
}

#[test]
fn output_is_deterministic_for_identical_inputs() {
    let categories = vec![
        TrackerCategory::new("Health", vec![habit("Gym", &[Weekday::Wednesday])]),
        TrackerCategory::new("Errands", vec![irregular("Post office")]),
    ];
    let records = vec![TrackerRecord::on_day(categories[0].trackers[0].id, date(WEDNESDAY))];
    let q = query(date(WEDNESDAY));

    let first = visible_structure(&categories, &records, &q);
    let second = visible_structure(&categories, &records, &q);
    assert_eq!(first, second);
}

#[test]
fn pinned_tracker_moves_to_synthetic_first_category() {
    let mut gym = habit("Gym", &[Weekday::Wednesday]);
    gym.is_pinned = true;
    let categories = vec![TrackerCategory::new(
        "Health",
        vec![gym, habit("Stretch", &[Weekday::Wednesday])],
    )];

    let visible = visible_structure(&categories, &[], &query(date(WEDNESDAY)));
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].title, PINNED_CATEGORY_TITLE);
    assert_eq!(visible[0].trackers[0].name, "Gym");
    // The pinned tracker no longer appears in its home category.
    assert_eq!(visible[1].title, "Health");
    assert_eq!(visible[1].trackers.len(), 1);
    assert_eq!(visible[1].trackers[0].name, "Stretch");
}

#[test]
fn pinned_habit_off_schedule_appears_nowhere() {
    let mut gym = habit("Gym", &[Weekday::Monday]);
    gym.is_pinned = true;
    let categories = vec![TrackerCategory::new("Health", vec![gym])];

    let visible = visible_structure(&categories, &[], &query(date(TUESDAY)));
    assert!(visible.is_empty());
}

#[test]
fn pinned_group_keeps_discovery_order() {
    let mut yoga = habit("Yoga", &[Weekday::Wednesday]);
    yoga.is_pinned = true;
    let mut email = irregular("Email zero");
    email.is_pinned = true;

    let categories = vec![
        TrackerCategory::new("Health", vec![yoga]),
        TrackerCategory::new("Work", vec![email]),
    ];

    let visible = visible_structure(&categories, &[], &query(date(WEDNESDAY)));
    assert_eq!(visible.len(), 1);
    let names: Vec<&str> = visible[0].trackers.iter().map(|t| t.name.as_str()).collect();
    // Discovery order, not alphabetical: "Email zero" would sort first.
    assert_eq!(names, ["Yoga", "Email zero"]);
}

#[test]
fn trackers_sort_alphabetically_within_category() {
    let categories = vec![TrackerCategory::new(
        "Errands",
        vec![irregular("Two"), irregular("One"), irregular("Three"), irregular("Four")],
    )];

    let visible = visible_structure(&categories, &[], &query(date(TUESDAY)));
    let names: Vec<&str> = visible[0].trackers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Four", "One", "Three", "Two"]);
}

#[test]
fn search_matches_case_insensitive_substring() {
    let categories = vec![TrackerCategory::new(
        "Errands",
        vec![irregular("One"), irregular("Two"), irregular("Three"), irregular("Four")],
    )];

    let mut q = query(date(TUESDAY));
    q.search_text = "e".to_string();

    let visible = visible_structure(&categories, &[], &q);
    let names: Vec<&str> = visible[0].trackers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["One", "Three"]);
}

#[test]
fn search_with_no_matches_yields_empty_structure() {
    let categories = vec![TrackerCategory::new("Errands", vec![irregular("One")])];

    let mut q = query(date(TUESDAY));
    q.search_text = "zzz".to_string();

    assert!(visible_structure(&categories, &[], &q).is_empty());
}

#[test]
fn completed_filter_keeps_only_trackers_done_on_selected_day() {
    let done = irregular("Done");
    let pending = irregular("Pending");
    let records = vec![TrackerRecord::on_day(done.id, date(TUESDAY))];
    let categories = vec![TrackerCategory::new("Errands", vec![done, pending])];

    let mut q = query(date(TUESDAY));
    q.filter = TrackerFilter::Completed;
    let visible = visible_structure(&categories, &records, &q);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].trackers.len(), 1);
    assert_eq!(visible[0].trackers[0].name, "Done");

    q.filter = TrackerFilter::Uncompleted;
    let visible = visible_structure(&categories, &records, &q);
    assert_eq!(visible[0].trackers.len(), 1);
    assert_eq!(visible[0].trackers[0].name, "Pending");
}

#[test]
fn completed_filter_prunes_emptied_categories() {
    let pending = irregular("Pending");
    let categories = vec![TrackerCategory::new("Errands", vec![pending])];

    let mut q = query(date(TUESDAY));
    q.filter = TrackerFilter::Completed;
    assert!(visible_structure(&categories, &[], &q).is_empty());
}

#[test]
fn today_filter_overrides_selected_date_for_schedule_match() {
    let categories = vec![TrackerCategory::new(
        "Health",
        vec![habit("Gym", &[Weekday::Monday])],
    )];

    // Selected a Tuesday while today is a Monday.
    let mut q = FilterQuery::for_date(date(TUESDAY), date(MONDAY));
    assert!(visible_structure(&categories, &[], &q).is_empty());

    q.filter = TrackerFilter::Today;
    let visible = visible_structure(&categories, &[], &q);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].trackers[0].name, "Gym");
}

#[test]
fn empty_input_yields_empty_structure() {
    assert!(visible_structure(&[], &[], &query(date(TUESDAY))).is_empty());
}
