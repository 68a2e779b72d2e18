use chrono::NaiveDate;
use habitline_core::db::open_db_in_memory;
use habitline_core::{
    CategoryRepository, CategoryService, RecordRepository, RecordService, ServiceError,
    SqliteCategoryRepository, SqliteRecordRepository, SqliteTrackerRepository, StoreError,
    Tracker, TrackerRecord, TrackerRepository, TrackerType, Weekday,
};
use std::collections::BTreeSet;
use uuid::Uuid;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
}

fn irregular(name: &str) -> Tracker {
    Tracker::new(name, "#8D72E3", "🎯", BTreeSet::new(), TrackerType::Irregular)
}

fn habit(name: &str, schedule: &[Weekday]) -> Tracker {
    Tracker::new(
        name,
        "#FD4C49",
        "🌱",
        schedule.iter().copied().collect(),
        TrackerType::Habit,
    )
}

#[test]
fn load_categories_sorts_titles_and_tracker_names() {
    let conn = open_db_in_memory().unwrap();
    let trackers = SqliteTrackerRepository::new(&conn);
    let categories = SqliteCategoryRepository::new(&conn);

    trackers.add_tracker(&irregular("Zoo visit"), "Leisure").unwrap();
    trackers.add_tracker(&irregular("Aquarium"), "Leisure").unwrap();
    trackers.add_tracker(&habit("Gym", &[Weekday::Monday]), "Fitness").unwrap();

    let loaded = categories.load_categories().unwrap();
    let titles: Vec<&str> = loaded.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Fitness", "Leisure"]);

    let leisure: Vec<&str> = loaded[1].trackers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(leisure, ["Aquarium", "Zoo visit"]);
}

#[test]
fn rename_category_cascades_to_trackers() {
    let conn = open_db_in_memory().unwrap();
    let trackers = SqliteTrackerRepository::new(&conn);
    let categories = SqliteCategoryRepository::new(&conn);

    let tracker = irregular("Post office");
    trackers.add_tracker(&tracker, "Errands").unwrap();

    categories.edit_category("Errands", "Chores").unwrap();

    let loaded = categories.load_categories().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Chores");
    assert_eq!(loaded[0].trackers[0].id, tracker.id);
}

#[test]
fn rename_missing_category_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);

    let err = categories.edit_category("Ghost", "Chores").unwrap_err();
    assert!(matches!(err, StoreError::CategoryNotFound(title) if title == "Ghost"));
}

#[test]
fn delete_category_cascades_to_trackers_and_records() {
    let conn = open_db_in_memory().unwrap();
    let trackers = SqliteTrackerRepository::new(&conn);
    let categories = SqliteCategoryRepository::new(&conn);
    let records = SqliteRecordRepository::new(&conn);

    let tracker = irregular("Post office");
    trackers.add_tracker(&tracker, "Errands").unwrap();
    records
        .add_record(&TrackerRecord::on_day(tracker.id, date(1)))
        .unwrap();

    categories.delete_category("Errands").unwrap();

    assert!(categories.load_categories().unwrap().is_empty());
    assert!(trackers.load_trackers().unwrap().is_empty());
    assert!(records.load_records().unwrap().is_empty());
}

#[test]
fn category_service_rejects_duplicates_and_blank_titles() {
    let conn = open_db_in_memory().unwrap();
    let service = CategoryService::new(SqliteCategoryRepository::new(&conn));

    service.create_category("Health").unwrap();

    let err = service.create_category("Health").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::DuplicateCategoryTitle(title) if title == "Health"
    ));

    let err = service.create_category("   ").unwrap_err();
    assert!(matches!(err, ServiceError::BlankCategoryTitle));
}

#[test]
fn category_service_rejects_rename_onto_existing_title() {
    let conn = open_db_in_memory().unwrap();
    let service = CategoryService::new(SqliteCategoryRepository::new(&conn));

    service.create_category("Health").unwrap();
    service.create_category("Work").unwrap();

    let err = service.rename_category("Work", "Health").unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateCategoryTitle(_)));
}

#[test]
fn duplicate_marks_for_the_same_day_collapse_to_one_record() {
    let conn = open_db_in_memory().unwrap();
    let trackers = SqliteTrackerRepository::new(&conn);
    let records = SqliteRecordRepository::new(&conn);

    let tracker = irregular("Post office");
    trackers.add_tracker(&tracker, "Errands").unwrap();

    let morning = date(1).and_hms_opt(8, 0, 0).unwrap();
    let evening = date(1).and_hms_opt(20, 15, 0).unwrap();
    records
        .add_record(&TrackerRecord::new(tracker.id, morning))
        .unwrap();
    records
        .add_record(&TrackerRecord::new(tracker.id, evening))
        .unwrap();

    let loaded = records.load_records().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].date, morning);
}

#[test]
fn delete_record_matches_by_day_not_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let trackers = SqliteTrackerRepository::new(&conn);
    let records = SqliteRecordRepository::new(&conn);

    let tracker = irregular("Post office");
    trackers.add_tracker(&tracker, "Errands").unwrap();
    records
        .add_record(&TrackerRecord::new(
            tracker.id,
            date(1).and_hms_opt(8, 0, 0).unwrap(),
        ))
        .unwrap();

    records.delete_record(tracker.id, date(1)).unwrap();
    assert!(records.load_records().unwrap().is_empty());
}

#[test]
fn delete_missing_record_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let records = SqliteRecordRepository::new(&conn);

    let tracker_id = Uuid::new_v4();
    let err = records.delete_record(tracker_id, date(1)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::RecordNotFound { tracker_id: id, .. } if id == tracker_id
    ));
}

#[test]
fn record_service_rejects_future_dates_before_persisting() {
    let conn = open_db_in_memory().unwrap();
    let trackers = SqliteTrackerRepository::new(&conn);
    let service = RecordService::new(SqliteRecordRepository::new(&conn));

    let tracker = irregular("Post office");
    trackers.add_tracker(&tracker, "Errands").unwrap();

    let now = date(2).and_hms_opt(12, 0, 0).unwrap();
    let tomorrow = date(3).and_hms_opt(9, 0, 0).unwrap();

    let err = service.mark_completed(tracker.id, tomorrow, now).unwrap_err();
    assert!(matches!(err, ServiceError::FutureCompletionDate { .. }));
    assert!(service.load_records().unwrap().is_empty());

    service.mark_completed(tracker.id, now, now).unwrap();
    assert_eq!(service.load_records().unwrap().len(), 1);

    service.unmark_completed(tracker.id, date(2)).unwrap();
    assert!(service.load_records().unwrap().is_empty());
}
