use chrono::NaiveDate;
use habitline_core::{can_mark, completion_count, is_completed, TrackerRecord};
use uuid::Uuid;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
}

#[test]
fn is_completed_matches_by_calendar_day_not_timestamp() {
    let tracker_id = Uuid::new_v4();
    let records = vec![TrackerRecord::new(
        tracker_id,
        date(1).and_hms_opt(8, 30, 0).unwrap(),
    )];

    assert!(is_completed(&records, tracker_id, date(1)));
    assert!(!is_completed(&records, tracker_id, date(2)));
    assert!(!is_completed(&records, Uuid::new_v4(), date(1)));
}

#[test]
fn completion_count_spans_all_days() {
    let tracker_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();
    let records = vec![
        TrackerRecord::on_day(tracker_id, date(1)),
        TrackerRecord::on_day(tracker_id, date(2)),
        TrackerRecord::on_day(tracker_id, date(4)),
        TrackerRecord::on_day(other_id, date(1)),
    ];

    assert_eq!(completion_count(&records, tracker_id), 3);
    assert_eq!(completion_count(&records, other_id), 1);
    assert_eq!(completion_count(&records, Uuid::new_v4()), 0);
}

#[test]
fn can_mark_rejects_tomorrow_and_accepts_today_and_past() {
    let now = date(2).and_hms_opt(12, 0, 0).unwrap();

    let tomorrow = date(3).and_hms_opt(0, 0, 1).unwrap();
    assert!(!can_mark(tomorrow, now));

    // Later time on the same calendar day is still markable.
    let tonight = date(2).and_hms_opt(23, 59, 59).unwrap();
    assert!(can_mark(tonight, now));

    let yesterday = date(1).and_hms_opt(19, 0, 0).unwrap();
    assert!(can_mark(yesterday, now));
}
