mod helpers;

use healthclub_backend::error::AppError;
use healthclub_backend::models::{ClassScheduleUpdate, ScheduleClassRequest};
use helpers::*;
use uuid::Uuid;

#[tokio::test]
async fn test_schedule_class_within_availability() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "12:00").await;

    let session = schedule(
        &db,
        "Morning Yoga",
        &fixtures.trainer,
        1,
        "09:00",
        "10:00",
        None,
        Some(15),
    )
    .await;

    assert_eq!(session.name, "Morning Yoga");
    assert_eq!(session.day_of_week, 1);
    assert_eq!(session.capacity, Some(15));
    assert_eq!(session.room_id, None);
}

#[tokio::test]
async fn test_schedule_requires_covering_window() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    // Window exists on Monday and partially on Tuesday morning
    give_availability(&db, &fixtures.trainer, 1, "08:00", "12:00").await;
    give_availability(&db, &fixtures.trainer, 2, "09:00", "10:00").await;

    // No window at all on Wednesday
    let wrong_day = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Spin".to_string(),
            trainer_id: fixtures.trainer.id,
            day_of_week: 3,
            start_time: t("09:00"),
            end_time: t("10:00"),
            room_id: None,
            capacity: None,
        })
        .await;
    assert!(wrong_day.unwrap_err().is_not_available());

    // Tuesday window only partially covers the requested slot
    let partial = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Spin".to_string(),
            trainer_id: fixtures.trainer.id,
            day_of_week: 2,
            start_time: t("09:30"),
            end_time: t("10:30"),
            room_id: None,
            capacity: None,
        })
        .await;
    assert!(partial.unwrap_err().is_not_available());
}

#[tokio::test]
async fn test_schedule_validates_slot_before_availability() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    let inverted = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Spin".to_string(),
            trainer_id: fixtures.trainer.id,
            day_of_week: 1,
            start_time: t("10:00"),
            end_time: t("09:00"),
            room_id: None,
            capacity: None,
        })
        .await;
    assert!(matches!(inverted.unwrap_err(), AppError::Validation(_)));

    let bad_day = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Spin".to_string(),
            trainer_id: fixtures.trainer.id,
            day_of_week: 9,
            start_time: t("09:00"),
            end_time: t("10:00"),
            room_id: None,
            capacity: None,
        })
        .await;
    assert!(matches!(bad_day.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_trainer_double_booking_rejected() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    schedule(&db, "Yoga", &fixtures.trainer, 1, "09:00", "10:00", None, None).await;

    let straddle = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Pilates".to_string(),
            trainer_id: fixtures.trainer.id,
            day_of_week: 1,
            start_time: t("09:30"),
            end_time: t("10:30"),
            room_id: None,
            capacity: None,
        })
        .await;
    assert!(straddle.unwrap_err().is_conflict());
}

#[tokio::test]
async fn test_back_to_back_classes_allowed() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    schedule(&db, "Yoga", &fixtures.trainer, 1, "09:00", "10:00", None, None).await;

    // [10:00, 11:00) starts exactly where the first class ends
    schedule(&db, "Pilates", &fixtures.trainer, 1, "10:00", "11:00", None, None).await;
}

#[tokio::test]
async fn test_room_double_booking_rejected() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    let other = db
        .state
        .accounts
        .register_trainer("Sam Coach", "sam@club.test")
        .await
        .unwrap();

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    give_availability(&db, &other, 1, "08:00", "14:00").await;

    schedule(
        &db,
        "Yoga",
        &fixtures.trainer,
        1,
        "09:00",
        "10:00",
        Some(fixtures.room.id),
        None,
    )
    .await;

    // Different trainer, same room, overlapping slot
    let clash = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Boxing".to_string(),
            trainer_id: other.id,
            day_of_week: 1,
            start_time: t("09:30"),
            end_time: t("10:30"),
            room_id: Some(fixtures.room.id),
            capacity: None,
        })
        .await;
    assert!(clash.unwrap_err().is_conflict());

    // Same room is free once the first class has ended
    db.state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Boxing".to_string(),
            trainer_id: other.id,
            day_of_week: 1,
            start_time: t("10:00"),
            end_time: t("11:00"),
            room_id: Some(fixtures.room.id),
            capacity: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_capacity_defaults_from_room() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;

    let session = schedule(
        &db,
        "Yoga",
        &fixtures.trainer,
        1,
        "09:00",
        "10:00",
        Some(fixtures.room.id),
        None,
    )
    .await;

    // Room "Studio A" holds 20
    assert_eq!(session.capacity, Some(20));
}

#[tokio::test]
async fn test_capacity_bounded_by_room() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;

    let result = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Yoga".to_string(),
            trainer_id: fixtures.trainer.id,
            day_of_week: 1,
            start_time: t("09:00"),
            end_time: t("10:00"),
            room_id: Some(fixtures.room.id),
            capacity: Some(25),
        })
        .await;
    assert!(result.unwrap_err().is_capacity());
}

#[tokio::test]
async fn test_schedule_rejects_unknown_trainer_and_room() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    let no_trainer = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Yoga".to_string(),
            trainer_id: Uuid::new_v4(),
            day_of_week: 1,
            start_time: t("09:00"),
            end_time: t("10:00"),
            room_id: None,
            capacity: None,
        })
        .await;
    assert!(no_trainer.unwrap_err().is_not_found());

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;

    let no_room = db
        .state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name: "Yoga".to_string(),
            trainer_id: fixtures.trainer.id,
            day_of_week: 1,
            start_time: t("09:00"),
            end_time: t("10:00"),
            room_id: Some(Uuid::new_v4()),
            capacity: None,
        })
        .await;
    assert!(no_room.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_reschedule_to_own_slot_succeeds() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    let session = schedule(
        &db,
        "Yoga",
        &fixtures.trainer,
        1,
        "09:00",
        "10:00",
        Some(fixtures.room.id),
        None,
    )
    .await;

    // Re-asserting the current slot must not trip over the session itself
    let updated = db
        .state
        .scheduling
        .reschedule_class(
            session.id,
            ClassScheduleUpdate {
                day_of_week: Some(1),
                start_time: Some(t("09:00")),
                end_time: Some(t("10:00")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, session.id);
    assert_eq!(updated.start_time, t("09:00"));
}

#[tokio::test]
async fn test_reschedule_merges_partial_fields() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    let session = schedule(
        &db,
        "Yoga",
        &fixtures.trainer,
        1,
        "09:00",
        "10:00",
        Some(fixtures.room.id),
        Some(10),
    )
    .await;

    // Only move the slot; everything else carries over
    let updated = db
        .state
        .scheduling
        .reschedule_class(
            session.id,
            ClassScheduleUpdate {
                start_time: Some(t("11:00")),
                end_time: Some(t("12:00")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Yoga");
    assert_eq!(updated.trainer_id, fixtures.trainer.id);
    assert_eq!(updated.room_id, Some(fixtures.room.id));
    assert_eq!(updated.capacity, Some(10));
    assert_eq!(updated.start_time, t("11:00"));
    assert_eq!(updated.end_time, t("12:00"));
}

#[tokio::test]
async fn test_reschedule_revalidates_merged_candidate() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    let yoga = schedule(&db, "Yoga", &fixtures.trainer, 1, "09:00", "10:00", None, None).await;
    let pilates =
        schedule(&db, "Pilates", &fixtures.trainer, 1, "11:00", "12:00", None, None).await;

    // Moving pilates onto yoga's slot conflicts
    let clash = db
        .state
        .scheduling
        .reschedule_class(
            pilates.id,
            ClassScheduleUpdate {
                start_time: Some(t("09:30")),
                end_time: Some(t("10:30")),
                ..Default::default()
            },
        )
        .await;
    assert!(clash.unwrap_err().is_conflict());

    // New end before carried-over start is malformed
    let inverted = db
        .state
        .scheduling
        .reschedule_class(
            yoga.id,
            ClassScheduleUpdate {
                end_time: Some(t("08:30")),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(inverted.unwrap_err(), AppError::Validation(_)));

    // Moving outside the declared availability fails
    let outside = db
        .state
        .scheduling
        .reschedule_class(
            yoga.id,
            ClassScheduleUpdate {
                start_time: Some(t("15:00")),
                end_time: Some(t("16:00")),
                ..Default::default()
            },
        )
        .await;
    assert!(outside.unwrap_err().is_not_available());
}

#[tokio::test]
async fn test_reschedule_missing_class() {
    let db = TestDatabase::new().await;
    TestFixtures::create(&db).await;

    let result = db
        .state
        .scheduling
        .reschedule_class(Uuid::new_v4(), ClassScheduleUpdate::default())
        .await;
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_reschedule_enforces_room_capacity() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    let session = schedule(
        &db,
        "Yoga",
        &fixtures.trainer,
        1,
        "09:00",
        "10:00",
        Some(fixtures.room.id),
        Some(10),
    )
    .await;

    // Raising the capacity above the room's bound is rejected on update too
    let result = db
        .state
        .scheduling
        .reschedule_class(
            session.id,
            ClassScheduleUpdate {
                capacity: Some(30),
                ..Default::default()
            },
        )
        .await;
    assert!(result.unwrap_err().is_capacity());
}

#[tokio::test]
async fn test_list_classes_ordering_is_stable() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "06:00", "22:00").await;
    give_availability(&db, &fixtures.trainer, 4, "06:00", "22:00").await;

    schedule(&db, "Evening Spin", &fixtures.trainer, 4, "18:00", "19:00", None, None).await;
    schedule(&db, "Morning Yoga", &fixtures.trainer, 1, "07:00", "08:00", None, None).await;
    schedule(&db, "Lunch HIIT", &fixtures.trainer, 1, "12:00", "13:00", None, None).await;

    let first = db.state.scheduling.list_classes().await.unwrap();
    let names: Vec<_> = first.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Morning Yoga", "Lunch HIIT", "Evening Spin"]);

    let second = db.state.scheduling.list_classes().await.unwrap();
    let names_again: Vec<_> = second.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, names_again);
}

#[tokio::test]
async fn test_room_names_are_unique() {
    let db = TestDatabase::new().await;
    TestFixtures::create(&db).await;

    let duplicate = db.state.scheduling.create_room("Studio A", None).await;
    assert!(matches!(duplicate.unwrap_err(), AppError::Duplicate(_)));

    let empty = db.state.scheduling.create_room("   ", None).await;
    assert!(matches!(empty.unwrap_err(), AppError::Validation(_)));
}
