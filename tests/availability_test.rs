mod helpers;

use healthclub_backend::error::AppError;
use helpers::*;
use uuid::Uuid;

#[tokio::test]
async fn test_create_window_succeeds() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    let window = db
        .state
        .availability
        .create_window(fixtures.trainer.id, 1, t("08:00"), t("12:00"))
        .await
        .unwrap();

    assert_eq!(window.trainer_id, fixtures.trainer.id);
    assert_eq!(window.day_of_week, 1);
    assert_eq!(window.start_time, t("08:00"));
    assert_eq!(window.end_time, t("12:00"));
}

#[tokio::test]
async fn test_create_window_rejects_bad_times() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    let inverted = db
        .state
        .availability
        .create_window(fixtures.trainer.id, 1, t("12:00"), t("08:00"))
        .await;
    assert!(matches!(inverted.unwrap_err(), AppError::Validation(_)));

    let empty = db
        .state
        .availability
        .create_window(fixtures.trainer.id, 1, t("08:00"), t("08:00"))
        .await;
    assert!(matches!(empty.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_create_window_rejects_out_of_range_day() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    for day in [0, 8, -1] {
        let result = db
            .state
            .availability
            .create_window(fixtures.trainer.id, day, t("08:00"), t("12:00"))
            .await;
        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }
}

#[tokio::test]
async fn test_create_window_rejects_unknown_trainer() {
    let db = TestDatabase::new().await;
    TestFixtures::create(&db).await;

    let result = db
        .state
        .availability
        .create_window(Uuid::new_v4(), 1, t("08:00"), t("12:00"))
        .await;
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_members_cannot_declare_availability() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    let result = db
        .state
        .availability
        .create_window(fixtures.member.id, 1, t("08:00"), t("12:00"))
        .await;
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_overlapping_window_rejected() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 2, "09:00", "12:00").await;

    let overlap = db
        .state
        .availability
        .create_window(fixtures.trainer.id, 2, t("11:00"), t("14:00"))
        .await;
    assert!(overlap.unwrap_err().is_conflict());

    // Fully contained window also overlaps
    let contained = db
        .state
        .availability
        .create_window(fixtures.trainer.id, 2, t("10:00"), t("11:00"))
        .await;
    assert!(contained.unwrap_err().is_conflict());
}

#[tokio::test]
async fn test_adjacent_windows_allowed() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 2, "09:00", "12:00").await;

    // Back-to-back with the existing window on both sides
    db.state
        .availability
        .create_window(fixtures.trainer.id, 2, t("12:00"), t("15:00"))
        .await
        .unwrap();
    db.state
        .availability
        .create_window(fixtures.trainer.id, 2, t("07:00"), t("09:00"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_same_slot_on_other_day_or_trainer_allowed() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 2, "09:00", "12:00").await;

    // Same times, different day
    db.state
        .availability
        .create_window(fixtures.trainer.id, 3, t("09:00"), t("12:00"))
        .await
        .unwrap();

    // Same times, different trainer
    let other = db
        .state
        .accounts
        .register_trainer("Sam Coach", "sam@club.test")
        .await
        .unwrap();
    db.state
        .availability
        .create_window(other.id, 2, t("09:00"), t("12:00"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_windows_ordering_is_stable() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 5, "14:00", "16:00").await;
    give_availability(&db, &fixtures.trainer, 1, "09:00", "11:00").await;
    give_availability(&db, &fixtures.trainer, 5, "08:00", "10:00").await;

    let first = db
        .state
        .availability
        .list_windows(fixtures.trainer.id)
        .await
        .unwrap();

    let keys: Vec<_> = first.iter().map(|w| (w.day_of_week, w.start_time)).collect();
    assert_eq!(
        keys,
        vec![(1, t("09:00")), (5, t("08:00")), (5, t("14:00"))]
    );

    // Repeated listing without mutation returns the same order
    let second = db
        .state
        .availability
        .list_windows(fixtures.trainer.id)
        .await
        .unwrap();
    let second_keys: Vec<_> = second.iter().map(|w| (w.day_of_week, w.start_time)).collect();
    assert_eq!(keys, second_keys);
}

#[tokio::test]
async fn test_club_wide_overview_groups_by_trainer() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    let other = db
        .state
        .accounts
        .register_trainer("Sam Coach", "sam@club.test")
        .await
        .unwrap();

    give_availability(&db, &other, 1, "09:00", "11:00").await;
    give_availability(&db, &fixtures.trainer, 3, "10:00", "12:00").await;

    let all = db.state.availability.list_all().await.unwrap();
    assert_eq!(all.len(), 2);

    // Ordered by trainer name first: Alex before Sam
    assert_eq!(all[0].trainer_name.as_deref(), Some("Alex Coach"));
    assert_eq!(all[1].trainer_name.as_deref(), Some("Sam Coach"));
}
