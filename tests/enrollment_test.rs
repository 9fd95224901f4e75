mod helpers;

use healthclub_backend::error::AppError;
use helpers::*;
use uuid::Uuid;

#[tokio::test]
async fn test_register_for_class() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    let session = schedule(&db, "Yoga", &fixtures.trainer, 1, "09:00", "10:00", None, Some(10)).await;

    let enrollment = db
        .state
        .enrollment
        .register_for_class(fixtures.member.id, session.id)
        .await
        .unwrap();

    assert_eq!(enrollment.member_id, fixtures.member.id);
    assert_eq!(enrollment.class_id, session.id);
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    // Plenty of room left; the duplicate check fires regardless of capacity
    let session = schedule(&db, "Yoga", &fixtures.trainer, 1, "09:00", "10:00", None, Some(10)).await;

    db.state
        .enrollment
        .register_for_class(fixtures.member.id, session.id)
        .await
        .unwrap();

    let again = db
        .state
        .enrollment
        .register_for_class(fixtures.member.id, session.id)
        .await;
    assert!(matches!(again.unwrap_err(), AppError::Duplicate(_)));
}

#[tokio::test]
async fn test_full_class_rejects_registration() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    let session = schedule(&db, "Yoga", &fixtures.trainer, 1, "09:00", "10:00", None, Some(2)).await;

    for (name, email) in [("A One", "one@club.test"), ("B Two", "two@club.test")] {
        let member = db
            .state
            .accounts
            .register_member(name, email, None, None, None, None)
            .await
            .unwrap();
        db.state
            .enrollment
            .register_for_class(member.id, session.id)
            .await
            .unwrap();
    }

    let third = db
        .state
        .enrollment
        .register_for_class(fixtures.member.id, session.id)
        .await;
    assert!(third.unwrap_err().is_capacity());
}

#[tokio::test]
async fn test_uncapped_class_accepts_everyone() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    let session = schedule(&db, "Park Run", &fixtures.trainer, 1, "09:00", "10:00", None, None).await;

    for i in 0..5 {
        let member = db
            .state
            .accounts
            .register_member(
                &format!("Member {}", i),
                &format!("member{}@club.test", i),
                None,
                None,
                None,
                None,
            )
            .await
            .unwrap();
        db.state
            .enrollment
            .register_for_class(member.id, session.id)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_registration_requires_existing_class_and_member() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    let no_class = db
        .state
        .enrollment
        .register_for_class(fixtures.member.id, Uuid::new_v4())
        .await;
    assert!(no_class.unwrap_err().is_not_found());

    give_availability(&db, &fixtures.trainer, 1, "08:00", "14:00").await;
    let session = schedule(&db, "Yoga", &fixtures.trainer, 1, "09:00", "10:00", None, None).await;

    let no_member = db
        .state
        .enrollment
        .register_for_class(Uuid::new_v4(), session.id)
        .await;
    assert!(no_member.unwrap_err().is_not_found());

    // Trainer accounts cannot enroll as members
    let trainer_enroll = db
        .state
        .enrollment
        .register_for_class(fixtures.trainer.id, session.id)
        .await;
    assert!(trainer_enroll.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_enrolled_classes_ordered_by_day_and_start() {
    let db = TestDatabase::new().await;
    let fixtures = TestFixtures::create(&db).await;

    give_availability(&db, &fixtures.trainer, 2, "06:00", "22:00").await;
    give_availability(&db, &fixtures.trainer, 5, "06:00", "22:00").await;

    let late = schedule(&db, "Evening Spin", &fixtures.trainer, 5, "18:00", "19:00", None, None).await;
    let early = schedule(&db, "Morning Yoga", &fixtures.trainer, 2, "07:00", "08:00", None, None).await;

    db.state
        .enrollment
        .register_for_class(fixtures.member.id, late.id)
        .await
        .unwrap();
    db.state
        .enrollment
        .register_for_class(fixtures.member.id, early.id)
        .await
        .unwrap();

    let enrolled = db
        .state
        .enrollment
        .enrolled_classes(fixtures.member.id)
        .await
        .unwrap();

    let names: Vec<_> = enrolled.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Morning Yoga", "Evening Spin"]);
}
