use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a new user.
///
/// Expected: Ok with one row holding the given profile
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "fluffy".to_string(),
            global_name: Some("Fluffy".to_string()),
            avatar: Some("a_abcdef".to_string()),
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "fluffy");
    assert_eq!(user.global_name.as_deref(), Some("Fluffy"));
    assert_eq!(user.avatar.as_deref(), Some("a_abcdef"));
    assert_eq!(user.created_at, user.last_login_at);

    Ok(())
}

/// Tests that logging in again refreshes the profile instead of duplicating the user.
///
/// Expected: Ok with a single row, new name and avatar, original `created_at`
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(param(123456789, "old_name")).await?;

    let second = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "new_name".to_string(),
            global_name: Some("New".to_string()),
            avatar: Some("newhash".to_string()),
        })
        .await?;

    assert_eq!(second.name, "new_name");
    assert_eq!(second.global_name.as_deref(), Some("New"));
    assert_eq!(second.avatar.as_deref(), Some("newhash"));
    assert_eq!(second.created_at, first.created_at);
    assert!(second.last_login_at >= first.last_login_at);

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a cleared avatar is written back as NULL.
///
/// Expected: Ok with avatar None after second login
#[tokio::test]
async fn clears_removed_avatar() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        avatar: Some("hash".to_string()),
        ..param(42, "someone")
    })
    .await?;
    let user = repo.upsert(param(42, "someone")).await?;

    assert_eq!(user.avatar, None);

    Ok(())
}

/// Tests upserting different users keeps them separate.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn keeps_distinct_users_apart() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param(1, "one")).await?;
    repo.upsert(param(2, "two")).await?;

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
