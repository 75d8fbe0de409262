use super::*;
use crate::server::model::user::User;

/// Tests finding an existing user.
///
/// Expected: Ok(Some(User)) with the factory's profile
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .discord_id("987654321")
        .name("moderator")
        .global_name("Mod")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(987654321).await?.unwrap();

    assert_eq!(user.discord_id, 987654321);
    assert_eq!(user.name, created.name);
    assert_eq!(user.global_name.as_deref(), Some("Mod"));

    Ok(())
}

/// Tests looking up an unknown Discord id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_discord_id(1).await?.is_none());

    Ok(())
}

/// Tests that a corrupt id in the table is surfaced as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_non_numeric_stored_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let corrupt = factory::user::UserFactory::new(db)
        .discord_id("not-a-snowflake")
        .build()
        .await?;

    assert!(matches!(
        User::from_entity(corrupt),
        Err(AppError::InternalErr(_))
    ));

    Ok(())
}
