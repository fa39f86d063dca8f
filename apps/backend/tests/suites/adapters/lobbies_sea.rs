use reversi_backend::adapters::lobbies_sea;
use reversi_backend::repos::LobbyStore;
use reversi_backend::AppError;

use crate::support::db::sqlite_store;

#[tokio::test]
async fn create_and_find_lobby() -> Result<(), AppError> {
    let store = sqlite_store().await?;

    let created = store.create_lobby("Friday night").await?;
    let found = store.find_lobby(created.id).await?;

    assert_eq!(found, Some(created.clone()));
    assert_eq!(created.title, "Friday night");
    Ok(())
}

#[tokio::test]
async fn missing_lobby_is_none() -> Result<(), AppError> {
    let store = sqlite_store().await?;

    assert!(store.find_lobby(12345).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn list_is_newest_first() -> Result<(), AppError> {
    let store = sqlite_store().await?;
    let first = lobbies_sea::create_lobby(store.connection(), "first").await?;
    let second = lobbies_sea::create_lobby(store.connection(), "second").await?;

    let ids: Vec<_> = store.list_lobbies().await?.into_iter().map(|l| l.id).collect();

    assert_eq!(ids, vec![second.id, first.id]);
    Ok(())
}
