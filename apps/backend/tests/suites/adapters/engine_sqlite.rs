//! Full engine over the SeaORM store.

use std::sync::Arc;

use reversi_backend::domain::scoring::grid_from_codes;
use reversi_backend::domain::{Color, ScorePair};
use reversi_backend::repos::TurnStore;
use reversi_backend::{AppError, ErrorCode, GameEngine};

use crate::support::db::sqlite_store;
use crate::support::FakeBoard;

#[tokio::test]
async fn lobby_lifecycle_on_sqlite() -> Result<(), AppError> {
    let store = sqlite_store().await?;
    let board = Arc::new(FakeBoard::new());
    let engine = GameEngine::with_store(store, board.clone());

    let lobby = engine.create_lobby("sqlite game").await?;
    assert_eq!(engine.join_lobby(lobby.id, 1).await?.color, Color::Black);
    assert_eq!(engine.join_lobby(lobby.id, 2).await?.color, Color::White);
    assert_eq!(
        engine.join_lobby(lobby.id, 3).await.unwrap_err().code(),
        ErrorCode::LobbyFull
    );

    assert_eq!(engine.current_turn(lobby.id).await?, 1);
    assert_eq!(
        engine.advance_turn(lobby.id, 2).await.unwrap_err().code(),
        ErrorCode::OutOfTurn
    );
    assert_eq!(engine.advance_turn(lobby.id, 1).await?, 2);

    board.set_no_moves(1);
    let advance = engine.advance_turn_detailed(lobby.id, 2).await?;
    assert_eq!(advance.next, 2);
    assert!(advance.passed);

    board.set_grid(grid_from_codes(&[vec![1, 1], vec![2, 0]]).unwrap());
    let score = engine.compute_score(lobby.id).await?;
    assert_eq!(
        score,
        ScorePair {
            black_score: 2,
            white_score: 1
        }
    );

    let scores: Vec<_> = engine
        .list_players(lobby.id)
        .await?
        .into_iter()
        .map(|p| (p.user_id, p.score))
        .collect();
    assert_eq!(scores, vec![(1, 2), (2, 1)]);
    Ok(())
}

#[tokio::test]
async fn fresh_lobby_rejects_white_first_and_writes_no_turn() -> Result<(), AppError> {
    let store = sqlite_store().await?;
    let engine = GameEngine::with_store(store.clone(), Arc::new(FakeBoard::new()));
    let lobby = engine.create_lobby("white first").await?;
    engine.join_lobby(lobby.id, 1).await?;
    engine.join_lobby(lobby.id, 2).await?;

    let err = engine.advance_turn(lobby.id, 2).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::OutOfTurn);
    assert!(store.load_turn(lobby.id).await?.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_joins_from_two_processes_both_seat() -> Result<(), AppError> {
    let store = sqlite_store().await?;
    let board = Arc::new(FakeBoard::new());
    let first = GameEngine::with_store(store.clone(), board.clone());
    let second = GameEngine::with_store(store, board);

    for round in 0..10 {
        let lobby = first.create_lobby(&format!("race {round}")).await?;
        let a = tokio::spawn({
            let engine = first.clone();
            async move { engine.join_lobby(lobby.id, 1).await }
        });
        let b = tokio::spawn({
            let engine = second.clone();
            async move { engine.join_lobby(lobby.id, 2).await }
        });

        let a = a.await.unwrap()?;
        let b = b.await.unwrap()?;
        let mut colors = vec![a.color, b.color];
        colors.sort_by_key(|c| c.as_str());
        assert_eq!(colors, vec![Color::Black, Color::White]);
    }
    Ok(())
}
