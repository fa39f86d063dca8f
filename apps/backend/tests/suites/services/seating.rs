use reversi_backend::domain::{Color, INITIAL_SCORE};
use reversi_backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use reversi_backend::ErrorCode;

use crate::support::TestEngine;

#[tokio::test]
async fn joins_assign_black_then_white_then_lobby_full() {
    let t = TestEngine::new();
    let lobby_id = t.lobby().await;

    let first = t.engine.join_lobby(lobby_id, 1).await.unwrap();
    let second = t.engine.join_lobby(lobby_id, 2).await.unwrap();
    let third = t.engine.join_lobby(lobby_id, 3).await.unwrap_err();

    assert_eq!(first.color, Color::Black);
    assert_eq!(second.color, Color::White);
    assert!(matches!(
        third,
        DomainError::Conflict(ConflictKind::LobbyFull, _)
    ));
    assert_eq!(third.code(), ErrorCode::LobbyFull);
    assert_eq!(t.store.players(lobby_id).len(), 2);
}

#[tokio::test]
async fn joined_player_starts_with_opening_score() {
    let t = TestEngine::new();
    let lobby_id = t.lobby().await;

    let player = t.engine.join_lobby(lobby_id, 7).await.unwrap();

    assert_eq!(player.lobby_id, lobby_id);
    assert_eq!(player.user_id, 7);
    assert_eq!(player.score, INITIAL_SCORE);
    assert!(player.left_at.is_none());
}

#[tokio::test]
async fn rejoining_returns_existing_seat() {
    let t = TestEngine::new();
    let lobby_id = t.lobby().await;

    let first = t.engine.join_lobby(lobby_id, 1).await.unwrap();
    let again = t.engine.join_lobby(lobby_id, 1).await.unwrap();

    assert_eq!(first, again);
    assert_eq!(t.store.players(lobby_id).len(), 1);
    assert_eq!(t.engine.assign_color(lobby_id, 1).await.unwrap(), Color::Black);
}

#[tokio::test]
async fn assign_color_does_not_persist() {
    let t = TestEngine::new();
    let lobby_id = t.lobby().await;

    assert_eq!(t.engine.assign_color(lobby_id, 1).await.unwrap(), Color::Black);
    assert_eq!(t.engine.assign_color(lobby_id, 2).await.unwrap(), Color::Black);
    assert!(t.store.players(lobby_id).is_empty());

    t.engine.join_lobby(lobby_id, 1).await.unwrap();
    assert_eq!(t.engine.assign_color(lobby_id, 2).await.unwrap(), Color::White);

    t.engine.join_lobby(lobby_id, 2).await.unwrap();
    let err = t.engine.assign_color(lobby_id, 3).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::LobbyFull);
}

#[tokio::test]
async fn joining_unknown_lobby_is_not_found() {
    let t = TestEngine::new();

    let err = t.engine.join_lobby(404, 1).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Lobby, _)));
    assert!(t.store.players(404).is_empty());
}

#[tokio::test]
async fn lobbies_are_independent() {
    let t = TestEngine::new();
    let a = t.full_lobby(1, 2).await;
    let b = t.lobby().await;

    let player = t.engine.join_lobby(b, 1).await.unwrap();

    assert_eq!(player.color, Color::Black);
    assert_eq!(t.engine.list_players(a).await.unwrap().len(), 2);
    assert_eq!(t.engine.list_players(b).await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_players_in_join_order() {
    let t = TestEngine::new();
    let lobby_id = t.full_lobby(20, 10).await;

    let players = t.engine.list_players(lobby_id).await.unwrap();
    let ids: Vec<_> = players.iter().map(|p| (p.user_id, p.color)).collect();

    assert_eq!(ids, vec![(20, Color::Black), (10, Color::White)]);
}

#[tokio::test]
async fn lobbies_list_newest_first() {
    let t = TestEngine::new();
    let first = t.engine.create_lobby("first").await.unwrap();
    let second = t.engine.create_lobby("second").await.unwrap();

    let listed = t.engine.list_lobbies().await.unwrap();

    assert_eq!(listed, vec![second, first]);
}

#[tokio::test]
async fn join_rereads_seats_when_color_is_claimed_elsewhere() {
    let t = TestEngine::new();
    let lobby_id = t.lobby().await;
    t.store.set_competing_join(9);

    let player = t.engine.join_lobby(lobby_id, 1).await.unwrap();

    assert_eq!(player.color, Color::White);
    let seats: Vec<_> = t
        .store
        .players(lobby_id)
        .iter()
        .map(|p| (p.user_id, p.color))
        .collect();
    assert_eq!(seats, vec![(9, Color::Black), (1, Color::White)]);
}

#[tokio::test]
async fn get_player_returns_seat() {
    let t = TestEngine::new();
    let lobby_id = t.full_lobby(1, 2).await;

    let player = t.engine.get_player(lobby_id, 2).await.unwrap();

    assert_eq!(player.user_id, 2);
    assert_eq!(player.color, Color::White);
}

#[tokio::test]
async fn get_player_for_unseated_user_is_not_found() {
    let t = TestEngine::new();
    let lobby_id = t.full_lobby(1, 2).await;

    let err = t.engine.get_player(lobby_id, 3).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::Player, _)
    ));
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);
}
