pub mod lobbies;
pub mod lobby_players;
pub mod lobby_turns;
