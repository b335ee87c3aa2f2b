use crate::models::PlayerGame;

/// NFL team-name tokens. Defense units are rostered with one of these as
/// their player ID, which is how ranking tells a defense record apart from
/// a player record.
pub const NFL_TEAM_NAMES: [&str; 32] = [
    "49ers",
    "Bears",
    "Bengals",
    "Bills",
    "Broncos",
    "Browns",
    "Buccaneers",
    "Cardinals",
    "Chargers",
    "Chiefs",
    "Colts",
    "Commanders",
    "Cowboys",
    "Dolphins",
    "Eagles",
    "Falcons",
    "Giants",
    "Jaguars",
    "Jets",
    "Lions",
    "Packers",
    "Panthers",
    "Patriots",
    "Raiders",
    "Rams",
    "Ravens",
    "Saints",
    "Seahawks",
    "Steelers",
    "Texans",
    "Titans",
    "Vikings",
];

/// A game record belongs to a team defense when its player ID is a team-name
/// token. This intentionally ignores the roster player's position tags; the
/// aggregation path branches on tags instead (see DESIGN.md).
pub fn is_defense_player_game(game: &PlayerGame) -> bool {
    NFL_TEAM_NAMES.contains(&game.player_id.as_str())
}
