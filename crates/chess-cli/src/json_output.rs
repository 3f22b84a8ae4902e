//! JSON rendering of replayed games and move hints.

use chess_core::{Color, MoveRecord, Square};
use chess_rules::{Game, PendingPromotion};
use serde::Serialize;

/// JSON representation of a game after replaying moves.
#[derive(Serialize)]
struct GameJson<'a> {
    /// Piece placement of the current board.
    placement: String,
    side_to_move: Color,
    moves: &'a [MoveRecord],
    /// The promotion still waiting for a piece, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pending_promotion: Option<PendingJson>,
}

#[derive(Serialize)]
struct PendingJson {
    from: Square,
    to: Square,
}

impl From<&PendingPromotion> for PendingJson {
    fn from(pending: &PendingPromotion) -> Self {
        PendingJson {
            from: pending.from,
            to: pending.to,
        }
    }
}

/// JSON representation of the legal destinations from one square.
#[derive(Serialize)]
struct HintsJson<'a> {
    from: Square,
    destinations: &'a [Square],
}

/// Renders the game state as pretty-printed JSON.
///
/// ```json
/// {
///   "placement": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
///   "side_to_move": "black",
///   "moves": [
///     {
///       "from": "e2",
///       "to": "e4",
///       "piece": { "kind": "pawn", "color": "white", "has_moved": false },
///       "promotion": null
///     }
///   ]
/// }
/// ```
pub fn game_json(game: &Game) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GameJson {
        placement: game.board().to_placement(),
        side_to_move: game.side_to_move(),
        moves: game.history(),
        pending_promotion: game.pending_promotion().map(PendingJson::from),
    })
}

/// Renders a hint set as pretty-printed JSON.
pub fn hints_json(from: Square, destinations: &[Square]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&HintsJson { from, destinations })
}
