//! Move validation and execution for standard chess movement rules.
//!
//! This crate provides:
//! - [`validate`] - decides whether a move is legal and which special rule
//!   (castling, en passant, promotion) it falls under
//! - [`moves_from`] - legal destinations from a square, for move hints
//! - [`apply`] and [`promote`] - produce the board after a validated move
//! - [`RuleSet`] - trait for swapping in other movement rules
//! - [`Game`] - turn order, history, undo and the two-phase promotion
//!
//! Every rule function is pure: it takes the board and history explicitly
//! and returns new values. King safety (check, checkmate, stalemate) is
//! not part of these rules.
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Square};
//! use chess_rules::{apply, validate, Game};
//!
//! // Using the rule functions directly (stateless)
//! let board = Board::initial();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! let verdict = validate(&board, e2, e4, &[]);
//! let board = apply(&board, e2, e4, &verdict);
//! assert!(board.piece_at(e4).unwrap().has_moved);
//!
//! // Using Game for turn order and history
//! let mut game = Game::new();
//! game.play_move("e2e4".parse().unwrap()).unwrap();
//! game.play_move("e7e5".parse().unwrap()).unwrap();
//! println!("{}", game.board());
//! ```

mod execute;
mod game;
mod movegen;
pub mod rules;
mod validate;
mod verdict;

pub use execute::{apply, promote};
pub use game::{Game, GameError, MoveOutcome, PendingPromotion};
pub use movegen::{moves_from, moves_from_with_history};
pub use rules::{RuleSet, StandardRules};
pub use validate::validate;
pub use verdict::MoveVerdict;
