//! Tic-tac-toe rules engine with move history and time travel.
//!
//! The engine is a set of pure state transitions. A presentation layer owns
//! a [`GameState`], feeds clicks into [`GameState::play`] and
//! [`GameState::jump_to`], and renders [`GameState::status`] and
//! [`GameState::move_labels`] verbatim.
//!
//! # Architecture
//!
//! - **Board**: 9 cells, stored by value so history snapshots never alias
//! - **Rules**: the 8 fixed lines, win and draw classification
//! - **Engine**: `apply_move`, `evaluate`, `truncate_and_append`, `jump_to`
//! - **Game**: history plus the move being shown
//! - **Invariants/Contracts**: checks run after every accepted move
//!
//! # Example
//!
//! ```
//! use tictactoe_timetravel::{GameState, Position};
//!
//! let game = GameState::new()
//!     .play(Position::TopLeft)?
//!     .play(Position::Center)?
//!     .play(Position::TopCenter)?;
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! // Go back one move and take a different branch.
//! let game = game.jump_to(1)?.play(Position::BottomRight)?;
//! assert_eq!(game.history().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
mod history;
mod outcome;
mod position;
mod status;
mod types;

pub mod contracts;
pub mod engine;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use config::{ConfigError, EngineConfig};
pub use game::GameState;
pub use history::{History, JumpError};
pub use outcome::{Line, Outcome, Phase};
pub use position::Position;
pub use status::{MoveLabel, Status};
pub use types::{Board, Cell, Mark};
