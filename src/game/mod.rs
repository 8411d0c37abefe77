//! Core game logic: board and cells, precomputed four-in-a-row windows,
//! gravity drop resolution, and the game state machine.

mod board;
mod drop;
mod player;
mod state;
mod windows;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
pub use drop::{resolve_click, resolve_drop};
pub use player::{Player, PlayerId};
pub use state::{Game, GameState, MoveOutcome};
pub use windows::{Orientation, Window, WindowIndex, WIN_LENGTH};
