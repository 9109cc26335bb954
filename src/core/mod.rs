//! Core game engine: board, shapes, pieces, scoring, and the session
//! state machine. No I/O happens in here.

pub mod board;
pub mod piece;
pub mod scoring;
pub mod session;
pub mod shapes;

pub use board::Board;
pub use piece::Piece;
pub use session::{GameSession, SessionEvent, SessionState};
pub use shapes::Shape;
