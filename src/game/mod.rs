//! Game core: session bookkeeping, puzzle reveal, and the prize wheel.
//!
//! Everything in here is synchronous, in-memory state with no reference to
//! rendering. Frontends call named operations and read the results back.

pub mod error;
pub mod letters;
pub mod puzzle;
pub mod session;
pub mod wheel;

pub use error::{GameError, GameResult};
pub use puzzle::Puzzle;
pub use session::GameSession;
pub use wheel::{Wedge, Wheel};
