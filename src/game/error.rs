//! Typed errors for the game core.
//!
//! Every failure is synchronous and returned straight to the caller; the core
//! does no logging, retrying, or recovery of its own.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Player count configured below the minimum of one.
    #[error("player count must be at least 1 (got {0})")]
    InvalidConfiguration(usize),

    /// An operation needed a current player but nobody has joined yet.
    #[error("no players have joined the game")]
    EmptyRoster,

    /// A vowel purchase the current balance cannot cover.
    #[error("balance {balance} cannot cover a vowel costing {cost}")]
    InsufficientFunds { balance: i64, cost: i64 },
}

pub type GameResult<T> = Result<T, GameError>;
