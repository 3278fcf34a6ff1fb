// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading or writing the backing store failed.
    IoError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// A stored record could not be decoded into its entity type.
    CorruptRecord { kind: &'static str, message: String },
    /// Initialization error.
    InitializationError(String),
    /// A collection lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// A booking names a seat that is already sold for its event.
    SeatAlreadyBooked { event_id: String, seat: String },
    /// No free reward code was found within the retry budget.
    RewardCodeExhausted { attempts: usize },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::CorruptRecord { kind, message } => {
                write!(f, "Corrupt {kind} record: {message}")
            }
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::LockPoisoned(collection) => {
                write!(f, "Lock on the {collection} collection is poisoned")
            }
            Self::SeatAlreadyBooked { event_id, seat } => {
                write!(f, "Seat {seat} is already booked for event '{event_id}'")
            }
            Self::RewardCodeExhausted { attempts } => {
                write!(f, "No unused reward code found after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
