//! Core game state, the wave tick, and the session that drives them.

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game_state;
pub mod progression;
pub mod scheduler;
pub mod session;
pub mod tick;

pub use config::GameConfig;
pub use error::ActionError;
pub use events::GameEvent;
pub use game_state::GameState;
pub use scheduler::{format_duration, Scheduler, TimerId};
pub use session::Session;
pub use tick::{wave_tick, EncounterTier, WaveOutcome};
