//! Monarch - Shadow Army Idle Game Library
//!
//! The whole game runs headless: a [`Session`] owns the state and a virtual
//! clock, and every player action is a method returning a `Result`.

pub mod army;
pub mod character;
pub mod core;
pub mod dungeons;
pub mod gates;
pub mod inventory;
pub mod ledger;
pub mod monarchs;
pub mod quests;
pub mod raid;
pub mod simulator;

pub use crate::core::{ActionError, GameConfig, GameEvent, GameState, Session};
