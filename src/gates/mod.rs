//! Gates: procedurally generated roguelite runs with stamina-gated events.

pub mod events;
pub mod generation;
pub mod logic;
pub mod types;

pub use generation::generate_gate;
pub use logic::{floor_reward, RunStep};
pub use types::{
    Biome, EventKind, EventOption, EventResult, Floor, FloorType, GateEvent, GateOutcome,
    GateResult, GateRewards, GateRun, GateStatus, OptionAction,
};
