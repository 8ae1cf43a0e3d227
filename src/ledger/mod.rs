//! Resource ledger: currency balances, the shared gain formula, and the
//! compact magnitude strings used for stats and reward text.

pub mod magnitude;
pub mod types;

pub use magnitude::{format_magnitude, parse_magnitude, quantize, MagnitudeError};
pub use types::{Currency, GainModifiers, Ledger};
