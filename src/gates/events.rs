//! Gate event templates and their randomized resolutions.

use super::types::{EventKind, EventOption, EventResult, GateEvent, GateRewards, OptionAction};
use rand::Rng;

fn option(label: &str, action: OptionAction) -> EventOption {
    EventOption {
        label: label.to_string(),
        action,
    }
}

/// A fresh copy of an event's template.
pub fn event_template(kind: EventKind) -> GateEvent {
    let (description, options) = match kind {
        EventKind::Tomb => (
            "You find the tomb of a forgotten knight. The air is heavy with dormant power.",
            vec![
                option("Pry it open", OptionAction::PryTomb),
                option("Leave it", OptionAction::LeaveTomb),
            ],
        ),
        EventKind::ShadowAltar => (
            "A dark altar pulses with faint energy. It seems to demand a sacrifice.",
            vec![
                option("Offer Mana", OptionAction::OfferMana),
                option("Destroy it", OptionAction::DestroyAltar),
            ],
        ),
        EventKind::FrozenFountain => (
            "You discover a fountain, frozen solid, with a glowing gem at its center.",
            vec![
                option("Thaw it carefully", OptionAction::ThawFountain),
                option("Smash the ice", OptionAction::SmashIce),
            ],
        ),
        EventKind::IceScript => (
            "Ancient runes are carved into a wall of ice. They are difficult to read.",
            vec![
                option("Spend time deciphering", OptionAction::Decipher),
                option("Ignore them", OptionAction::IgnoreRunes),
            ],
        ),
    };
    GateEvent {
        kind,
        description: description.to_string(),
        options,
    }
}

/// Mana an option takes from the ledger before it resolves.
pub fn option_cost(action: OptionAction, zone: u32) -> u64 {
    match action {
        OptionAction::OfferMana => 1_000 * zone as u64,
        _ => 0,
    }
}

fn result(text: &str, mana: u64, gems: u64, stamina_change: i32) -> EventResult {
    EventResult {
        text: text.to_string(),
        rewards: GateRewards { mana, gems },
        stamina_change,
    }
}

/// Rolls the outcome of an option. Costs are handled by the caller.
pub fn resolve_option(action: OptionAction, zone: u32, rng: &mut impl Rng) -> EventResult {
    let zone = zone as u64;
    match action {
        OptionAction::PryTomb => {
            if rng.gen::<f64>() > 0.4 {
                result(
                    "The tomb grants you its power! You find a trove of mana.",
                    5_000 * zone,
                    0,
                    0,
                )
            } else {
                result("A curse strikes you! Your energy is drained.", 0, 0, -5)
            }
        }
        OptionAction::LeaveTomb => result("You respectfully leave the tomb untouched.", 0, 0, 0),
        OptionAction::OfferMana => result(
            "The altar accepts your offering, restoring some of your stamina.",
            0,
            0,
            10,
        ),
        OptionAction::DestroyAltar => {
            if rng.gen::<f64>() > 0.6 {
                result(
                    "The altar shatters, releasing a burst of gems!",
                    0,
                    100 + zone,
                    0,
                )
            } else {
                result("The altar lashes out as it breaks, draining you.", 0, 0, -8)
            }
        }
        OptionAction::ThawFountain => result(
            "Your efforts restore the fountain, and it revitalizes you.",
            0,
            0,
            15,
        ),
        OptionAction::SmashIce => result("You retrieve the gem!", 0, 250 + zone, 0),
        OptionAction::Decipher => result(
            "The runes tell of a hidden stash of mana nearby!",
            8_000 * zone,
            0,
            -2,
        ),
        OptionAction::IgnoreRunes => {
            result("You press on, ignoring the cryptic message.", 0, 0, 0)
        }
    }
}
