use super::types::{Artifact, BonusType, Item};

/// Starting artifacts; only the Crown is equipped.
pub fn initial_artifacts() -> Vec<Artifact> {
    let mut crown = Artifact::new(
        1,
        "Crown of the Void",
        "👑",
        "+10% Mana Gain",
        0.1,
        BonusType::Mana,
    );
    crown.equipped = true;
    vec![
        crown,
        Artifact::new(
            2,
            "Sovereign's Eye",
            "👁️",
            "+5% Mana Gain",
            0.05,
            BonusType::Mana,
        ),
        Artifact::new(
            3,
            "Shadow Heart",
            "🖤",
            "+15% Mana Gain",
            0.15,
            BonusType::Mana,
        ),
    ]
}

pub fn initial_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Dungeon Key".to_string(),
            icon: "🔑".to_string(),
            description: "Unlocks a special dungeon.".to_string(),
            quantity: 5,
        },
        Item {
            id: 2,
            name: "Raid Ticket".to_string(),
            icon: "🎟️".to_string(),
            description: "Allows entry to a raid.".to_string(),
            quantity: 2,
        },
    ]
}
