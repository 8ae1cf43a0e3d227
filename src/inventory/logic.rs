//! Equipping artifacts, stocking items, and folding artifact bonuses.

use super::types::{Artifact, BonusType, Item};
use crate::core::error::ActionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub artifacts: Vec<Artifact>,
    pub items: Vec<Item>,
    pub max_equipped: usize,
}

impl Inventory {
    pub fn new(artifacts: Vec<Artifact>, items: Vec<Item>, max_equipped: usize) -> Self {
        Self {
            artifacts,
            items,
            max_equipped,
        }
    }

    pub fn equipped(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(|a| a.equipped)
    }

    pub fn equipped_count(&self) -> usize {
        self.equipped().count()
    }

    /// Sum (not product) of every equipped artifact's bonus of this type.
    pub fn bonus(&self, bonus_type: BonusType) -> f64 {
        self.equipped()
            .filter(|a| a.bonus_type == bonus_type)
            .map(|a| a.bonus_value)
            .sum()
    }

    /// Flips an artifact's equipped flag. Equipping is rejected once the cap
    /// is reached; unequipping always succeeds. Returns the new flag.
    pub fn toggle_artifact(&mut self, id: u32) -> Result<bool, ActionError> {
        let at_cap = self.equipped_count() >= self.max_equipped;
        let artifact = self
            .artifacts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ActionError::unknown("artifact", id.to_string()))?;
        if !artifact.equipped && at_cap {
            return Err(ActionError::ArtifactCapReached(self.max_equipped));
        }
        artifact.equipped = !artifact.equipped;
        Ok(artifact.equipped)
    }

    /// Adds an artifact unequipped.
    pub fn add_artifact(&mut self, mut artifact: Artifact) {
        artifact.equipped = false;
        self.artifacts.push(artifact);
    }

    /// Increments the quantity of a catalogued item. Ids missing from the
    /// inventory are rejected rather than created.
    pub fn add_item(&mut self, id: u32, quantity: u32) -> Result<&Item, ActionError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ActionError::unknown("item", id.to_string()))?;
        item.quantity = item.quantity.saturating_add(quantity);
        Ok(&*item)
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::data::{initial_artifacts, initial_items};

    fn inventory() -> Inventory {
        Inventory::new(initial_artifacts(), initial_items(), 3)
    }

    #[test]
    fn test_starting_mana_bonus() {
        let inv = inventory();
        assert_eq!(inv.equipped_count(), 1);
        assert!((inv.bonus(BonusType::Mana) - 0.1).abs() < 1e-9);
        assert_eq!(inv.bonus(BonusType::Essence), 0.0);
    }

    #[test]
    fn test_bonuses_sum() {
        let mut inv = inventory();
        inv.toggle_artifact(2).unwrap();
        inv.toggle_artifact(3).unwrap();
        assert!((inv.bonus(BonusType::Mana) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_equip_cap() {
        let mut inv = inventory();
        inv.add_artifact(Artifact::new(9, "Extra", "x", "+1% Mana Gain", 0.01, BonusType::Mana));
        inv.toggle_artifact(2).unwrap();
        inv.toggle_artifact(3).unwrap();
        assert_eq!(inv.toggle_artifact(9), Err(ActionError::ArtifactCapReached(3)));
        assert!(!inv.artifacts[3].equipped);

        // Unequipping is always allowed, and frees a slot
        assert_eq!(inv.toggle_artifact(1), Ok(false));
        assert_eq!(inv.toggle_artifact(9), Ok(true));
    }

    #[test]
    fn test_added_artifact_is_unequipped() {
        let mut inv = inventory();
        let mut artifact = Artifact::new(12, "Core", "c", "+25%", 0.25, BonusType::Essence);
        artifact.equipped = true;
        inv.add_artifact(artifact);
        assert_eq!(inv.bonus(BonusType::Essence), 0.0);
    }

    #[test]
    fn test_add_item() {
        let mut inv = inventory();
        assert_eq!(inv.add_item(1, 2).unwrap().quantity, 7);
        assert!(matches!(
            inv.add_item(77, 1),
            Err(ActionError::UnknownId { kind: "item", .. })
        ));
        assert_eq!(inv.items.len(), 2);
    }
}
