//! Monarch selection and the monarch skill tree.

use super::types::{Monarch, MonarchKind, MonarchNode};
use crate::core::constants::{MONARCH_UNLOCK_ASCENSIONS, SHADOW_MONARCH_ESSENCE_BONUS};
use crate::core::error::ActionError;
use crate::ledger::{Currency, Ledger};
use serde::{Deserialize, Serialize};

/// The monarch catalog plus the permanent choice. Survives ascension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonarchState {
    pub monarchs: Vec<Monarch>,
    pub chosen: Option<MonarchKind>,
}

pub fn is_unlocked(ascension_count: u32) -> bool {
    ascension_count >= MONARCH_UNLOCK_ASCENSIONS
}

/// Tier 1 is always open; tier N needs a purchased node in tier N-1.
pub fn tier_unlocked(tree: &[MonarchNode], tier: u32) -> bool {
    tier <= 1 || tree.iter().any(|n| n.tier == tier - 1 && n.level > 0)
}

impl MonarchState {
    pub fn new(monarchs: Vec<Monarch>) -> Self {
        Self {
            monarchs,
            chosen: None,
        }
    }

    pub fn get(&self, kind: MonarchKind) -> Option<&Monarch> {
        self.monarchs.iter().find(|m| m.kind == kind)
    }

    pub fn active(&self) -> Option<&Monarch> {
        self.chosen.and_then(|kind| self.get(kind))
    }

    /// Swears allegiance. A one-time, permanent choice.
    pub fn select(&mut self, kind: MonarchKind, ascension_count: u32) -> Result<&Monarch, ActionError> {
        if self.chosen.is_some() {
            return Err(ActionError::MonarchAlreadyChosen);
        }
        if !is_unlocked(ascension_count) {
            return Err(ActionError::MonarchLocked);
        }
        let monarch = self
            .monarchs
            .iter()
            .find(|m| m.kind == kind)
            .ok_or_else(|| ActionError::unknown("monarch", format!("{:?}", kind)))?;
        self.chosen = Some(kind);
        Ok(monarch)
    }

    /// Buys a node of the chosen monarch's tree with sovereign points.
    pub fn purchase_node(&mut self, node_id: &str, ledger: &mut Ledger) -> Result<&MonarchNode, ActionError> {
        let kind = self.chosen.ok_or(ActionError::MonarchLocked)?;
        let monarch = self
            .monarchs
            .iter_mut()
            .find(|m| m.kind == kind)
            .ok_or_else(|| ActionError::unknown("monarch", format!("{:?}", kind)))?;
        let index = monarch
            .tree
            .iter()
            .position(|n| n.id == node_id)
            .ok_or_else(|| ActionError::unknown("monarch skill", node_id))?;

        let node = &monarch.tree[index];
        if node.level >= node.max_level {
            return Err(ActionError::MaxLevel(node.name.clone()));
        }
        if !tier_unlocked(&monarch.tree, node.tier) {
            return Err(ActionError::TierLocked(node.tier));
        }
        if !ledger.debit(Currency::SovereignPoints, node.cost) {
            return Err(ActionError::InsufficientFunds {
                currency: Currency::SovereignPoints,
                purpose: "learn this skill",
            });
        }
        let node = &mut monarch.tree[index];
        node.level += 1;
        Ok(&*node)
    }

    /// Essence bonus the chosen monarch grants to ascension.
    pub fn essence_bonus(&self) -> f64 {
        match self.chosen {
            Some(MonarchKind::Shadow) => SHADOW_MONARCH_ESSENCE_BONUS,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monarchs::data::monarch_catalog;

    fn state() -> MonarchState {
        MonarchState::new(monarch_catalog())
    }

    #[test]
    fn test_selection_gates() {
        let mut monarchs = state();
        assert_eq!(
            monarchs.select(MonarchKind::Beast, 9).unwrap_err(),
            ActionError::MonarchLocked
        );
        let chosen = monarchs.select(MonarchKind::Beast, 10).unwrap();
        assert_eq!(chosen.unique_unit, "Giant Wolf");
        assert_eq!(
            monarchs.select(MonarchKind::Shadow, 10).unwrap_err(),
            ActionError::MonarchAlreadyChosen
        );
        assert_eq!(monarchs.chosen, Some(MonarchKind::Beast));
    }

    #[test]
    fn test_shadow_essence_bonus() {
        let mut monarchs = state();
        assert_eq!(monarchs.essence_bonus(), 0.0);
        monarchs.select(MonarchKind::Shadow, 12).unwrap();
        assert!((monarchs.essence_bonus() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_tree_tiers() {
        let mut monarchs = state();
        let mut ledger = Ledger::default();
        ledger.credit(Currency::SovereignPoints, 4);
        assert_eq!(
            monarchs.purchase_node("ms1_1", &mut ledger).unwrap_err(),
            ActionError::MonarchLocked
        );

        monarchs.select(MonarchKind::Shadow, 10).unwrap();
        assert_eq!(
            monarchs.purchase_node("ms2_1", &mut ledger).unwrap_err(),
            ActionError::TierLocked(2)
        );
        monarchs.purchase_node("ms1_1", &mut ledger).unwrap();
        assert!(matches!(
            monarchs.purchase_node("ms1_1", &mut ledger),
            Err(ActionError::MaxLevel(_))
        ));
        assert_eq!(monarchs.purchase_node("ms2_1", &mut ledger).unwrap().level, 1);
        assert_eq!(ledger.balance(Currency::SovereignPoints), 1);

        assert!(matches!(
            monarchs.purchase_node("ms3_1", &mut ledger),
            Err(ActionError::InsufficientFunds { .. })
        ));
        assert!(matches!(
            monarchs.purchase_node("mb1_1", &mut ledger),
            Err(ActionError::UnknownId { .. })
        ));
    }
}
