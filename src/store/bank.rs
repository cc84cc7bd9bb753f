//! Tabbed, stacking item storage.
//!
//! Placement policy: an existing stack of the same item absorbs new
//! quantity wherever it lives; otherwise the deposit takes the first empty
//! slot scanning tab 0 upward. Capacity is not stored here: the caller
//! passes the current tab/slot limits from the upgrade state, so a
//! capacity purchase takes effect without touching stored items.

use serde::{Deserialize, Serialize};

/// A quantity of one item occupying a bank slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_id: String,
    pub quantity: u32,
}

/// Where a deposit landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub tab: usize,
    pub slot: usize,
    /// True when the quantity merged into an existing stack.
    pub stacked: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bank {
    tabs: Vec<Vec<Option<ItemStack>>>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the internal grid to the current capacity. Never shrinks:
    /// items stored before a capacity change stay where they are.
    fn ensure_shape(&mut self, max_tabs: u32, slots_per_tab: u32) {
        while self.tabs.len() < max_tabs as usize {
            self.tabs.push(Vec::new());
        }
        for tab in &mut self.tabs {
            while tab.len() < slots_per_tab as usize {
                tab.push(None);
            }
        }
    }

    /// Deposits `quantity` of an item, stacking onto an existing slot or
    /// taking the first empty one. Returns `None` when every slot within
    /// the given capacity is occupied by other items.
    pub fn try_deposit(
        &mut self,
        item_id: &str,
        quantity: u32,
        max_tabs: u32,
        slots_per_tab: u32,
    ) -> Option<Placement> {
        self.ensure_shape(max_tabs, slots_per_tab);

        // Stack onto an existing slot first
        for (tab_index, tab) in self.tabs.iter_mut().enumerate() {
            for (slot_index, slot) in tab.iter_mut().enumerate() {
                if let Some(stack) = slot {
                    if stack.item_id == item_id {
                        stack.quantity = stack.quantity.saturating_add(quantity);
                        return Some(Placement {
                            tab: tab_index,
                            slot: slot_index,
                            stacked: true,
                        });
                    }
                }
            }
        }

        // First empty slot, tab 0 upward, within current capacity
        for (tab_index, tab) in self
            .tabs
            .iter_mut()
            .enumerate()
            .take(max_tabs as usize)
        {
            for (slot_index, slot) in tab.iter_mut().enumerate().take(slots_per_tab as usize) {
                if slot.is_none() {
                    *slot = Some(ItemStack {
                        item_id: item_id.to_string(),
                        quantity,
                    });
                    return Some(Placement {
                        tab: tab_index,
                        slot: slot_index,
                        stacked: false,
                    });
                }
            }
        }

        None
    }

    /// Total quantity of an item across all tabs.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.tabs
            .iter()
            .flatten()
            .flatten()
            .filter(|stack| stack.item_id == item_id)
            .map(|stack| stack.quantity)
            .sum()
    }

    pub fn has(&self, item_id: &str, quantity: u32) -> bool {
        self.quantity_of(item_id) >= quantity
    }

    /// Removes `quantity` of an item, draining stacks front-to-back and
    /// freeing emptied slots. Returns false (and changes nothing) when the
    /// bank holds less than the requested quantity.
    pub fn remove(&mut self, item_id: &str, quantity: u32) -> bool {
        if !self.has(item_id, quantity) {
            return false;
        }
        let mut remaining = quantity;
        for tab in &mut self.tabs {
            for slot in tab.iter_mut() {
                if remaining == 0 {
                    return true;
                }
                if let Some(stack) = slot.as_mut() {
                    if stack.item_id == item_id {
                        let taken = stack.quantity.min(remaining);
                        stack.quantity -= taken;
                        remaining -= taken;
                    }
                }
                if slot.as_ref().is_some_and(|stack| stack.quantity == 0) {
                    *slot = None;
                }
            }
        }
        remaining == 0
    }

    /// Removes a whole set of costs atomically: either every cost is
    /// deducted or nothing changes.
    pub fn remove_all(&mut self, costs: &[(String, u32)]) -> bool {
        if !costs.iter().all(|(id, qty)| self.has(id, *qty)) {
            return false;
        }
        for (id, qty) in costs {
            self.remove(id, *qty);
        }
        true
    }

    pub fn slot(&self, tab: usize, slot: usize) -> Option<&ItemStack> {
        self.tabs.get(tab)?.get(slot)?.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.iter().flatten().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        self.tabs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_takes_first_empty_slot() {
        let mut bank = Bank::new();
        let placement = bank.try_deposit("copper_ore", 1, 1, 12).unwrap();
        assert_eq!(placement, Placement { tab: 0, slot: 0, stacked: false });

        let placement = bank.try_deposit("tin_ore", 1, 1, 12).unwrap();
        assert_eq!(placement, Placement { tab: 0, slot: 1, stacked: false });
    }

    #[test]
    fn test_deposit_stacks_existing_item() {
        let mut bank = Bank::new();
        bank.try_deposit("copper_ore", 1, 1, 12).unwrap();
        let placement = bank.try_deposit("copper_ore", 2, 1, 12).unwrap();
        assert!(placement.stacked);
        assert_eq!(bank.quantity_of("copper_ore"), 3);
        assert_eq!(bank.slot(0, 0).unwrap().quantity, 3);
    }

    #[test]
    fn test_deposit_overflows_to_next_tab() {
        let mut bank = Bank::new();
        // Fill tab 0 (2 slots per tab, 2 tabs)
        bank.try_deposit("a", 1, 2, 2).unwrap();
        bank.try_deposit("b", 1, 2, 2).unwrap();
        let placement = bank.try_deposit("c", 1, 2, 2).unwrap();
        assert_eq!(placement.tab, 1);
        assert_eq!(placement.slot, 0);
    }

    #[test]
    fn test_deposit_fails_when_full() {
        let mut bank = Bank::new();
        bank.try_deposit("a", 1, 1, 2).unwrap();
        bank.try_deposit("b", 1, 1, 2).unwrap();
        assert!(bank.try_deposit("c", 1, 1, 2).is_none());
        // But stacking onto an existing item still works at capacity
        assert!(bank.try_deposit("a", 5, 1, 2).is_some());
    }

    #[test]
    fn test_remove_is_all_or_nothing() {
        let mut bank = Bank::new();
        bank.try_deposit("copper_ore", 3, 1, 12).unwrap();
        assert!(!bank.remove("copper_ore", 5));
        assert_eq!(bank.quantity_of("copper_ore"), 3);
        assert!(bank.remove("copper_ore", 3));
        assert_eq!(bank.quantity_of("copper_ore"), 0);
        assert!(bank.slot(0, 0).is_none());
    }

    #[test]
    fn test_remove_all_atomic() {
        let mut bank = Bank::new();
        bank.try_deposit("copper_ore", 1, 1, 12).unwrap();
        bank.try_deposit("tin_ore", 1, 1, 12).unwrap();

        // Missing iron: nothing is deducted
        let costs = vec![
            ("copper_ore".to_string(), 1),
            ("iron_ore".to_string(), 1),
        ];
        assert!(!bank.remove_all(&costs));
        assert_eq!(bank.quantity_of("copper_ore"), 1);

        let costs = vec![
            ("copper_ore".to_string(), 1),
            ("tin_ore".to_string(), 1),
        ];
        assert!(bank.remove_all(&costs));
        assert!(bank.is_empty());
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut bank = Bank::new();
        bank.try_deposit("a", 1, 1, 2).unwrap();
        bank.try_deposit("b", 1, 1, 2).unwrap();
        bank.remove("a", 1);
        let placement = bank.try_deposit("c", 1, 1, 2).unwrap();
        assert_eq!(placement.slot, 0);
    }
}
