use {
    std::collections::{
        BTreeMap,
        BTreeSet,
        HashMap,
    },
    crate::item::{
        ItemClassification,
        ItemDefinition,
    },
};

/// One player's adjustments on top of the shared item catalog.
///
/// The catalog is never mutated. Every per-player read of classification, injectability or locality goes through here.
#[derive(Debug, Default, Clone)]
pub struct ItemOverlay {
    classification: HashMap<String, ItemClassification>,
    injectable: BTreeMap<String, u32>,
    local: BTreeSet<String>,
}

impl ItemOverlay {
    /// Raises an item's classification. Never lowers it.
    pub fn upgrade(&mut self, item: &ItemDefinition, classification: ItemClassification) {
        let current = self.classification(item);
        if classification > current {
            self.classification.insert(item.name.clone(), classification);
        }
    }

    pub fn classification(&self, item: &ItemDefinition) -> ItemClassification {
        self.classification.get(&item.name).copied().unwrap_or(item.classification)
    }

    pub fn is_progression(&self, item: &ItemDefinition) -> bool {
        self.classification(item).is_progression()
    }

    /// Marks an item to be added to the pool `copies` times, in addition to its vanilla occurrences.
    pub fn mark_injectable(&mut self, item: &ItemDefinition, copies: u32) {
        self.injectable.insert(item.name.clone(), copies);
    }

    /// How many copies of this item to inject. Items flagged injectable in the catalog default to one.
    pub fn injectable_copies(&self, item: &ItemDefinition) -> u32 {
        self.injectable.get(&item.name).copied().unwrap_or(if item.is_injectable() { 1 } else { 0 })
    }

    pub fn mark_local(&mut self, item: &ItemDefinition) {
        self.local.insert(item.name.clone());
    }

    pub fn local_items(&self) -> &BTreeSet<String> { &self.local }
}

#[cfg(test)]
mod tests {
    use {
        crate::item::{
            ItemData,
            ItemId,
        },
        super::*,
    };

    #[test]
    fn overlays_are_independent() {
        let medal = ItemData::goods("Pureblood Knight's Medal").useful().into_definition(ItemId(1));
        let mut first = ItemOverlay::default();
        let second = ItemOverlay::default();
        first.upgrade(&medal, ItemClassification::Progression);
        assert_eq!(first.classification(&medal), ItemClassification::Progression);
        assert_eq!(second.classification(&medal), ItemClassification::Useful);
        assert_eq!(medal.classification, ItemClassification::Useful);
    }

    #[test]
    fn upgrade_never_lowers() {
        let key = ItemData::goods("Stonesword Key").progression().into_definition(ItemId(2));
        let mut overlay = ItemOverlay::default();
        overlay.upgrade(&key, ItemClassification::Useful);
        assert!(overlay.is_progression(&key));
    }

    #[test]
    fn injectable_copies() {
        let lock = ItemData::goods("Weeping Lock").progression().into_definition(ItemId(3));
        let pouch = ItemData::goods("Talisman Pouch").useful().injectable().into_definition(ItemId(4));
        let mut overlay = ItemOverlay::default();
        assert_eq!(overlay.injectable_copies(&lock), 0);
        assert_eq!(overlay.injectable_copies(&pouch), 1);
        overlay.mark_injectable(&lock, 1);
        assert_eq!(overlay.injectable_copies(&lock), 1);
    }
}
