//! The contract with the multiworld host: the state queries rules are evaluated against, and the surface a generated world is registered through.

use {
    std::{
        collections::BTreeSet,
        fmt,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    crate::{
        access::Rule,
        item::{
            ItemClassification,
            ItemDefinition,
            ItemId,
        },
        location::LocationId,
        region::Region,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Player(pub u32);

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// A snapshot of what a hypothetical player has collected and can reach. Owned by the host.
pub trait CollectedState {
    fn count(&self, item: &str, player: Player) -> u32;
    fn can_reach_region(&self, region: &str, player: Player) -> bool;
    fn can_reach_entrance(&self, entrance: &str, player: Player) -> bool;
    fn can_reach_location(&self, location: &str, player: Player) -> bool;

    fn has(&self, item: &str, player: Player, count: u32) -> bool {
        self.count(item, player) >= count
    }

    fn count_from_list(&self, items: &[&str], player: Player) -> u32 {
        items.iter().map(|item| self.count(item, player)).sum()
    }

    fn has_all(&self, items: &[&str], player: Player) -> bool {
        items.iter().all(|item| self.has(item, player, 1))
    }
}

/// An item as it sits in a location or the item pool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlacedItem {
    pub name: String,
    pub player: Player,
    /// `None` for event items, which only exist for logic.
    pub code: Option<ItemId>,
    pub classification: ItemClassification,
}

impl PlacedItem {
    /// `classification` is the player's effective one, which may differ from the catalog's.
    pub fn new(item: &ItemDefinition, classification: ItemClassification, player: Player) -> Self {
        Self {
            name: item.name.clone(),
            code: Some(item.id),
            classification,
            player,
        }
    }

    pub fn event(name: impl Into<String>, player: Player) -> Self {
        Self {
            name: name.into(),
            code: None,
            classification: ItemClassification::Progression,
            player,
        }
    }

    pub fn is_event(&self) -> bool { self.code.is_none() }
}

/// The registration surface a generated world is handed to.
pub trait Host {
    fn add_region(&mut self, player: Player, region: Region);
    /// Reachability of `entrance` depends on reachability of `region`, which is not one of its ancestors.
    fn add_indirect_condition(&mut self, player: Player, region: &str, entrance: &str);
    fn set_completion_condition(&mut self, player: Player, rule: Rule);
    fn push_precollected(&mut self, player: Player, item: PlacedItem);
    fn add_to_itempool(&mut self, player: Player, items: Vec<PlacedItem>);
    fn set_local_items(&mut self, player: Player, items: BTreeSet<String>);
}

/// A filled location as seen after the host's fill step.
#[derive(Debug, Clone)]
pub struct FilledLocation {
    pub name: String,
    pub address: Option<LocationId>,
    pub item: PlacedItem,
}

/// Read access to the final, post-fill placements.
pub trait Placements {
    /// The filled locations in `player`'s world, whoever the items belong to.
    fn filled_locations(&self, player: Player) -> Vec<FilledLocation>;
    /// Every filled location in the multiworld.
    fn all_filled_locations(&self) -> Vec<FilledLocation>;
}
