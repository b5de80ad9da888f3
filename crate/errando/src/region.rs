use {
    serde::{
        Deserialize,
        Serialize,
    },
    crate::{
        access::{
            ItemRule,
            Rule,
        },
        host::{
            PlacedItem,
            Player,
        },
        location::{
            LocationDefinition,
            LocationId,
        },
    },
};

pub const ROOT: &str = "Menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressType {
    Default,
    /// Prefers progression items.
    Priority,
    /// Never holds progression items.
    Excluded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub address: Option<LocationId>,
    pub region: String,
    pub progress_type: ProgressType,
    pub rule: Rule,
    pub item_rule: ItemRule,
    pub locked_item: Option<PlacedItem>,
}

impl Location {
    /// A live location the host's fill step may place anything into.
    pub fn randomized(data: &LocationDefinition) -> Self {
        Self {
            name: data.name.clone(),
            address: data.id,
            region: data.region.clone(),
            progress_type: ProgressType::Default,
            rule: Rule::True,
            item_rule: ItemRule::default(),
            locked_item: None,
        }
    }

    /// A location that keeps a fixed item and has no address, so the host treats it as an event.
    pub fn locked(data: &LocationDefinition, item: PlacedItem) -> Self {
        Self {
            name: data.name.clone(),
            address: None,
            region: data.region.clone(),
            progress_type: ProgressType::Default,
            rule: Rule::True,
            item_rule: ItemRule::default(),
            locked_item: Some(item),
        }
    }

    pub fn is_event(&self) -> bool { self.address.is_none() }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrance {
    pub name: String,
    pub from: String,
    pub to: String,
    pub rule: Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub player: Player,
    pub locations: Vec<Location>,
    pub exits: Vec<Entrance>,
}

impl Region {
    pub fn new(name: impl Into<String>, player: Player) -> Self {
        Self {
            name: name.into(),
            player,
            locations: Vec::default(),
            exits: Vec::default(),
        }
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }
}
