use {
    std::{
        fmt,
        str::FromStr,
    },
    bitflags::bitflags,
    enum_iterator::Sequence,
    serde::{
        Deserialize,
        Serialize,
    },
    serde_plain::{
        derive_deserialize_from_fromstr,
        derive_serialize_from_display,
    },
};

pub const ITEM_BASE_ID: u64 = 6_900_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How much the fill algorithm cares about an item.
///
/// Ordered from least to most important, so an upgrade is a `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClassification {
    Trap,
    Filler,
    Useful,
    Progression,
}

impl ItemClassification {
    pub fn is_progression(&self) -> bool { *self == Self::Progression }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Accessory,
    AshOfWar,
    Goods,
    CustomWeapon,
}

impl ItemCategory {
    /// The location group listing locations whose vanilla item is of this category.
    pub fn location_group(&self) -> &'static str {
        match self {
            Self::Weapon => "Weapons",
            Self::Armor => "Armor",
            Self::Accessory => "Accessory",
            Self::AshOfWar => "Ash of war",
            Self::Goods => "Goods",
            Self::CustomWeapon => "Upgraded Weapons",
        }
    }
}

impl FromStr for ItemCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match &*s.to_ascii_lowercase() {
            "weapon" | "weapons" => Ok(Self::Weapon),
            "armor" => Ok(Self::Armor),
            "accessory" | "talisman" => Ok(Self::Accessory),
            "ashofwar" | "ash of war" => Ok(Self::AshOfWar),
            "goods" => Ok(Self::Goods),
            "customweapon" | "upgraded weapons" => Ok(Self::CustomWeapon),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "Weapon"),
            Self::Armor => write!(f, "Armor"),
            Self::Accessory => write!(f, "Accessory"),
            Self::AshOfWar => write!(f, "AshofWar"),
            Self::Goods => write!(f, "Goods"),
            Self::CustomWeapon => write!(f, "CustomWeapon"),
        }
    }
}

derive_deserialize_from_fromstr!(ItemCategory, "item category");
derive_serialize_from_display!(ItemCategory);

bitflags! {
    #[derive(Default)]
    pub struct ItemFlags: u8 {
        /// Only exists in Shadow of the Erdtree.
        const DLC = 0x01;
        /// Added to the pool on top of the vanilla items, see `World::create_injectable_items`.
        const INJECTABLE = 0x02;
        /// Not worth a slot; its location is filled with something else.
        const SKIP = 0x04;
        const SMITHING_BELL_BEARING = 0x08;
    }
}

/// Splits a trailing stack suffix like `" x3"` off an item name.
pub fn parse_stack(name: &str) -> (&str, u32) {
    if let Some((base, count)) = name.rsplit_once(" x") {
        if let Ok(count) = count.parse() {
            return (base, count)
        }
    }
    (name, 1)
}

/// An item as authored in the bundled tables, before an ID is assigned.
#[derive(Debug, Clone)]
pub struct ItemData {
    pub name: String,
    pub game_id: Option<u32>,
    pub classification: ItemClassification,
    pub category: ItemCategory,
    pub flags: ItemFlags,
}

impl ItemData {
    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            game_id: None,
            classification: ItemClassification::Filler,
            category,
            flags: ItemFlags::default(),
        }
    }

    pub fn goods(name: impl Into<String>) -> Self { Self::new(name, ItemCategory::Goods) }
    pub fn weapon(name: impl Into<String>) -> Self { Self::new(name, ItemCategory::Weapon) }
    pub fn armor(name: impl Into<String>) -> Self { Self::new(name, ItemCategory::Armor) }
    pub fn accessory(name: impl Into<String>) -> Self { Self::new(name, ItemCategory::Accessory) }
    pub fn ash_of_war(name: impl Into<String>) -> Self { Self::new(name, ItemCategory::AshOfWar) }

    pub fn progression(mut self) -> Self {
        self.classification = ItemClassification::Progression;
        self
    }

    pub fn useful(mut self) -> Self {
        self.classification = ItemClassification::Useful;
        self
    }

    pub fn dlc(mut self) -> Self {
        self.flags |= ItemFlags::DLC;
        self
    }

    pub fn injectable(mut self) -> Self {
        self.flags |= ItemFlags::INJECTABLE;
        self
    }

    pub fn skip(mut self) -> Self {
        self.flags |= ItemFlags::SKIP;
        self
    }

    pub fn smithing_bell_bearing(mut self) -> Self {
        self.flags |= ItemFlags::SMITHING_BELL_BEARING;
        self
    }

    pub(crate) fn into_definition(self, id: ItemId) -> ItemDefinition {
        let count = parse_stack(&self.name).1;
        ItemDefinition {
            id,
            count,
            name: self.name,
            game_id: self.game_id,
            classification: self.classification,
            category: self.category,
            flags: self.flags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDefinition {
    pub name: String,
    pub id: ItemId,
    pub game_id: Option<u32>,
    pub classification: ItemClassification,
    pub category: ItemCategory,
    pub count: u32,
    pub flags: ItemFlags,
}

impl ItemDefinition {
    pub fn is_dlc(&self) -> bool { self.flags.contains(ItemFlags::DLC) }
    pub fn is_injectable(&self) -> bool { self.flags.contains(ItemFlags::INJECTABLE) }
    pub fn is_skip(&self) -> bool { self.flags.contains(ItemFlags::SKIP) }
    pub fn is_smithing_bell_bearing(&self) -> bool { self.flags.contains(ItemFlags::SMITHING_BELL_BEARING) }

    /// The name of the single item this is a stack of, e.g. `"Stonesword Key"` for `"Stonesword Key x3"`.
    pub fn base_name(&self) -> &str { parse_stack(&self.name).0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_suffix() {
        assert_eq!(parse_stack("Stonesword Key x3"), ("Stonesword Key", 3));
        assert_eq!(parse_stack("Dragon Heart"), ("Dragon Heart", 1));
        assert_eq!(parse_stack("Smithing-Stone Miner's Bell Bearing [1]"), ("Smithing-Stone Miner's Bell Bearing [1]", 1));
        assert_eq!(parse_stack("Golden Rune [1] x2"), ("Golden Rune [1]", 2));
    }

    #[test]
    fn category_keys_are_case_insensitive() {
        assert_eq!("ashofwar".parse::<ItemCategory>(), Ok(ItemCategory::AshOfWar));
        assert_eq!("Weapon".parse::<ItemCategory>(), Ok(ItemCategory::Weapon));
        assert_eq!("GOODS".parse::<ItemCategory>(), Ok(ItemCategory::Goods));
        assert!("Spell".parse::<ItemCategory>().is_err());
    }

    #[test]
    fn classification_order() {
        assert!(ItemClassification::Progression > ItemClassification::Useful);
        assert!(ItemClassification::Useful > ItemClassification::Filler);
        assert_eq!(ItemClassification::Filler.max(ItemClassification::Progression), ItemClassification::Progression);
    }
}
