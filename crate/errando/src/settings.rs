//! Player options, their validation, and the location policies derived from them.

use {
    std::{
        collections::BTreeSet,
        convert::TryFrom,
        fmt,
        str::FromStr,
    },
    collect_mac::collect,
    enum_iterator::Sequence,
    serde::{
        Deserialize,
        Serialize,
    },
    serde_plain::{
        derive_deserialize_from_fromstr,
        derive_serialize_from_display,
    },
    smart_default::SmartDefault,
    crate::{
        catalog::Catalog,
        item::{
            ItemCategory,
            ItemClassification,
        },
        location::LocationDefinition,
    },
};

/// Declares an option with numbered, snake_case-named choices.
macro_rules! choice_option {
    ($(#[$attr:meta])* $name:ident, $description:literal { $($(#[$variant_attr:meta])* $variant:ident = $value:literal => $key:literal,)+ }) => {
        $(#[$attr])*
        #[derive(Debug, SmartDefault, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
        pub enum $name {
            $($(#[$variant_attr])* $variant,)+
        }

        impl $name {
            pub fn value(&self) -> u8 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(value: u8) -> Result<Self, u8> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(value),
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, ()> {
                match &*s.to_ascii_lowercase() {
                    $($key => Ok(Self::$variant),)+
                    s => s.parse::<u8>().ok().and_then(|value| Self::try_from(value).ok()).ok_or(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($key),)+
                }
            }
        }

        derive_deserialize_from_fromstr!($name, $description);
        derive_serialize_from_display!($name);
    };
}

choice_option!(EndingCondition, "ending condition" {
    #[default] FinalBoss = 0 => "final_boss",
    EldenBeast = 1 => "elden_beast",
    AllRemembrances = 2 => "all_remembrances",
    AllBosses = 3 => "all_bosses",
});

choice_option!(WorldLogic, "world logic" {
    /// Regions are gated behind lock items.
    #[default] RegionLock = 0 => "region_lock",
    /// Accepted for compatibility. Adds no gating.
    RegionLockBosses = 1 => "region_lock_bosses",
    OpenWorld = 2 => "open_world",
});

choice_option!(LateDlc, "late DLC" {
    #[default] Off = 0 => "off",
    /// The DLC is only expected after both Haligtree medallion halves and the Rold medallion.
    AfterMedallion = 1 => "after_medallion",
});

choice_option!(SmithingBellBearing, "smithing bell bearing option" {
    Randomize = 0 => "randomize",
    /// Bell bearings become progression and are required for the area after the one they are normally found in.
    #[default] ProgressionRandomize = 1 => "progression_randomize",
    DoNotRandomize = 2 => "do_not_randomize",
});

choice_option!(ExcludedLocationBehavior, "excluded location behavior" {
    AllowUseful = 1 => "allow_useful",
    #[default] ForbidUseful = 2 => "forbid_useful",
    DoNotRandomize = 3 => "do_not_randomize",
});

choice_option!(MissableLocationBehavior, "missable location behavior" {
    /// Missable locations may hold progression. Considered an extreme option.
    RandomizeFully = 0 => "randomize_fully",
    AllowUseful = 1 => "allow_useful",
    #[default] ForbidUseful = 2 => "forbid_useful",
    DoNotRandomize = 3 => "do_not_randomize",
});

/// How strongly a location is kept away from important items. Ordered by strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence)]
pub enum Exclusion {
    /// No progression items.
    AllowUseful,
    /// No progression or useful items.
    ForbidUseful,
    /// Keeps its vanilla item.
    DoNotRandomize,
}

impl From<ExcludedLocationBehavior> for Exclusion {
    fn from(behavior: ExcludedLocationBehavior) -> Self {
        match behavior {
            ExcludedLocationBehavior::AllowUseful => Self::AllowUseful,
            ExcludedLocationBehavior::ForbidUseful => Self::ForbidUseful,
            ExcludedLocationBehavior::DoNotRandomize => Self::DoNotRandomize,
        }
    }
}

impl MissableLocationBehavior {
    pub fn exclusion(&self) -> Option<Exclusion> {
        match self {
            Self::RandomizeFully => None,
            Self::AllowUseful => Some(Exclusion::AllowUseful),
            Self::ForbidUseful => Some(Exclusion::ForbidUseful),
            Self::DoNotRandomize => Some(Exclusion::DoNotRandomize),
        }
    }
}

/// A category of locations the player wants progression items in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum ImportantLocation {
    /// Main boss remembrance drops.
    Remembrance,
    /// Golden Seeds found at Sites of Grace, not from bosses or NPCs.
    Seedtree,
    /// Crystal Tears.
    Basin,
    /// Sacred Tears.
    Church,
    Map,
    /// Scadutree Fragments.
    Fragment,
    /// Miquella's Crosses.
    Cross,
    /// Revered Spirit Ash.
    Revered,
    /// Vanilla key item locations.
    KeyItem,
}

impl ImportantLocation {
    /// `default_classification` is the player's effective classification of the location's vanilla item.
    pub fn matches(&self, location: &LocationDefinition, default_classification: Option<ItemClassification>) -> bool {
        let item = location.default_item_name.as_deref().unwrap_or_default();
        match self {
            Self::Remembrance => location.is_remembrance(),
            Self::Seedtree => item == "Golden Seed" && !location.is_boss_reward() && !location.is_npc(),
            Self::Basin => item.ends_with("Crystal Tear"),
            Self::Church => item == "Sacred Tear",
            Self::Map => item.starts_with("Map: "),
            Self::Fragment => item.starts_with("Scadutree Fragment"),
            Self::Cross => location.name.contains("Miquella's Cross"),
            Self::Revered => item.starts_with("Revered Spirit Ash"),
            Self::KeyItem => location.is_progression_gate() || default_classification.map_or(false, |classification| classification.is_progression()),
        }
    }
}

impl FromStr for ImportantLocation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match &*s.to_ascii_lowercase() {
            "remembrance" => Ok(Self::Remembrance),
            "seedtree" => Ok(Self::Seedtree),
            "basin" => Ok(Self::Basin),
            "church" => Ok(Self::Church),
            "map" => Ok(Self::Map),
            "fragment" => Ok(Self::Fragment),
            "cross" => Ok(Self::Cross),
            "revered" => Ok(Self::Revered),
            "keyitem" | "key item" => Ok(Self::KeyItem),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ImportantLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remembrance => write!(f, "Remembrance"),
            Self::Seedtree => write!(f, "Seedtree"),
            Self::Basin => write!(f, "Basin"),
            Self::Church => write!(f, "Church"),
            Self::Map => write!(f, "Map"),
            Self::Fragment => write!(f, "Fragment"),
            Self::Cross => write!(f, "Cross"),
            Self::Revered => write!(f, "Revered"),
            Self::KeyItem => write!(f, "KeyItem"),
        }
    }
}

derive_deserialize_from_fromstr!(ImportantLocation, "important location category");
derive_serialize_from_display!(ImportantLocation);

#[derive(Debug, SmartDefault, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    pub ending_condition: EndingCondition,
    pub world_logic: WorldLogic,
    /// In open world, regions you could reach early are only expected after their usual predecessor.
    #[default = true]
    pub soft_logic: bool,
    /// Great runes needed to enter Leyndell in open world.
    #[default = 2]
    pub great_runes_required: u8,
    /// Leyndell, Royal Capital stays accessible after it turns ashen.
    pub royal_access: bool,
    pub enable_dlc: bool,
    /// Messmer's Kindling must be collected to enter Enir-Ilim.
    pub messmer_kindle: bool,
    #[default = 5]
    pub messmer_kindle_required: u8,
    #[default = 10]
    pub messmer_kindle_max: u8,
    pub late_dlc: LateDlc,
    pub enemy_rando: bool,
    #[default = true]
    pub material_rando: bool,
    pub death_link: bool,
    #[default = true]
    pub random_start: bool,
    pub auto_equip: bool,
    pub auto_upgrade: bool,
    pub smithing_bell_bearing_option: SmithingBellBearing,
    /// Shops selling spells only offer spells.
    pub spell_shop_spells_only: bool,
    /// Filler stays in this world. Only progression and useful items go to other players.
    #[default = true]
    pub local_item_option: bool,
    /// Categories whose filler may still go to other players.
    #[default(_code = "collect![ItemCategory::Weapon, ItemCategory::Armor, ItemCategory::Accessory, ItemCategory::AshOfWar]")]
    pub exclude_local_item_only: BTreeSet<ItemCategory>,
    #[default(_code = "collect![ImportantLocation::Remembrance, ImportantLocation::Seedtree, ImportantLocation::Map]")]
    pub important_locations: BTreeSet<ImportantLocation>,
    /// Location names or location group names.
    pub exclude_locations: BTreeSet<String>,
    pub excluded_location_behavior: ExcludedLocationBehavior,
    pub missable_location_behavior: MissableLocationBehavior,
}

/// Restrictions imposed by whoever runs the generation, not by the player.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub disable_extreme_options: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{option} must be between {min} and {max}, got {value}")]
    OutOfRange {
        option: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
    #[error("messmer_kindle_required ({required}) is greater than messmer_kindle_max ({max})")]
    KindleRequiredAboveMax {
        required: u8,
        max: u8,
    },
    #[error("exclude_locations: no location or location group named {0:?}")]
    UnknownExcludedLocation(String),
    #[error("missable_location_behavior is randomize_fully, but extreme options are disabled on this host; choose a stricter missable_location_behavior")]
    ExtremeOption,
}

fn check_range(option: &'static str, value: u8, min: u8, max: u8) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { option, value, min, max })
    }
}

impl Options {
    pub fn validate(&self, policy: &GenerationPolicy, catalog: &Catalog) -> Result<(), ConfigError> {
        check_range("great_runes_required", self.great_runes_required, 1, 7)?;
        check_range("messmer_kindle_required", self.messmer_kindle_required, 2, 15)?;
        check_range("messmer_kindle_max", self.messmer_kindle_max, 2, 15)?;
        if self.messmer_kindle && self.messmer_kindle_required > self.messmer_kindle_max {
            return Err(ConfigError::KindleRequiredAboveMax { required: self.messmer_kindle_required, max: self.messmer_kindle_max })
        }
        if policy.disable_extreme_options && self.missable_location_behavior == MissableLocationBehavior::RandomizeFully {
            return Err(ConfigError::ExtremeOption)
        }
        self.resolve_excluded_locations(catalog)?;
        Ok(())
    }

    /// Expands `exclude_locations` into location names. Group names are matched case-insensitively.
    pub fn resolve_excluded_locations(&self, catalog: &Catalog) -> Result<BTreeSet<String>, ConfigError> {
        let mut excluded = BTreeSet::default();
        for entry in &self.exclude_locations {
            if catalog.location(entry).is_some() {
                excluded.insert(entry.clone());
            } else if let Some(group) = catalog.location_group_ignore_case(entry) {
                excluded.extend(group.iter().cloned());
            } else {
                return Err(ConfigError::UnknownExcludedLocation(entry.clone()))
            }
        }
        Ok(excluded)
    }

    /// The strictest exclusion that applies to a location.
    ///
    /// `missable` contributes the missable behavior and `excluded` (membership in the player's excluded set) contributes the excluded behavior.
    /// Commutative: neither policy is applied "after" the other.
    pub fn exclusion_for(&self, missable: bool, excluded: bool) -> Option<Exclusion> {
        let from_missable = if missable { self.missable_location_behavior.exclusion() } else { None };
        let from_excluded = excluded.then(|| Exclusion::from(self.excluded_location_behavior));
        from_missable.max(from_excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.great_runes_required, 2);
        assert_eq!(options.world_logic, WorldLogic::RegionLock);
        assert_eq!(options.smithing_bell_bearing_option, SmithingBellBearing::ProgressionRandomize);
        assert_eq!(options.missable_location_behavior, MissableLocationBehavior::ForbidUseful);
        assert!(options.important_locations.contains(&ImportantLocation::Remembrance));
        assert!(!options.exclude_local_item_only.contains(&ItemCategory::Goods));
    }

    #[test]
    fn parse_from_json() {
        let options = serde_json::from_str::<Options>(r#"{
            "world_logic": "open_world",
            "ending_condition": "2",
            "important_locations": ["remembrance", "KEYITEM"],
            "missable_location_behavior": "do_not_randomize"
        }"#).expect("failed to parse options");
        assert_eq!(options.world_logic, WorldLogic::OpenWorld);
        assert_eq!(options.ending_condition, EndingCondition::AllRemembrances);
        assert_eq!(options.important_locations, collect![ImportantLocation::Remembrance, ImportantLocation::KeyItem]);
        assert_eq!(options.missable_location_behavior, MissableLocationBehavior::DoNotRandomize);
        assert_eq!(options.great_runes_required, 2);
    }

    #[test]
    fn numeric_values() {
        for condition in enum_iterator::all::<EndingCondition>() {
            assert_eq!(EndingCondition::try_from(condition.value()), Ok(condition));
        }
        assert_eq!(MissableLocationBehavior::try_from(4), Err(4));
        assert_eq!(ExcludedLocationBehavior::ForbidUseful.value(), 2);
        assert_eq!(WorldLogic::OpenWorld.to_string(), "open_world");
    }

    #[test]
    fn exclusion_policy_is_commutative_and_strictest_wins() {
        for missable in enum_iterator::all::<MissableLocationBehavior>() {
            for excluded in enum_iterator::all::<ExcludedLocationBehavior>() {
                let options = Options { missable_location_behavior: missable, excluded_location_behavior: excluded, ..Options::default() };
                let both = options.exclusion_for(true, true);
                let only_missable = options.exclusion_for(true, false);
                let only_excluded = options.exclusion_for(false, true);
                assert_eq!(both, only_missable.max(only_excluded));
                assert_eq!(both, only_excluded.max(only_missable));
                assert!(both >= only_missable && both >= only_excluded);
                assert_eq!(options.exclusion_for(false, false), None);
            }
        }
        let options = Options {
            missable_location_behavior: MissableLocationBehavior::AllowUseful,
            excluded_location_behavior: ExcludedLocationBehavior::DoNotRandomize,
            ..Options::default()
        };
        assert_eq!(options.exclusion_for(true, true), Some(Exclusion::DoNotRandomize));
        let options = Options { missable_location_behavior: MissableLocationBehavior::RandomizeFully, ..Options::default() };
        assert_eq!(options.exclusion_for(true, false), None);
    }

    #[test]
    fn validation() {
        let catalog = &*crate::catalog::CATALOG;
        let policy = GenerationPolicy::default();
        assert!(Options::default().validate(&policy, catalog).is_ok());
        let options = Options { great_runes_required: 8, ..Options::default() };
        assert!(matches!(options.validate(&policy, catalog), Err(ConfigError::OutOfRange { option: "great_runes_required", .. })));
        let options = Options { messmer_kindle: true, messmer_kindle_required: 12, messmer_kindle_max: 6, ..Options::default() };
        assert!(matches!(options.validate(&policy, catalog), Err(ConfigError::KindleRequiredAboveMax { .. })));
        let options = Options { exclude_locations: collect![format!("Nowhere: Nothing - nowhere")], ..Options::default() };
        assert!(matches!(options.validate(&policy, catalog), Err(ConfigError::UnknownExcludedLocation(_))));
        let options = Options { missable_location_behavior: MissableLocationBehavior::RandomizeFully, ..Options::default() };
        assert!(options.validate(&policy, catalog).is_ok());
        assert!(matches!(options.validate(&GenerationPolicy { disable_extreme_options: true }, catalog), Err(ConfigError::ExtremeOption)));
    }

    #[test]
    fn excluded_groups_expand() {
        let catalog = &*crate::catalog::CATALOG;
        let options = Options { exclude_locations: collect![format!("hidden")], ..Options::default() };
        let excluded = options.resolve_excluded_locations(catalog).expect("hidden is a location group");
        assert!(!excluded.is_empty());
        assert!(excluded.iter().all(|name| catalog.location(name).map_or(false, |location| location.is_hidden())));
        let options = Options { exclude_locations: collect![format!("blizzard")], ..Options::default() };
        let excluded = options.resolve_excluded_locations(catalog).expect("blizzard is a location group");
        assert!(excluded.contains("CS: Somberstone Miner's Bell Bearing [4] - Yelough Anix Tunnel"));
        assert!(excluded.iter().all(|name| catalog.location(name).map_or(false, |location| location.is_blizzard())));
    }
}
