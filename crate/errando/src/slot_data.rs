//! The payload handed to the game client after generation, and its inverse.

use {
    std::{
        collections::{
            BTreeMap,
            BTreeSet,
        },
        convert::TryFrom,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    crate::{
        host::Placements,
        settings::{
            EndingCondition,
            ExcludedLocationBehavior,
            LateDlc,
            MissableLocationBehavior,
            Options,
            SmithingBellBearing,
        },
        world::World,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum SlotDataError {
    #[error(transparent)] Json(#[from] serde_json::Error),
    #[error("invalid value {value} for {option}")]
    InvalidChoice {
        option: &'static str,
        value: u8,
    },
}

/// The options the client acts on. Choices are sent as their numeric values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlotOptions {
    pub ending_condition: u8,
    pub great_runes_required: u8,
    pub enable_dlc: bool,
    pub late_dlc: u8,
    pub death_link: bool,
    pub random_start: bool,
    pub auto_equip: bool,
    pub exclude_locations: BTreeSet<String>,
    pub excluded_location_behavior: u8,
    pub missable_location_behavior: u8,
    #[serde(default)]
    pub royal_access: bool,
    #[serde(default)]
    pub enemy_rando: bool,
    #[serde(default)]
    pub material_rando: bool,
    #[serde(default)]
    pub auto_upgrade: bool,
    #[serde(default)]
    pub spell_shop_spells_only: bool,
    #[serde(default)]
    pub smithing_bell_bearing_option: u8,
}

impl From<&Options> for SlotOptions {
    fn from(options: &Options) -> Self {
        Self {
            ending_condition: options.ending_condition.value(),
            great_runes_required: options.great_runes_required,
            enable_dlc: options.enable_dlc,
            late_dlc: options.late_dlc.value(),
            death_link: options.death_link,
            random_start: options.random_start,
            auto_equip: options.auto_equip,
            exclude_locations: options.exclude_locations.clone(),
            excluded_location_behavior: options.excluded_location_behavior.value(),
            missable_location_behavior: options.missable_location_behavior.value(),
            royal_access: options.royal_access,
            enemy_rando: options.enemy_rando,
            material_rando: options.material_rando,
            auto_upgrade: options.auto_upgrade,
            spell_shop_spells_only: options.spell_shop_spells_only,
            smithing_bell_bearing_option: options.smithing_bell_bearing_option.value(),
        }
    }
}

fn choice<T: TryFrom<u8, Error = u8>>(option: &'static str, value: u8) -> Result<T, SlotDataError> {
    T::try_from(value).map_err(|value| SlotDataError::InvalidChoice { option, value })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotData {
    pub options: SlotOptions,
    /// The multiworld's seed name, so the client can verify it is connected to the right server.
    pub seed: String,
    /// The player name to connect as.
    pub slot: String,
    /// Item IDs to in-game IDs, for every item of this player that exists after the fill.
    pub ap_ids_to_item_ids: BTreeMap<u64, u32>,
    pub item_counts: BTreeMap<u64, u32>,
    pub location_ids_to_keys: BTreeMap<u64, String>,
}

impl SlotData {
    pub(crate) fn new(world: &World<'_>, placements: &impl Placements, seed: &str) -> Self {
        let catalog = world.catalog();
        let placed = placements.all_filled_locations().into_iter()
            .map(|location| location.item)
            .filter(|item| item.player == world.player && !item.is_event())
            .chain(world.precollected().iter().cloned());
        let mut ap_ids_to_item_ids = BTreeMap::default();
        let mut item_counts = BTreeMap::default();
        for item in placed {
            let item = match item.code.and_then(|code| catalog.item_by_id(code)) {
                Some(item) => item,
                None => continue,
            };
            if let Some(game_id) = item.game_id {
                ap_ids_to_item_ids.insert(item.id.0, game_id);
            }
            if item.count != 1 {
                item_counts.insert(item.id.0, item.count);
            }
        }
        let location_ids_to_keys = placements.filled_locations(world.player).into_iter()
            .filter(|location| !location.item.is_event())
            .filter_map(|location| {
                let address = location.address?;
                let key = catalog.location(&location.name)?.key()?;
                Some((address.0, key))
            })
            .collect();
        Self {
            options: SlotOptions::from(&world.options),
            seed: seed.to_owned(),
            slot: world.player_name.clone(),
            ap_ids_to_item_ids, item_counts, location_ids_to_keys,
        }
    }

    /// Recovers the client-relevant options from a payload. Options the payload does not carry keep their defaults.
    pub fn interpret(value: &serde_json::Value) -> Result<Options, SlotDataError> {
        let slot_data = Self::deserialize(value)?;
        let options = slot_data.options;
        Ok(Options {
            ending_condition: choice::<EndingCondition>("ending_condition", options.ending_condition)?,
            great_runes_required: options.great_runes_required,
            enable_dlc: options.enable_dlc,
            late_dlc: choice::<LateDlc>("late_dlc", options.late_dlc)?,
            death_link: options.death_link,
            random_start: options.random_start,
            auto_equip: options.auto_equip,
            exclude_locations: options.exclude_locations,
            excluded_location_behavior: choice::<ExcludedLocationBehavior>("excluded_location_behavior", options.excluded_location_behavior)?,
            missable_location_behavior: choice::<MissableLocationBehavior>("missable_location_behavior", options.missable_location_behavior)?,
            royal_access: options.royal_access,
            enemy_rando: options.enemy_rando,
            material_rando: options.material_rando,
            auto_upgrade: options.auto_upgrade,
            spell_shop_spells_only: options.spell_shop_spells_only,
            smithing_bell_bearing_option: choice::<SmithingBellBearing>("smithing_bell_bearing_option", options.smithing_bell_bearing_option)?,
            ..Options::default()
        })
    }
}
