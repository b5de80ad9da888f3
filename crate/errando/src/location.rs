use {
    std::fmt,
    bitflags::bitflags,
    serde::{
        Deserialize,
        Serialize,
    },
};

pub const LOCATION_BASE_ID: u64 = 7_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Hands out sequential IDs. One allocator is owned by each catalog construction.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u64 { self.next }
}

bitflags! {
    #[derive(Default)]
    pub struct LocationFlags: u32 {
        /// Can become permanently unreachable in normal play.
        const MISSABLE = 0x0001;
        const DLC = 0x0002;
        /// Behind an NPC questline or interaction.
        const NPC = 0x0004;
        const PROMINENT = 0x0008;
        /// Its vanilla item is required to progress.
        const PROGRESSION = 0x0010;
        const MAIN_BOSS = 0x0020;
        const BOSS = 0x0040;
        const DROP = 0x0080;
        const HOSTILE_NPC = 0x0100;
        const SHOP = 0x0200;
        /// Only available for a window of time nobody has fully mapped out.
        const CONDITIONAL = 0x0400;
        const HIDDEN = 0x0800;
        const SCARAB = 0x1000;
        const RISE_PUZZLE = 0x2000;
        const REMEMBRANCE = 0x4000;
        const SMITHING_BELL_BEARING = 0x8000;
        /// In the whiteout around Yelough Anix on the Consecrated Snowfield.
        const BLIZZARD = 0x10000;
    }
}

/// A location as authored in the bundled tables, before it is assigned a region and an ID.
#[derive(Debug, Clone)]
pub struct LocationData {
    pub name: String,
    pub default_item_name: Option<String>,
    pub flags: LocationFlags,
    pub static_key: Option<String>,
}

impl LocationData {
    pub fn new(name: impl Into<String>, default_item_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_item_name: Some(default_item_name.into()),
            flags: LocationFlags::default(),
            static_key: None,
        }
    }

    /// A pure progression milestone. Never holds a real item.
    pub fn event(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_item_name: None,
            flags: LocationFlags::default(),
            static_key: None,
        }
    }

    fn flag(mut self, flag: LocationFlags) -> Self {
        self.flags |= flag;
        self
    }

    pub fn missable(self) -> Self { self.flag(LocationFlags::MISSABLE) }
    pub fn dlc(self) -> Self { self.flag(LocationFlags::DLC) }
    pub fn npc(self) -> Self { self.flag(LocationFlags::NPC) }
    pub fn prominent(self) -> Self { self.flag(LocationFlags::PROMINENT) }
    pub fn progression(self) -> Self { self.flag(LocationFlags::PROGRESSION) }
    pub fn main_boss(self) -> Self { self.flag(LocationFlags::MAIN_BOSS) }
    pub fn boss(self) -> Self { self.flag(LocationFlags::BOSS) }
    pub fn drop(self) -> Self { self.flag(LocationFlags::DROP) }
    pub fn hostile_npc(self) -> Self { self.flag(LocationFlags::HOSTILE_NPC) }
    pub fn shop(self) -> Self { self.flag(LocationFlags::SHOP) }
    pub fn conditional(self) -> Self { self.flag(LocationFlags::CONDITIONAL) }
    pub fn hidden(self) -> Self { self.flag(LocationFlags::HIDDEN) }
    pub fn scarab(self) -> Self { self.flag(LocationFlags::SCARAB) }
    pub fn rise_puzzle(self) -> Self { self.flag(LocationFlags::RISE_PUZZLE) }
    pub fn remembrance(self) -> Self { self.flag(LocationFlags::REMEMBRANCE) }
    pub fn blizzard(self) -> Self { self.flag(LocationFlags::BLIZZARD) }

    pub fn static_key(mut self, key: impl Into<String>) -> Self {
        self.static_key = Some(key.into());
        self
    }

    /// Normalizes implied flags and assigns an ID unless this is an event.
    pub(crate) fn into_definition(self, region: &str, region_value: usize, dlc_region: bool, ids: &mut IdAllocator) -> LocationDefinition {
        let mut flags = self.flags;
        if flags.intersects(LocationFlags::SCARAB | LocationFlags::HOSTILE_NPC) { flags |= LocationFlags::DROP }
        if flags.intersects(LocationFlags::BOSS | LocationFlags::MAIN_BOSS) { flags |= LocationFlags::PROMINENT }
        if dlc_region { flags |= LocationFlags::DLC }
        let id = self.default_item_name.is_some().then(|| LocationId(ids.next_id()));
        LocationDefinition {
            id,
            flags,
            region: region.to_owned(),
            region_value,
            name: self.name,
            default_item_name: self.default_item_name,
            static_key: self.static_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDefinition {
    pub name: String,
    pub default_item_name: Option<String>,
    pub id: Option<LocationId>,
    pub region: String,
    pub region_value: usize,
    pub flags: LocationFlags,
    pub static_key: Option<String>,
}

impl LocationDefinition {
    pub fn is_event(&self) -> bool { self.default_item_name.is_none() }
    pub fn is_missable(&self) -> bool { self.flags.contains(LocationFlags::MISSABLE) }
    pub fn is_dlc(&self) -> bool { self.flags.contains(LocationFlags::DLC) }
    pub fn is_npc(&self) -> bool { self.flags.contains(LocationFlags::NPC) }
    pub fn is_prominent(&self) -> bool { self.flags.contains(LocationFlags::PROMINENT) }
    pub fn is_progression_gate(&self) -> bool { self.flags.contains(LocationFlags::PROGRESSION) }
    pub fn is_main_boss_reward(&self) -> bool { self.flags.contains(LocationFlags::MAIN_BOSS) }
    pub fn is_boss_reward(&self) -> bool { self.flags.intersects(LocationFlags::BOSS | LocationFlags::MAIN_BOSS) }
    pub fn is_drop(&self) -> bool { self.flags.contains(LocationFlags::DROP) }
    pub fn is_hostile_npc_reward(&self) -> bool { self.flags.contains(LocationFlags::HOSTILE_NPC) }
    pub fn is_friendly_npc_reward(&self) -> bool { self.is_npc() }
    pub fn is_shop(&self) -> bool { self.flags.contains(LocationFlags::SHOP) }
    pub fn is_conditional(&self) -> bool { self.flags.contains(LocationFlags::CONDITIONAL) }
    pub fn is_hidden(&self) -> bool { self.flags.contains(LocationFlags::HIDDEN) }
    pub fn is_scarab(&self) -> bool { self.flags.contains(LocationFlags::SCARAB) }
    pub fn is_rise_puzzle(&self) -> bool { self.flags.contains(LocationFlags::RISE_PUZZLE) }
    pub fn is_remembrance(&self) -> bool { self.flags.contains(LocationFlags::REMEMBRANCE) }
    pub fn is_blizzard(&self) -> bool { self.flags.contains(LocationFlags::BLIZZARD) }
    pub fn is_smithing_bell_bearing(&self) -> bool { self.flags.contains(LocationFlags::SMITHING_BELL_BEARING) }

    /// The key the game client uses to find this location's vanilla item.
    pub fn key(&self) -> Option<String> {
        self.static_key.clone().or_else(|| self.default_item_name.as_ref().map(|item| format!("{}/{}", self.region, item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implied_flags() {
        let mut ids = IdAllocator::new(LOCATION_BASE_ID);
        let scarab = LocationData::new("LG/SR: Incantation Scarab - scarab", "Incantation Scarab").scarab().into_definition("Limgrave", 3, false, &mut ids);
        assert!(scarab.is_drop());
        let invader = LocationData::new("LG/(SWV): Black Knife - Nerijus", "Black Knife").hostile_npc().into_definition("Limgrave", 3, false, &mut ids);
        assert!(invader.is_drop());
        let boss = LocationData::new("SC: Godrick's Great Rune - boss drop", "Godrick's Great Rune").main_boss().into_definition("Stormveil Castle", 5, false, &mut ids);
        assert!(boss.is_prominent() && boss.is_boss_reward());
        let dlc = LocationData::new("GP: Scadutree Fragment - church", "Scadutree Fragment").into_definition("Gravesite Plain", 40, true, &mut ids);
        assert!(dlc.is_dlc());
    }

    #[test]
    fn events_have_no_id() {
        let mut ids = IdAllocator::new(LOCATION_BASE_ID);
        let first = LocationData::new("CA: Ornamental Straight Sword - boss drop", "Ornamental Straight Sword").into_definition("Chapel of Anticipation", 0, false, &mut ids);
        let event = LocationData::event("ET: Elden Beast").into_definition("Elden Throne", 30, false, &mut ids);
        let second = LocationData::new("SG: Tarnished's Wizened Finger - start", "Tarnished's Wizened Finger").into_definition("Stranded Graveyard", 1, false, &mut ids);
        assert_eq!(first.id, Some(LocationId(LOCATION_BASE_ID)));
        assert_eq!(event.id, None);
        assert_eq!(second.id, Some(LocationId(LOCATION_BASE_ID + 1)));
    }

    #[test]
    fn separate_allocators_do_not_share_ids() {
        let mut a = IdAllocator::new(LOCATION_BASE_ID);
        let mut b = IdAllocator::new(LOCATION_BASE_ID);
        assert_eq!(a.next_id(), b.next_id());
        assert_eq!(a.peek(), LOCATION_BASE_ID + 1);
    }
}
