//! The shared item and location catalog. Built once, then only read.

use {
    std::collections::{
        BTreeMap,
        BTreeSet,
        HashMap,
    },
    lazy_static::lazy_static,
    crate::{
        data,
        item::{
            ItemCategory,
            ItemClassification,
            ItemData,
            ItemDefinition,
            ItemFlags,
            ItemId,
            ITEM_BASE_ID,
        },
        location::{
            IdAllocator,
            LocationData,
            LocationDefinition,
            LocationFlags,
            LOCATION_BASE_ID,
        },
        model::{
            GreatRune,
            REGION_LOCKS,
        },
    },
};

lazy_static! {
    pub static ref CATALOG: Catalog = Catalog::elden_ring().expect("bundled catalog is invalid");
}

/// A region as authored in the bundled tables.
#[derive(Debug, Clone)]
pub struct RegionData {
    pub name: String,
    pub dlc: bool,
    pub locations: Vec<LocationData>,
}

impl RegionData {
    pub fn new(name: impl Into<String>, locations: Vec<LocationData>) -> Self {
        Self { name: name.into(), dlc: false, locations }
    }

    /// A region that only exists with the Shadow of the Erdtree expansion.
    pub fn dlc(name: impl Into<String>, locations: Vec<LocationData>) -> Self {
        Self { name: name.into(), dlc: true, locations }
    }
}

/// How regions connect: where a new game starts, plus one-way `(from, to)` edges.
#[derive(Debug, Clone)]
pub struct RegionGraph {
    pub start: String,
    pub edges: Vec<(String, String)>,
}

impl RegionGraph {
    pub fn new(start: impl Into<String>) -> Self {
        Self { start: start.into(), edges: Vec::default() }
    }

    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), to.into()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct CatalogRegion {
    pub name: String,
    pub dlc: bool,
    /// Position in the region order. Base game regions come first.
    pub value: usize,
    /// Location names, in authored order.
    pub locations: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate item name: {0}")]
    DuplicateItem(String),
    #[error("duplicate location name: {0}")]
    DuplicateLocation(String),
    #[error("duplicate region name: {0}")]
    DuplicateRegion(String),
    #[error("new game starts in unknown region {0}")]
    UnknownStart(String),
    #[error("connection from {from} to {to} names an unknown region")]
    UnknownConnection {
        from: String,
        to: String,
    },
    #[error("location {location} has unknown default item {item}")]
    UnknownDefaultItem {
        location: String,
        item: String,
    },
}

#[derive(Debug)]
pub struct Catalog {
    items: Vec<ItemDefinition>,
    items_by_name: HashMap<String, usize>,
    items_by_id: HashMap<ItemId, usize>,
    locations: Vec<LocationDefinition>,
    locations_by_name: HashMap<String, usize>,
    regions: Vec<CatalogRegion>,
    graph: RegionGraph,
    location_groups: BTreeMap<String, BTreeSet<String>>,
    item_groups: BTreeMap<String, BTreeSet<String>>,
}

impl Catalog {
    pub fn new(items: Vec<ItemData>, regions: Vec<RegionData>, graph: RegionGraph, item_ids: &mut IdAllocator, location_ids: &mut IdAllocator) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            items: Vec::with_capacity(items.len()),
            items_by_name: HashMap::default(),
            items_by_id: HashMap::default(),
            locations: Vec::default(),
            locations_by_name: HashMap::default(),
            regions: Vec::with_capacity(regions.len()),
            graph: RegionGraph::new(String::default()),
            location_groups: BTreeMap::default(),
            item_groups: BTreeMap::default(),
        };
        for item in items {
            let item = item.into_definition(ItemId(item_ids.next_id()));
            if catalog.items_by_name.insert(item.name.clone(), catalog.items.len()).is_some() {
                return Err(CatalogError::DuplicateItem(item.name))
            }
            catalog.items_by_id.insert(item.id, catalog.items.len());
            catalog.items.push(item);
        }
        for (value, region) in regions.into_iter().enumerate() {
            if catalog.regions.iter().any(|known| known.name == region.name) {
                return Err(CatalogError::DuplicateRegion(region.name))
            }
            let mut names = Vec::with_capacity(region.locations.len());
            for location in region.locations {
                let mut location = location.into_definition(&region.name, value, region.dlc, location_ids);
                if let Some(ref item_name) = location.default_item_name {
                    let item = catalog.item(item_name).ok_or_else(|| CatalogError::UnknownDefaultItem {
                        location: location.name.clone(),
                        item: item_name.clone(),
                    })?;
                    if item.is_smithing_bell_bearing() {
                        location.flags.insert(LocationFlags::SMITHING_BELL_BEARING);
                    }
                }
                if catalog.locations_by_name.insert(location.name.clone(), catalog.locations.len()).is_some() {
                    return Err(CatalogError::DuplicateLocation(location.name))
                }
                names.push(location.name.clone());
                catalog.locations.push(location);
            }
            catalog.regions.push(CatalogRegion { name: region.name, dlc: region.dlc, value, locations: names });
        }
        if catalog.region(&graph.start).is_none() {
            return Err(CatalogError::UnknownStart(graph.start))
        }
        if let Some((from, to)) = graph.edges.iter().find(|(from, to)| catalog.region(from).is_none() || catalog.region(to).is_none()) {
            return Err(CatalogError::UnknownConnection { from: from.clone(), to: to.clone() })
        }
        catalog.graph = graph;
        catalog.location_groups = catalog.project_location_groups();
        catalog.item_groups = catalog.project_item_groups();
        Ok(catalog)
    }

    /// The bundled Elden Ring and Shadow of the Erdtree tables.
    pub fn elden_ring() -> Result<Self, CatalogError> {
        Self::new(
            data::items::items(),
            data::locations::regions(),
            data::connections::graph(),
            &mut IdAllocator::new(ITEM_BASE_ID),
            &mut IdAllocator::new(LOCATION_BASE_ID),
        )
    }

    fn project_location_groups(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut groups = BTreeMap::<String, BTreeSet<String>>::default();
        let flag_groups: [(&str, fn(&LocationDefinition) -> bool); 13] = [
            ("Main Boss Rewards", LocationDefinition::is_main_boss_reward),
            ("Boss Rewards", LocationDefinition::is_boss_reward),
            ("Prominent", LocationDefinition::is_prominent),
            ("Progression", LocationDefinition::is_progression_gate),
            ("Hostile NPC Rewards", LocationDefinition::is_hostile_npc_reward),
            ("Friendly NPC Rewards", LocationDefinition::is_friendly_npc_reward),
            ("Missable", LocationDefinition::is_missable),
            ("Shop", LocationDefinition::is_shop),
            ("Hidden", LocationDefinition::is_hidden),
            ("Scarab", LocationDefinition::is_scarab),
            ("Blizzard", LocationDefinition::is_blizzard),
            ("Remembrance", LocationDefinition::is_remembrance),
            ("DLC", LocationDefinition::is_dlc),
        ];
        for (group, _) in &flag_groups {
            groups.insert(group.to_string(), BTreeSet::default());
        }
        for location in self.locations.iter().filter(|location| !location.is_event()) {
            for (group, applies) in &flag_groups {
                if applies(location) {
                    groups.entry(group.to_string()).or_default().insert(location.name.clone());
                }
            }
            if let Some(item) = location.default_item_name.as_deref().and_then(|name| self.item(name)) {
                groups.entry(item.category.location_group().to_owned()).or_default().insert(location.name.clone());
            }
            groups.entry(location.region.clone()).or_default().insert(location.name.clone());
        }
        groups
    }

    fn project_item_groups(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut groups = BTreeMap::<String, BTreeSet<String>>::default();
        for item in &self.items {
            groups.entry(item.category.location_group().to_owned()).or_default().insert(item.name.clone());
            if item.name.ends_with("Key") || item.base_name() == "Stonesword Key" {
                groups.entry(format!("Keys")).or_default().insert(item.name.clone());
            }
            if item.name.starts_with("Remembrance of") || item.name == "Elden Remembrance" {
                groups.entry(format!("Remembrances")).or_default().insert(item.name.clone());
            }
        }
        groups.insert(format!("Great Runes"), enum_iterator::all::<GreatRune>().map(|rune| rune.item_name().to_owned()).collect());
        groups.insert(format!("Region Locks"), REGION_LOCKS.iter().map(|(lock, _)| (*lock).to_owned()).collect());
        groups
    }

    pub fn item(&self, name: &str) -> Option<&ItemDefinition> {
        self.items_by_name.get(name).map(|&idx| &self.items[idx])
    }

    pub fn item_by_id(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items_by_id.get(&id).map(|&idx| &self.items[idx])
    }

    pub fn items(&self) -> &[ItemDefinition] { &self.items }

    pub fn location(&self, name: &str) -> Option<&LocationDefinition> {
        self.locations_by_name.get(name).map(|&idx| &self.locations[idx])
    }

    pub fn locations(&self) -> &[LocationDefinition] { &self.locations }

    pub fn regions(&self) -> &[CatalogRegion] { &self.regions }

    pub fn region(&self, name: &str) -> Option<&CatalogRegion> {
        self.regions.iter().find(|region| region.name == name)
    }

    pub fn graph(&self) -> &RegionGraph { &self.graph }

    /// The locations of a region, in authored order.
    pub fn region_locations<'a>(&'a self, region: &'a CatalogRegion) -> impl Iterator<Item = &'a LocationDefinition> + 'a {
        region.locations.iter().filter_map(move |name| self.location(name))
    }

    pub fn location_group(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.location_groups.get(name)
    }

    pub fn location_group_ignore_case(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.location_groups.iter().find(|(group, _)| group.eq_ignore_ascii_case(name)).map(|(_, locations)| locations)
    }

    pub fn location_groups(&self) -> &BTreeMap<String, BTreeSet<String>> { &self.location_groups }

    pub fn item_groups(&self) -> &BTreeMap<String, BTreeSet<String>> { &self.item_groups }

    /// Filler items the pool can be padded with. Without the expansion, only base game items qualify.
    pub fn filler_items(&self, dlc: bool) -> Vec<&ItemDefinition> {
        self.items.iter()
            .filter(|item| item.classification == ItemClassification::Filler)
            .filter(|item| !item.is_skip() && !item.flags.contains(ItemFlags::INJECTABLE))
            .filter(|item| dlc || !item.is_dlc())
            .collect()
    }

    /// Items of a category, used for local item restrictions.
    pub fn items_in_category(&self, category: ItemCategory) -> impl Iterator<Item = &ItemDefinition> + '_ {
        self.items.iter().filter(move |item| item.category == category)
    }
}

#[cfg(test)]
mod tests {
    use {
        std::collections::HashSet,
        super::*,
    };

    fn build(items: Vec<ItemData>, regions: Vec<RegionData>) -> Result<Catalog, CatalogError> {
        let start = regions.first().map(|region| region.name.clone()).unwrap_or_default();
        Catalog::new(items, regions, RegionGraph::new(start), &mut IdAllocator::new(1), &mut IdAllocator::new(100))
    }

    #[test]
    fn bundled_catalog_is_valid() {
        Catalog::elden_ring().expect("bundled catalog is invalid");
    }

    #[test]
    fn location_names_are_unique() {
        let mut seen = HashSet::new();
        for location in CATALOG.locations() {
            assert!(seen.insert(&location.name), "duplicate location {}", location.name);
        }
        let ids = CATALOG.locations().iter().filter_map(|location| location.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), CATALOG.locations().iter().filter(|location| !location.is_event()).count());
    }

    #[test]
    fn default_items_exist() {
        for location in CATALOG.locations() {
            if let Some(ref item) = location.default_item_name {
                assert!(CATALOG.item(item).is_some(), "{} has unknown default item {}", location.name, item);
            }
        }
    }

    #[test]
    fn scarabs_are_drops() {
        for location in CATALOG.locations().iter().filter(|location| location.is_scarab()) {
            assert!(location.is_drop(), "{} is a scarab but not a drop", location.name);
        }
    }

    #[test]
    fn base_game_regions_come_first() {
        let first_dlc = CATALOG.regions().iter().position(|region| region.dlc).expect("no DLC regions");
        assert!(CATALOG.regions()[first_dlc..].iter().all(|region| region.dlc));
        for location in CATALOG.locations() {
            let region = CATALOG.region(&location.region).expect("location in unknown region");
            assert_eq!(location.region_value, region.value);
            if region.dlc {
                assert!(location.is_dlc());
            }
        }
    }

    #[test]
    fn bell_bearing_locations_are_flagged() {
        let location = CATALOG.location("CFA: Somberstone Miner's Bell Bearing [5] - Beside the Great Bridge").expect("missing bell bearing location");
        assert!(location.is_smithing_bell_bearing());
        assert!(!CATALOG.location("CL: Map: Caelid - Rotview stele").expect("missing map location").is_smithing_bell_bearing());
    }

    #[test]
    fn groups() {
        let remembrances = CATALOG.location_group("Remembrance").expect("no remembrance group");
        assert_eq!(remembrances.len(), 25);
        assert!(CATALOG.location_group("Roundtable Hold").map_or(false, |group| !group.is_empty()));
        assert_eq!(CATALOG.location_group_ignore_case("main boss rewards"), CATALOG.location_group("Main Boss Rewards"));
        assert_eq!(CATALOG.item_groups()["Great Runes"].len(), 7);
        assert!(CATALOG.item_groups()["Keys"].contains("Stonesword Key x3"));
        assert!(CATALOG.item_groups()["Region Locks"].contains("Weeping Lock"));
        let blizzard = CATALOG.location_group("Blizzard").expect("no blizzard group");
        assert!(blizzard.contains("CS: Dragon Heart - Great Wyrm Theodorix drop"));
        assert!(blizzard.iter().all(|name| name.starts_with("CS")));
    }

    #[test]
    fn npc_rewards_can_be_friendly_and_hostile() {
        let regions = vec![RegionData::new("Limgrave", vec![
            LocationData::new("LG: Golden Rune [1] - turncoat", "Golden Rune [1]").npc().hostile_npc(),
            LocationData::new("LG: Golden Rune [1] - invader", "Golden Rune [1]").hostile_npc(),
        ])];
        let catalog = build(vec![ItemData::goods("Golden Rune [1]")], regions).expect("valid catalog");
        assert_eq!(catalog.location_group("Friendly NPC Rewards").map(BTreeSet::len), Some(1));
        assert_eq!(catalog.location_group("Hostile NPC Rewards").map(BTreeSet::len), Some(2));
    }

    #[test]
    fn filler() {
        let base = CATALOG.filler_items(false);
        let all = CATALOG.filler_items(true);
        assert!(!base.is_empty());
        assert!(base.len() < all.len());
        assert!(base.iter().all(|item| !item.is_dlc()));
    }

    #[test]
    fn duplicates_are_rejected() {
        let items = vec![ItemData::goods("Golden Rune [1]"), ItemData::goods("Golden Rune [1]")];
        assert!(matches!(build(items, Vec::default()), Err(CatalogError::DuplicateItem(_))));
        let regions = vec![RegionData::new("Limgrave", vec![
            LocationData::new("LG: Golden Rune [1] - corpse", "Golden Rune [1]"),
            LocationData::new("LG: Golden Rune [1] - corpse", "Golden Rune [1]"),
        ])];
        assert!(matches!(build(vec![ItemData::goods("Golden Rune [1]")], regions), Err(CatalogError::DuplicateLocation(_))));
        let regions = vec![RegionData::new("Limgrave", Vec::default()), RegionData::new("Limgrave", Vec::default())];
        assert!(matches!(build(Vec::default(), regions), Err(CatalogError::DuplicateRegion(_))));
    }

    #[test]
    fn unknown_default_item_is_rejected() {
        let regions = vec![RegionData::new("Limgrave", vec![LocationData::new("LG: Nothing - nowhere", "Nothing")])];
        assert!(matches!(build(Vec::default(), regions), Err(CatalogError::UnknownDefaultItem { .. })));
    }

    #[test]
    fn connections_must_name_known_regions() {
        let regions = || vec![RegionData::new("Limgrave", Vec::default()), RegionData::new("Stormveil Castle", Vec::default())];
        let catalog = Catalog::new(Vec::default(), regions(), RegionGraph::new("Limgrave").edge("Limgrave", "Stormveil Castle"), &mut IdAllocator::new(1), &mut IdAllocator::new(100)).expect("valid catalog");
        assert_eq!(catalog.graph().edges, vec![(format!("Limgrave"), format!("Stormveil Castle"))]);
        assert!(matches!(
            Catalog::new(Vec::default(), regions(), RegionGraph::new("Limgrave").edge("Limgrave", "Liurnia of the Lakes"), &mut IdAllocator::new(1), &mut IdAllocator::new(100)),
            Err(CatalogError::UnknownConnection { .. }),
        ));
        assert!(matches!(
            Catalog::new(Vec::default(), regions(), RegionGraph::new("Chapel of Anticipation"), &mut IdAllocator::new(1), &mut IdAllocator::new(100)),
            Err(CatalogError::UnknownStart(_)),
        ));
    }

    #[test]
    fn bundled_connections_start_at_the_chapel() {
        assert_eq!(CATALOG.graph().start, "Chapel of Anticipation");
        assert!(CATALOG.graph().edges.contains(&(format!("Consecrated Snowfield"), format!("Mohgwyn Palace"))));
    }

    #[test]
    fn ids_come_from_the_allocators() {
        let regions = vec![RegionData::new("Limgrave", vec![
            LocationData::new("LG: Golden Rune [1] - corpse", "Golden Rune [1]"),
            LocationData::event("LG: something happened"),
            LocationData::new("LG: Golden Rune [1] - other corpse", "Golden Rune [1]"),
        ])];
        let mut location_ids = IdAllocator::new(100);
        let catalog = Catalog::new(vec![ItemData::goods("Golden Rune [1]")], regions, RegionGraph::new("Limgrave"), &mut IdAllocator::new(1), &mut location_ids).expect("valid catalog");
        assert_eq!(catalog.item("Golden Rune [1]").map(|item| item.id), Some(ItemId(1)));
        assert_eq!(catalog.location("LG: Golden Rune [1] - other corpse").and_then(|location| location.id).map(|id| id.0), Some(101));
        assert_eq!(location_ids.peek(), 102);
    }
}
