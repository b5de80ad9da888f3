//! An in-memory host: stores what worlds register, fills them, and answers reachability questions.

use {
    std::collections::{
        BTreeMap,
        BTreeSet,
        HashMap,
        HashSet,
    },
    log::debug,
    crate::{
        access::Rule,
        catalog::Catalog,
        host::{
            CollectedState,
            FilledLocation,
            Host,
            PlacedItem,
            Placements,
            Player,
        },
        region::{
            Region,
            ROOT,
        },
    },
};

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("no world registered for {0}")]
    UnknownPlayer(Player),
    #[error("{0} has no location named {1:?}")]
    UnknownLocation(Player, String),
    #[error("location {0:?} is already filled")]
    AlreadyFilled(String),
}

/// Which items a sweep picks up from the locations it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collect {
    /// Only the given inventory and the starting inventory count.
    Nothing,
    Events,
    Everything,
}

#[derive(Debug, Default, Clone)]
struct PlayerGraph {
    regions: Vec<Region>,
    region_index: HashMap<String, usize>,
    indirect_conditions: BTreeSet<(String, String)>,
    completion: Rule,
    precollected: Vec<PlacedItem>,
    itempool: Vec<PlacedItem>,
    local_items: BTreeSet<String>,
}

#[derive(Debug, Default, Clone)]
pub struct Tracker {
    players: BTreeMap<Player, PlayerGraph>,
}

impl Tracker {
    fn graph(&self, player: Player) -> Result<&PlayerGraph, TrackerError> {
        self.players.get(&player).ok_or(TrackerError::UnknownPlayer(player))
    }

    pub fn region(&self, player: Player, name: &str) -> Option<&Region> {
        let graph = self.players.get(&player)?;
        graph.region_index.get(name).map(|&idx| &graph.regions[idx])
    }

    pub fn itempool(&self, player: Player) -> &[PlacedItem] {
        self.players.get(&player).map(|graph| &*graph.itempool).unwrap_or_default()
    }

    pub fn local_items(&self, player: Player) -> Option<&BTreeSet<String>> {
        self.players.get(&player).map(|graph| &graph.local_items)
    }

    pub fn indirect_conditions(&self, player: Player) -> Option<&BTreeSet<(String, String)>> {
        self.players.get(&player).map(|graph| &graph.indirect_conditions)
    }

    /// Puts an item into an empty location.
    pub fn place(&mut self, player: Player, location: &str, item: PlacedItem) -> Result<(), TrackerError> {
        let graph = self.players.get_mut(&player).ok_or(TrackerError::UnknownPlayer(player))?;
        let slot = graph.regions.iter_mut()
            .flat_map(|region| &mut region.locations)
            .find(|candidate| candidate.name == location)
            .ok_or_else(|| TrackerError::UnknownLocation(player, location.to_owned()))?;
        if slot.locked_item.is_some() {
            return Err(TrackerError::AlreadyFilled(location.to_owned()))
        }
        slot.locked_item = Some(item);
        Ok(())
    }

    /// Fills every empty location with its vanilla item, taking it out of the item pool where possible.
    pub fn place_vanilla(&mut self, player: Player, catalog: &Catalog) -> Result<usize, TrackerError> {
        let graph = self.players.get_mut(&player).ok_or(TrackerError::UnknownPlayer(player))?;
        let mut placed = 0;
        for location in graph.regions.iter_mut().flat_map(|region| &mut region.locations).filter(|location| location.locked_item.is_none()) {
            let item = match catalog.location(&location.name).and_then(|data| data.default_item_name.as_deref()) {
                Some(item) => item,
                None => continue,
            };
            let from_pool = graph.itempool.iter().position(|pooled| pooled.name == item).map(|idx| graph.itempool.swap_remove(idx));
            if let Some(item) = from_pool.or_else(|| catalog.item(item).map(|item| PlacedItem::new(item, item.classification, player))) {
                location.locked_item = Some(item);
                placed += 1;
            }
        }
        debug!("{}: placed {} vanilla items, {} left in the pool", player, placed, graph.itempool.len());
        Ok(placed)
    }

    /// Computes everything `player` can reach with `inventory` plus their starting inventory.
    pub fn sweep<'a, 'i>(&'a self, player: Player, inventory: impl IntoIterator<Item = &'i str>, collect: Collect) -> Result<Sweep<'a>, TrackerError> {
        let graph = self.graph(player)?;
        let mut sweep = Sweep {
            graph, player,
            items: HashMap::default(),
            regions: HashSet::default(),
            entrances: HashSet::default(),
            locations: HashSet::default(),
        };
        for item in graph.precollected.iter().filter(|item| item.player == player) {
            sweep.collect(&item.name);
        }
        for item in inventory {
            sweep.collect(item);
        }
        sweep.run(collect);
        Ok(sweep)
    }
}

impl Host for Tracker {
    fn add_region(&mut self, player: Player, region: Region) {
        let graph = self.players.entry(player).or_default();
        graph.region_index.insert(region.name.clone(), graph.regions.len());
        graph.regions.push(region);
    }

    fn add_indirect_condition(&mut self, player: Player, region: &str, entrance: &str) {
        self.players.entry(player).or_default().indirect_conditions.insert((region.to_owned(), entrance.to_owned()));
    }

    fn set_completion_condition(&mut self, player: Player, rule: Rule) {
        self.players.entry(player).or_default().completion = rule;
    }

    fn push_precollected(&mut self, player: Player, item: PlacedItem) {
        self.players.entry(player).or_default().precollected.push(item);
    }

    fn add_to_itempool(&mut self, player: Player, items: Vec<PlacedItem>) {
        self.players.entry(player).or_default().itempool.extend(items);
    }

    fn set_local_items(&mut self, player: Player, items: BTreeSet<String>) {
        self.players.entry(player).or_default().local_items = items;
    }
}

fn filled<'a>(graphs: impl Iterator<Item = &'a PlayerGraph>) -> Vec<FilledLocation> {
    graphs
        .flat_map(|graph| &graph.regions)
        .flat_map(|region| &region.locations)
        .filter_map(|location| location.locked_item.as_ref().map(|item| FilledLocation {
            name: location.name.clone(),
            address: location.address,
            item: item.clone(),
        }))
        .collect()
}

impl Placements for Tracker {
    fn filled_locations(&self, player: Player) -> Vec<FilledLocation> {
        filled(self.players.get(&player).into_iter())
    }

    fn all_filled_locations(&self) -> Vec<FilledLocation> {
        filled(self.players.values())
    }
}

/// The result of [`Tracker::sweep`].
#[derive(Debug)]
pub struct Sweep<'a> {
    graph: &'a PlayerGraph,
    player: Player,
    items: HashMap<String, u32>,
    regions: HashSet<String>,
    entrances: HashSet<String>,
    locations: HashSet<String>,
}

impl<'a> Sweep<'a> {
    fn collect(&mut self, item: &str) {
        *self.items.entry(item.to_owned()).or_default() += 1;
    }

    /// Expands reachability until nothing changes. Each pass may make new rules true, so passes repeat.
    fn run(&mut self, collect: Collect) {
        let graph = self.graph;
        self.regions.insert(ROOT.to_owned());
        loop {
            let mut changed = false;
            for region in &graph.regions {
                if !self.regions.contains(&region.name) { continue }
                for exit in &region.exits {
                    if !self.entrances.contains(&exit.name) && exit.rule.eval(&*self, self.player) {
                        self.entrances.insert(exit.name.clone());
                        self.regions.insert(exit.to.clone());
                        changed = true;
                    }
                }
                for location in &region.locations {
                    if !self.locations.contains(&location.name) && location.rule.eval(&*self, self.player) {
                        self.locations.insert(location.name.clone());
                        changed = true;
                        if let Some(item) = &location.locked_item {
                            let collected = match collect {
                                Collect::Nothing => false,
                                Collect::Events => item.is_event(),
                                Collect::Everything => true,
                            };
                            if collected && item.player == self.player {
                                self.collect(&item.name);
                            }
                        }
                    }
                }
            }
            if !changed { break }
        }
    }

    pub fn can_beat_game(&self) -> bool {
        self.graph.completion.eval(self, self.player)
    }

    pub fn reachable_regions(&self) -> BTreeSet<&str> {
        self.regions.iter().map(|region| &**region).collect()
    }

    pub fn reachable_locations(&self) -> BTreeSet<&str> {
        self.locations.iter().map(|location| &**location).collect()
    }

    /// Collected items with their counts.
    pub fn items(&self) -> BTreeMap<&str, u32> {
        self.items.iter().map(|(item, &count)| (&**item, count)).collect()
    }
}

impl CollectedState for Sweep<'_> {
    fn count(&self, item: &str, player: Player) -> u32 {
        if player != self.player { return 0 }
        self.items.get(item).copied().unwrap_or_default()
    }

    fn can_reach_region(&self, region: &str, player: Player) -> bool {
        player == self.player && self.regions.contains(region)
    }

    fn can_reach_entrance(&self, entrance: &str, player: Player) -> bool {
        player == self.player && self.entrances.contains(entrance)
    }

    fn can_reach_location(&self, location: &str, player: Player) -> bool {
        player == self.player && self.locations.contains(location)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{
            catalog::CATALOG,
            model::ELDEN_BEAST,
            region::{
                Entrance,
                Location,
                ProgressType,
            },
            settings::{
                EndingCondition,
                GenerationPolicy,
                Options,
                WorldLogic,
            },
            world::World,
        },
        super::*,
    };

    const PLAYER: Player = Player(1);

    fn tracker(options: Options) -> (World<'static>, Tracker) {
        let mut world = World::new(PLAYER, "Tarnished", options, &CATALOG, &GenerationPolicy::default(), 3).expect("invalid options");
        world.generate().expect("generation failed");
        let mut tracker = Tracker::default();
        world.register(&mut tracker);
        tracker.place_vanilla(PLAYER, &CATALOG).expect("world not registered");
        (world, tracker)
    }

    #[test]
    fn registration() {
        let (world, tracker) = tracker(Options::default());
        assert_eq!(tracker.region(PLAYER, ROOT).map(|region| region.exits.len()), Some(1));
        assert_eq!(tracker.indirect_conditions(PLAYER), Some(world.indirect_conditions()));
        assert!(tracker.filled_locations(PLAYER).len() >= world.locations().count() - 1);
        assert!(tracker.filled_locations(Player(2)).is_empty());
        assert!(matches!(tracker.sweep(Player(2), [], Collect::Nothing), Err(TrackerError::UnknownPlayer(_))));
    }

    #[test]
    fn place() {
        let mut tracker = Tracker::default();
        let mut region = Region::new("Menu", PLAYER);
        region.locations.push(Location {
            name: format!("A"),
            address: None,
            region: format!("Menu"),
            progress_type: ProgressType::Default,
            rule: Rule::True,
            item_rule: Default::default(),
            locked_item: None,
        });
        tracker.add_region(PLAYER, region);
        tracker.place(PLAYER, "A", PlacedItem::event("A", PLAYER)).expect("failed to place");
        assert!(matches!(tracker.place(PLAYER, "A", PlacedItem::event("A", PLAYER)), Err(TrackerError::AlreadyFilled(_))));
        assert!(matches!(tracker.place(PLAYER, "B", PlacedItem::event("B", PLAYER)), Err(TrackerError::UnknownLocation(..))));
    }

    #[test]
    fn region_lock_gating() {
        let (world, tracker) = tracker(Options { world_logic: WorldLogic::RegionLock, ..Options::default() });
        assert!(world.precollected().iter().all(|item| item.name != "Weeping Lock"));
        let sweep = tracker.sweep(PLAYER, [], Collect::Events).expect("world not registered");
        assert!(sweep.reachable_regions().contains("Limgrave"));
        assert!(!sweep.reachable_regions().contains("Weeping Peninsula"));
        assert!(!sweep.reachable_regions().contains("Castle Morne"));
        let sweep = tracker.sweep(PLAYER, ["Weeping Lock"], Collect::Events).expect("world not registered");
        assert!(sweep.reachable_regions().contains("Weeping Peninsula"));
        assert!(sweep.reachable_regions().contains("Castle Morne"));
    }

    #[test]
    fn key_economy_is_monotone() {
        let (_, tracker) = tracker(Options { world_logic: WorldLogic::OpenWorld, ..Options::default() });
        let mut previous = BTreeSet::default();
        for keys in 0..=15 {
            let inventory = vec!["Stonesword Key"; keys];
            let sweep = tracker.sweep(PLAYER, inventory, Collect::Nothing).expect("world not registered");
            let reachable = sweep.reachable_locations().into_iter().map(str::to_owned).collect::<BTreeSet<_>>();
            assert!(reachable.is_superset(&previous), "lost locations at {} keys", keys);
            let fringefolk = sweep.reachable_regions().contains("Fringefolk Hero's Grave");
            assert_eq!(fringefolk, keys >= 3);
            previous = reachable;
        }
    }

    #[test]
    fn completion_selection() {
        for (ending_condition, enable_dlc) in [
            (EndingCondition::FinalBoss, false),
            (EndingCondition::FinalBoss, true),
            (EndingCondition::EldenBeast, true),
            (EndingCondition::AllRemembrances, false),
            (EndingCondition::AllBosses, true),
        ] {
            let (world, _) = tracker(Options { ending_condition, enable_dlc, ..Options::default() });
            let locations = world.completion_condition().location_names();
            match ending_condition {
                EndingCondition::FinalBoss if enable_dlc => assert_eq!(locations, BTreeSet::from(["EI: Consort Radahn"])),
                EndingCondition::FinalBoss | EndingCondition::EldenBeast => assert_eq!(locations, BTreeSet::from([ELDEN_BEAST])),
                EndingCondition::AllRemembrances => {
                    let expected = CATALOG.location_group("Remembrance").expect("no remembrance group").iter()
                        .filter_map(|name| CATALOG.location(name))
                        .filter(|location| !location.is_dlc() && !location.is_missable())
                        .map(|location| &*location.name)
                        .collect::<BTreeSet<_>>();
                    assert!(expected.contains("SC: Remembrance of the Grafted - boss drop"));
                    assert_eq!(locations, expected);
                }
                EndingCondition::AllBosses => {
                    assert!(locations.contains("SA: Remembrance of the Wild Boar Rider - boss drop"));
                    assert!(!locations.contains("CA: Ornamental Straight Sword - boss drop"));
                }
            }
        }
    }

    #[test]
    fn can_beat_game() {
        let mut tracker = Tracker::default();
        let mut menu = Region::new(ROOT, PLAYER);
        menu.exits.push(Entrance { name: format!("New Game"), from: ROOT.to_owned(), to: format!("Throne"), rule: Rule::item("Rold Medallion") });
        tracker.add_region(PLAYER, menu);
        let mut throne = Region::new("Throne", PLAYER);
        throne.locations.push(Location {
            name: ELDEN_BEAST.to_owned(),
            address: None,
            region: format!("Throne"),
            progress_type: ProgressType::Default,
            rule: Rule::True,
            item_rule: Default::default(),
            locked_item: Some(PlacedItem::event(ELDEN_BEAST, PLAYER)),
        });
        tracker.add_region(PLAYER, throne);
        tracker.set_completion_condition(PLAYER, Rule::location(ELDEN_BEAST));
        assert!(!tracker.sweep(PLAYER, [], Collect::Events).expect("world not registered").can_beat_game());
        let sweep = tracker.sweep(PLAYER, ["Rold Medallion"], Collect::Events).expect("world not registered");
        assert!(sweep.can_beat_game());
        assert_eq!(sweep.items().get(ELDEN_BEAST), Some(&1));
        tracker.push_precollected(PLAYER, PlacedItem::event("Rold Medallion", PLAYER));
        assert!(tracker.sweep(PLAYER, [], Collect::Nothing).expect("world not registered").can_beat_game());
    }
}
