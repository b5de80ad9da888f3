//! One player's world: options and the shared catalog in, regions, rules and an item pool out.

use {
    std::{
        collections::{
            BTreeSet,
            HashMap,
            HashSet,
        },
        fmt,
        iter,
        mem,
    },
    derivative::Derivative,
    derive_more::From,
    itertools::Itertools as _,
    log::{
        debug,
        info,
        warn,
    },
    rand::{
        rngs::StdRng,
        seq::SliceRandom as _,
        SeedableRng as _,
    },
    crate::{
        access::{
            ItemRule,
            Rule,
        },
        catalog::{
            Catalog,
            CatalogRegion,
        },
        host::{
            Host,
            PlacedItem,
            Placements,
            Player,
        },
        item::ItemClassification,
        location::LocationDefinition,
        model::{
            self,
            BellBearingFamily,
            CONSORT_RADAHN,
            ELDEN_BEAST,
        },
        overlay::ItemOverlay,
        region::{
            Entrance,
            Location,
            ProgressType,
            Region,
            ROOT,
        },
        rules,
        settings::{
            ConfigError,
            EndingCondition,
            ExcludedLocationBehavior,
            Exclusion,
            GenerationPolicy,
            LateDlc,
            MissableLocationBehavior,
            Options,
            SmithingBellBearing,
            WorldLogic,
        },
        slot_data::SlotData,
    },
};

/// A broken assumption about the bundled tables or the rules written against them.
#[derive(Debug, thiserror::Error)]
pub enum Invariant {
    #[error("rule references unknown item {0:?}")]
    UnknownItem(String),
    #[error("rule references {0:?}, which is not a progression item for this player")]
    NotProgression(String),
    #[error("unknown location {0:?}")]
    UnknownLocation(String),
    #[error("unknown region {0:?}")]
    UnknownRegion(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)] Config(#[from] ConfigError),
    #[error(transparent)] Invariant(#[from] Invariant),
    #[error("location {0:?} is not randomized but was handed to the item pool")]
    UnavailableLocation(String),
}

/// A rule as passed to [`World::add_location_rule`] and [`World::add_entrance_rule`]: a full rule, or the name of a single required item.
#[derive(Debug, Clone, From)]
pub enum RuleSpec {
    Rule(Rule),
    Item(String),
}

impl From<&str> for RuleSpec {
    fn from(item: &str) -> Self {
        Self::Item(item.to_owned())
    }
}

/// Whether a location is randomized at all. Pure in its arguments.
///
/// `excluded` is the player's resolved excluded set, after priority locations were taken out of it.
pub fn is_location_available(location: &LocationDefinition, options: &Options, excluded: &BTreeSet<String>) -> bool {
    !location.is_event()
        && (options.enable_dlc || !location.is_dlc())
        && !(options.excluded_location_behavior == ExcludedLocationBehavior::DoNotRandomize && excluded.contains(&location.name))
        && !(options.missable_location_behavior == MissableLocationBehavior::DoNotRandomize && location.is_missable())
        && !(options.smithing_bell_bearing_option == SmithingBellBearing::DoNotRandomize && location.is_smithing_bell_bearing())
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct World<'a> {
    pub player: Player,
    pub player_name: String,
    pub options: Options,
    #[derivative(Debug = "ignore")]
    catalog: &'a Catalog,
    #[derivative(Debug = "ignore")]
    rng: StdRng,
    overlay: ItemOverlay,
    /// The resolved `exclude_locations` minus priority locations. Availability is computed from this and never changes after `create_regions`.
    excluded: BTreeSet<String>,
    /// The excluded locations the spoiler reports.
    reported_excluded: BTreeSet<String>,
    priority: BTreeSet<String>,
    regions: Vec<Region>,
    region_index: HashMap<String, usize>,
    location_index: HashMap<String, (usize, usize)>,
    /// `(region, entrance)` pairs.
    indirect_conditions: BTreeSet<(String, String)>,
    event_items: BTreeSet<String>,
    completion: Rule,
    itempool: Vec<PlacedItem>,
    precollected: Vec<PlacedItem>,
    warnings: Vec<String>,
}

impl<'a> World<'a> {
    /// Validates the options. Nothing else happens until [`World::generate`] or the individual phases are called.
    pub fn new(player: Player, player_name: impl Into<String>, options: Options, catalog: &'a Catalog, policy: &GenerationPolicy, seed: u64) -> Result<Self, Error> {
        options.validate(policy, catalog)?;
        let excluded = options.resolve_excluded_locations(catalog)?;
        Ok(Self {
            player_name: player_name.into(),
            rng: StdRng::seed_from_u64(seed),
            overlay: ItemOverlay::default(),
            reported_excluded: excluded.clone(),
            priority: BTreeSet::default(),
            regions: Vec::default(),
            region_index: HashMap::default(),
            location_index: HashMap::default(),
            indirect_conditions: BTreeSet::default(),
            event_items: BTreeSet::default(),
            completion: Rule::True,
            itempool: Vec::default(),
            precollected: Vec::default(),
            warnings: Vec::default(),
            player, options, catalog, excluded,
        })
    }

    /// Runs every phase in order. Rules are set before the item pool is built so local placement can see them.
    pub fn generate(&mut self) -> Result<(), Error> {
        self.generate_early();
        self.create_regions()?;
        self.set_rules()?;
        self.create_items()
    }

    /// Adjusts this player's view of the item catalog.
    pub fn generate_early(&mut self) {
        let catalog = self.catalog;
        if self.options.smithing_bell_bearing_option == SmithingBellBearing::ProgressionRandomize {
            for item in catalog.items().iter().filter(|item| item.is_smithing_bell_bearing()) {
                self.overlay.upgrade(item, ItemClassification::Progression);
            }
        }
        if self.options.enable_dlc && self.options.late_dlc == LateDlc::Off {
            if let Some(medal) = catalog.item(model::PUREBLOOD_MEDAL) {
                self.overlay.upgrade(medal, ItemClassification::Progression);
            }
        }
        if self.options.world_logic == WorldLogic::RegionLock {
            for (lock, _) in model::REGION_LOCKS {
                if let Some(lock) = catalog.item(lock) {
                    self.overlay.mark_injectable(lock, 1);
                }
            }
        }
        if self.options.enable_dlc && self.options.messmer_kindle {
            if let Some(kindling) = catalog.item(model::KINDLING) {
                self.overlay.mark_injectable(kindling, self.options.messmer_kindle_max.into());
            }
        }
        if self.options.local_item_option {
            for item in catalog.items() {
                if self.overlay.classification(item) == ItemClassification::Filler && !self.options.exclude_local_item_only.contains(&item.category) {
                    self.overlay.mark_local(item);
                }
            }
        }
        info!("{}: {} local-only items", self.player_name, self.overlay.local_items().len());
    }

    pub fn create_regions(&mut self) -> Result<(), Error> {
        let catalog = self.catalog;
        self.find_priority_locations();
        self.push_region(Region::new(ROOT, self.player));
        for region in catalog.regions() {
            if region.dlc && !self.options.enable_dlc { continue }
            self.create_region(region);
        }
        let graph = catalog.graph();
        self.connect(ROOT, &graph.start, Some("New Game"))?;
        for (from, to) in &graph.edges {
            if self.region_index.contains_key(from) && self.region_index.contains_key(to) {
                self.connect(from, to, None)?;
            } else {
                debug!("{}: skipping connection from {:?} to {:?}, which was not created", self.player_name, from, to);
            }
        }
        let index = &self.location_index;
        let regions = &self.regions;
        self.reported_excluded.retain(|name| index.get(name).map_or(false, |&(region, location)| {
            let location = &regions[region].locations[location];
            location.locked_item.is_none() && location.progress_type == ProgressType::Excluded
        }));
        info!(
            "{}: {} regions, {} locations, {} priority, {} excluded",
            self.player_name, self.regions.len(), self.location_index.len(), self.priority.len(), self.reported_excluded.len(),
        );
        Ok(())
    }

    /// Priority wins over exclusion, so this runs before any location is created.
    fn find_priority_locations(&mut self) {
        let catalog = self.catalog;
        let no_exclusions = BTreeSet::default();
        for location in catalog.locations() {
            if !is_location_available(location, &self.options, &no_exclusions) { continue }
            let default_classification = location.default_item_name.as_deref()
                .and_then(|item| catalog.item(item))
                .map(|item| self.overlay.classification(item));
            if self.options.important_locations.iter().any(|important| important.matches(location, default_classification)) {
                self.priority.insert(location.name.clone());
                if self.excluded.remove(&location.name) {
                    self.reported_excluded.remove(&location.name);
                    self.warn(format!("{:?} is both excluded and a priority location; it stays a priority location", location.name));
                }
            }
        }
    }

    fn create_region(&mut self, data: &CatalogRegion) {
        let catalog = self.catalog;
        let mut region = Region::new(&data.name, self.player);
        for location in catalog.region_locations(data) {
            if location.is_event() {
                self.event_items.insert(location.name.clone());
                region.locations.push(Location::locked(location, PlacedItem::event(&location.name, self.player)));
            } else if !is_location_available(location, &self.options, &self.excluded) {
                let item = match location.default_item_name.as_deref().and_then(|item| catalog.item(item)) {
                    Some(item) => PlacedItem::new(item, self.overlay.classification(item), self.player),
                    None => {
                        self.event_items.insert(location.name.clone());
                        PlacedItem::event(&location.name, self.player)
                    }
                };
                region.locations.push(Location::locked(location, item));
            } else {
                let mut randomized = Location::randomized(location);
                if self.priority.contains(&location.name) {
                    randomized.progress_type = ProgressType::Priority;
                } else if let Some(exclusion) = self.options.exclusion_for(location.is_missable(), self.excluded.contains(&location.name)) {
                    randomized.progress_type = ProgressType::Excluded;
                    if exclusion == Exclusion::ForbidUseful {
                        randomized.item_rule = ItemRule::forbid_useful();
                    }
                }
                region.locations.push(randomized);
            }
        }
        self.push_region(region);
    }

    fn push_region(&mut self, region: Region) {
        let region_idx = self.regions.len();
        for (location_idx, location) in region.locations.iter().enumerate() {
            self.location_index.insert(location.name.clone(), (region_idx, location_idx));
        }
        self.region_index.insert(region.name.clone(), region_idx);
        self.regions.push(region);
    }

    /// Adds an edge. Extra edges into a region that already has one are named after their source.
    fn connect(&mut self, from: &str, to: &str, name: Option<&str>) -> Result<(), Error> {
        let from_idx = *self.region_index.get(from).ok_or_else(|| Invariant::UnknownRegion(from.to_owned()))?;
        if !self.region_index.contains_key(to) {
            return Err(Invariant::UnknownRegion(to.to_owned()).into())
        }
        let name = match name {
            Some(name) => name.to_owned(),
            None if self.entrances_into(to).next().is_some() => format!("Go To {} (from {})", to, from),
            None => format!("Go To {}", to),
        };
        self.regions[from_idx].exits.push(Entrance { name, from: from.to_owned(), to: to.to_owned(), rule: Rule::True });
        Ok(())
    }

    pub fn entrances_into<'r>(&'r self, region: &'r str) -> impl Iterator<Item = &'r Entrance> + 'r {
        self.regions.iter().flat_map(|from| &from.exits).filter(move |entrance| entrance.to == region)
    }

    pub fn set_rules(&mut self) -> Result<(), Error> {
        rules::set_rules(self)?;
        self.completion = self.completion_rule();
        info!("{}: completion condition {}", self.player_name, self.completion);
        Ok(())
    }

    fn completion_rule(&self) -> Rule {
        match self.options.ending_condition {
            EndingCondition::FinalBoss if self.options.enable_dlc => Rule::location(CONSORT_RADAHN),
            EndingCondition::FinalBoss | EndingCondition::EldenBeast => Rule::location(ELDEN_BEAST),
            EndingCondition::AllRemembrances => self.reach_group("Remembrance"),
            EndingCondition::AllBosses => self.reach_group("Boss Rewards"),
        }
    }

    /// Reaching every non-missable location of a group. Expansion locations only count with the expansion enabled.
    fn reach_group(&self, group: &str) -> Rule {
        let catalog = self.catalog;
        Rule::all(catalog.location_group(group).into_iter().flatten()
            .filter_map(|name| catalog.location(name))
            .filter(|location| !location.is_missable() && (self.options.enable_dlc || !location.is_dlc()))
            .map(|location| Rule::location(&location.name)))
    }

    /// Checks that every item the rule looks at is a progression item for this player, or an event.
    fn resolve(&self, rule: RuleSpec) -> Result<Rule, Error> {
        let rule = match rule {
            RuleSpec::Rule(rule) => rule,
            RuleSpec::Item(item) => Rule::item(item),
        };
        for name in rule.item_names() {
            if self.event_items.contains(name) { continue }
            let item = self.catalog.item(name).ok_or_else(|| Invariant::UnknownItem(name.to_owned()))?;
            if !self.overlay.is_progression(item) {
                return Err(Invariant::NotProgression(name.to_owned()).into())
            }
        }
        Ok(rule)
    }

    /// Adds `rule` to each location. Locations that are not randomized, or not part of this world, are skipped. Events always get the rule.
    pub fn add_location_rule<'n>(&mut self, locations: impl IntoIterator<Item = &'n str>, rule: impl Into<RuleSpec>) -> Result<(), Error> {
        let catalog = self.catalog;
        let rule = self.resolve(rule.into())?;
        for name in locations {
            let data = catalog.location(name).ok_or_else(|| Invariant::UnknownLocation(name.to_owned()))?;
            if data.is_dlc() && !self.options.enable_dlc {
                debug!("{}: skipping rule for expansion location {:?}", self.player_name, name);
                continue
            }
            if !data.is_event() && !is_location_available(data, &self.options, &self.excluded) {
                debug!("{}: skipping rule for location {:?}, which is not randomized", self.player_name, name);
                continue
            }
            if let Some(location) = self.location_mut(name) {
                location.rule = mem::take(&mut location.rule).and(rule.clone());
            }
        }
        Ok(())
    }

    /// Gates every entrance into `region`. Regions this rule depends on are registered as indirect conditions.
    pub fn add_entrance_rule(&mut self, region: &str, rule: impl Into<RuleSpec>) -> Result<(), Error> {
        let catalog = self.catalog;
        if catalog.region(region).is_none() {
            return Err(Invariant::UnknownRegion(region.to_owned()).into())
        }
        if !self.region_index.contains_key(region) {
            debug!("{}: skipping entrance rule for {:?}, which was not created", self.player_name, region);
            return Ok(())
        }
        let rule = self.resolve(rule.into())?;
        let mut dependencies = BTreeSet::default();
        for name in rule.region_names() {
            catalog.region(name).ok_or_else(|| Invariant::UnknownRegion(name.to_owned()))?;
            dependencies.insert(name.to_owned());
        }
        for name in rule.location_names() {
            let location = catalog.location(name).ok_or_else(|| Invariant::UnknownLocation(name.to_owned()))?;
            dependencies.insert(location.region.clone());
        }
        let mut gated = Vec::default();
        for entrance in self.regions.iter_mut().flat_map(|from| &mut from.exits).filter(|entrance| entrance.to == region) {
            entrance.rule = mem::take(&mut entrance.rule).and(rule.clone());
            gated.push(entrance.name.clone());
        }
        for entrance in gated {
            for dependency in &dependencies {
                self.add_indirect_condition(dependency, &entrance);
            }
        }
        Ok(())
    }

    pub fn add_indirect_condition(&mut self, region: &str, entrance: &str) {
        self.indirect_conditions.insert((region.to_owned(), entrance.to_owned()));
    }

    pub fn add_item_rule(&mut self, location: &str, item_rule: ItemRule) -> Result<(), Error> {
        let data = self.catalog.location(location).ok_or_else(|| Invariant::UnknownLocation(location.to_owned()))?;
        if !is_location_available(data, &self.options, &self.excluded) { return Ok(()) }
        if let Some(location) = self.location_mut(location) {
            location.item_rule = mem::take(&mut location.item_rule).and(item_rule);
        }
        Ok(())
    }

    /// Builds the item pool from the vanilla items of every randomized location.
    pub fn create_items(&mut self) -> Result<(), Error> {
        let catalog = self.catalog;
        let local_bell_bearings = self.options.smithing_bell_bearing_option == SmithingBellBearing::ProgressionRandomize;
        let mut seen = HashSet::new();
        let mut extra_slots = 0;
        let mut pool = Vec::default();
        let mut local = BTreeSet::default();
        for location in self.regions.iter().flat_map(|region| &region.locations).filter(|location| location.locked_item.is_none()) {
            let data = catalog.location(&location.name).ok_or_else(|| Invariant::UnknownLocation(location.name.clone()))?;
            if !is_location_available(data, &self.options, &self.excluded) {
                return Err(Error::UnavailableLocation(location.name.clone()))
            }
            let item_name = data.default_item_name.as_deref().ok_or_else(|| Error::UnavailableLocation(location.name.clone()))?;
            let item = catalog.item(item_name).ok_or_else(|| Invariant::UnknownItem(item_name.to_owned()))?;
            if item.is_skip() {
                extra_slots += 1;
            } else if local_bell_bearings && item.is_smithing_bell_bearing() {
                // placed by fill_local_item below, this location takes something from the pool instead
                local.insert(item.name.clone());
            } else if !seen.insert(&*item.name) && !self.overlay.is_progression(item) {
                extra_slots += 1;
            } else {
                pool.push(PlacedItem::new(item, self.overlay.classification(item), self.player));
            }
        }
        let injected = self.create_injectable_items(extra_slots);
        pool.extend(injected);
        self.itempool = pool;
        for family in enum_iterator::all::<BellBearingFamily>() {
            for tier in 1..=family.tiers() {
                let bearing = family.bearing(tier);
                if local.contains(&bearing) {
                    self.fill_local_item(&bearing, family.home_regions(tier))?;
                }
            }
        }
        info!(
            "{}: {} items in the pool, {} precollected, {} warnings",
            self.player_name, self.itempool.len(), self.precollected.len(), self.warnings.len(),
        );
        Ok(())
    }

    /// Fills `slots` extra pool slots.
    ///
    /// Progression injectables go first. Those that do not fit are given to the player at the start instead.
    /// Remaining slots take optional injectables, then random filler.
    pub fn create_injectable_items(&mut self, slots: usize) -> Vec<PlacedItem> {
        let catalog = self.catalog;
        let mut mandatory = Vec::default();
        let mut optional = Vec::default();
        for item in catalog.items() {
            if item.is_dlc() && !self.options.enable_dlc { continue }
            let copies = self.overlay.injectable_copies(item);
            if copies == 0 { continue }
            let placed = PlacedItem::new(item, self.overlay.classification(item), self.player);
            let target = if placed.classification.is_progression() { &mut mandatory } else { &mut optional };
            target.extend(iter::repeat(placed).take(copies as usize));
        }
        let mut items = Vec::with_capacity(slots);
        if mandatory.len() > slots {
            mandatory.shuffle(&mut self.rng);
            for item in mandatory.split_off(slots) {
                self.warn(format!("couldn't add {:?} to the item pool; adding it to the starting inventory instead", item.name));
                self.precollected.push(item);
            }
            items.extend(mandatory);
        } else {
            let remaining = slots - mandatory.len();
            items.extend(mandatory);
            items.extend(optional.choose_multiple(&mut self.rng, remaining).cloned());
        }
        while items.len() < slots {
            match self.create_filler() {
                Some(filler) => items.push(filler),
                None => break,
            }
        }
        items
    }

    fn create_filler(&mut self) -> Option<PlacedItem> {
        let catalog = self.catalog;
        let filler = catalog.filler_items(self.options.enable_dlc);
        let item = filler.choose(&mut self.rng)?;
        Some(PlacedItem::new(item, self.overlay.classification(item), self.player))
    }

    /// Places an item into one of this world's own locations in the given regions.
    ///
    /// Candidates are unlocked, not excluded, not missable or conditional, have no access requirements of their own, and accept the item.
    /// Without a candidate, the item goes to the starting inventory and a filler item keeps the pool balanced.
    pub fn fill_local_item(&mut self, item: &str, regions: &[&str]) -> Result<(), Error> {
        let catalog = self.catalog;
        let item = catalog.item(item).ok_or_else(|| Invariant::UnknownItem(item.to_owned()))?;
        let placed = PlacedItem::new(item, self.overlay.classification(item), self.player);
        let candidates = regions.iter()
            .filter_map(|region| self.region_index.get(*region).copied())
            .flat_map(|region_idx| self.regions[region_idx].locations.iter().enumerate().map(move |(location_idx, location)| (region_idx, location_idx, location)))
            .filter(|(_, _, location)| {
                location.locked_item.is_none()
                    && location.progress_type != ProgressType::Excluded
                    && location.rule.is_true()
                    && location.item_rule.allows(placed.classification)
                    && catalog.location(&location.name).map_or(false, |data| !data.is_missable() && !data.is_conditional())
            })
            .map(|(region_idx, location_idx, _)| (region_idx, location_idx))
            .collect_vec();
        match candidates.choose(&mut self.rng) {
            Some(&(region_idx, location_idx)) => {
                let location = &mut self.regions[region_idx].locations[location_idx];
                debug!("{}: placing {:?} at {:?}", self.player_name, placed.name, location.name);
                location.locked_item = Some(placed);
            }
            None => {
                self.warn(format!("couldn't place {:?} in a valid location; adding it to the starting inventory instead", placed.name));
                self.precollected.push(placed);
                if let Some(filler) = self.create_filler() {
                    self.itempool.push(filler);
                }
            }
        }
        Ok(())
    }

    fn warn(&mut self, message: String) {
        warn!("{}: {}", self.player_name, message);
        self.warnings.push(message);
    }

    fn location_mut(&mut self, name: &str) -> Option<&mut Location> {
        let &(region, location) = self.location_index.get(name)?;
        Some(&mut self.regions[region].locations[location])
    }

    /// Hands everything generated so far to the host.
    pub fn register(&self, host: &mut impl Host) {
        for region in &self.regions {
            host.add_region(self.player, region.clone());
        }
        for (region, entrance) in &self.indirect_conditions {
            host.add_indirect_condition(self.player, region, entrance);
        }
        host.set_completion_condition(self.player, self.completion.clone());
        for item in &self.precollected {
            host.push_precollected(self.player, item.clone());
        }
        host.add_to_itempool(self.player, self.itempool.clone());
        host.set_local_items(self.player, self.overlay.local_items().clone());
    }

    pub fn fill_slot_data(&self, placements: &impl Placements, seed: &str) -> SlotData {
        SlotData::new(self, placements, seed)
    }

    pub fn write_spoiler(&self, out: &mut impl fmt::Write) -> fmt::Result {
        if !self.reported_excluded.is_empty() {
            writeln!(out, "{}'s world excluded: {}", self.player_name, self.reported_excluded.iter().join(", "))?;
        }
        for warning in &self.warnings {
            writeln!(out, "{}: {}", self.player_name, warning)?;
        }
        Ok(())
    }

    pub fn catalog(&self) -> &'a Catalog { self.catalog }
    pub fn overlay(&self) -> &ItemOverlay { &self.overlay }
    pub fn regions(&self) -> &[Region] { &self.regions }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.region_index.get(name).map(|&idx| &self.regions[idx])
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        let &(region, location) = self.location_index.get(name)?;
        Some(&self.regions[region].locations[location])
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.regions.iter().flat_map(|region| &region.locations)
    }

    pub fn is_available(&self, location: &LocationDefinition) -> bool {
        is_location_available(location, &self.options, &self.excluded)
    }

    pub fn priority_locations(&self) -> &BTreeSet<String> { &self.priority }
    pub fn reported_excluded(&self) -> &BTreeSet<String> { &self.reported_excluded }
    pub fn indirect_conditions(&self) -> &BTreeSet<(String, String)> { &self.indirect_conditions }
    pub fn completion_condition(&self) -> &Rule { &self.completion }
    pub fn itempool(&self) -> &[PlacedItem] { &self.itempool }
    pub fn precollected(&self) -> &[PlacedItem] { &self.precollected }
    pub fn warnings(&self) -> &[String] { &self.warnings }
}

#[cfg(test)]
mod tests {
    use {
        collect_mac::collect,
        crate::{
            catalog::{
                RegionData,
                RegionGraph,
                CATALOG,
            },
            item::ItemData,
            location::{
                IdAllocator,
                LocationData,
            },
            settings::ImportantLocation,
        },
        super::*,
    };

    const REMEMBRANCE_OF_THE_GRAFTED: &str = "SC: Remembrance of the Grafted - boss drop";

    fn world(options: Options) -> World<'static> {
        World::new(Player(1), "Tarnished", options, &CATALOG, &GenerationPolicy::default(), 0).expect("invalid options")
    }

    fn generated(options: Options) -> World<'static> {
        let mut world = world(options);
        world.generate().expect("generation failed");
        world
    }

    const KALE_KEY: &str = "CE: Stonesword Key - Merchant Kalé";

    /// Two connected regions, one of them holding a missable key.
    fn small_catalog() -> Catalog {
        Catalog::new(
            vec![ItemData::goods("Stonesword Key").progression(), ItemData::goods("Golden Rune [1]")],
            vec![
                RegionData::new("Church of Elleh", vec![
                    LocationData::new(KALE_KEY, "Stonesword Key").npc().missable(),
                    LocationData::new("CE: Golden Rune [1] - corpse by the church", "Golden Rune [1]"),
                ]),
                RegionData::new("Stormhill Shack", vec![
                    LocationData::new("SS: Golden Rune [1] - corpse behind the shack", "Golden Rune [1]"),
                ]),
            ],
            RegionGraph::new("Church of Elleh").edge("Church of Elleh", "Stormhill Shack"),
            &mut IdAllocator::new(1),
            &mut IdAllocator::new(100),
        ).expect("invalid catalog")
    }

    #[test]
    fn availability_is_deterministic() {
        let options = Options { missable_location_behavior: MissableLocationBehavior::DoNotRandomize, ..Options::default() };
        let excluded = BTreeSet::default();
        let first = CATALOG.locations().iter().map(|location| is_location_available(location, &options, &excluded)).collect_vec();
        let mut world = world(options.clone());
        world.generate_early();
        let second = CATALOG.locations().iter().map(|location| is_location_available(location, &options, &excluded)).collect_vec();
        assert_eq!(first, second);
        for location in CATALOG.locations() {
            if location.is_missable() || location.is_event() || location.is_dlc() {
                assert!(!is_location_available(location, &options, &excluded), "{} should not be available", location.name);
            }
        }
    }

    #[test]
    fn bell_bearing_locations_can_stay_vanilla() {
        let options = Options { smithing_bell_bearing_option: SmithingBellBearing::DoNotRandomize, ..Options::default() };
        let world = generated(options);
        let location = world.location("CFA: Smithing-Stone Miner's Bell Bearing [4] - Dragon Temple Rooftop").expect("missing location");
        assert!(location.is_event());
        assert_eq!(location.locked_item.as_ref().map(|item| &*item.name), Some("Smithing-Stone Miner's Bell Bearing [4]"));
    }

    #[test]
    fn priority_before_exclusion() {
        let options = Options {
            exclude_locations: collect![REMEMBRANCE_OF_THE_GRAFTED.to_owned()],
            excluded_location_behavior: ExcludedLocationBehavior::DoNotRandomize,
            ..Options::default()
        };
        let world = generated(options);
        let location = world.location(REMEMBRANCE_OF_THE_GRAFTED).expect("missing location");
        assert_eq!(location.progress_type, ProgressType::Priority);
        assert!(location.address.is_some());
        assert!(!world.reported_excluded().contains(REMEMBRANCE_OF_THE_GRAFTED));
        assert!(world.warnings().iter().any(|warning| warning.contains(REMEMBRANCE_OF_THE_GRAFTED)));
    }

    #[test]
    fn excluded_locations() {
        let map = "CL: Map: Caelid - Rotview stele";
        let options = Options {
            exclude_locations: collect![map.to_owned(), format!("scarab")],
            important_locations: collect![ImportantLocation::Remembrance],
            ..Options::default()
        };
        let world = generated(options);
        let location = world.location(map).expect("missing location");
        assert_eq!(location.progress_type, ProgressType::Excluded);
        assert!(location.item_rule.forbids(ItemClassification::Useful));
        assert!(world.reported_excluded().contains(map));
        let mut spoiler = String::default();
        world.write_spoiler(&mut spoiler).expect("failed to write spoiler");
        assert!(spoiler.contains(map));
    }

    #[test]
    fn missable_locations_follow_their_own_policy() {
        let d_shop = "RH: Order's Blade - D shop";
        let options = Options { missable_location_behavior: MissableLocationBehavior::AllowUseful, ..Options::default() };
        let world = generated(options);
        let location = world.location(d_shop).expect("missing location");
        assert_eq!(location.progress_type, ProgressType::Excluded);
        assert!(location.item_rule.is_unrestricted());
        let options = Options { missable_location_behavior: MissableLocationBehavior::RandomizeFully, ..Options::default() };
        let world = generated(options);
        assert_eq!(world.location(d_shop).map(|location| location.progress_type), Some(ProgressType::Default));
    }

    #[test]
    fn expansion_regions_need_the_expansion() {
        let world = generated(Options::default());
        assert!(world.region("Gravesite Plain").is_none());
        assert!(world.location("RH: Sword Lance - Enia for Commander Gaius").map_or(false, |location| location.is_event()));
        let world = generated(Options { enable_dlc: true, ..Options::default() });
        assert!(world.region("Gravesite Plain").is_some());
        assert_eq!(world.regions().len(), CATALOG.regions().len() + 1);
    }

    #[test]
    fn entrances() {
        let world = generated(Options::default());
        assert_eq!(world.entrances_into("Chapel of Anticipation").map(|entrance| &*entrance.name).collect_vec(), vec!["New Game"]);
        assert_eq!(
            world.entrances_into("Mohgwyn Palace").map(|entrance| &*entrance.name).collect::<BTreeSet<_>>(),
            BTreeSet::from(["Go To Mohgwyn Palace", "Go To Mohgwyn Palace (from Roundtable Hold)"]),
        );
        for entrance in world.entrances_into("Crumbling Farum Azula") {
            assert!(entrance.rule.location_names().contains("MotG: Remembrance of the Fire Giant - boss drop"));
        }
        assert!(world.indirect_conditions().contains(&(format!("Mountaintops of the Giants"), format!("Go To Crumbling Farum Azula"))));
    }

    #[test]
    fn regions_are_wired_from_the_catalog() {
        let catalog = small_catalog();
        let mut world = World::new(Player(1), "Tarnished", Options::default(), &catalog, &GenerationPolicy::default(), 0).expect("invalid options");
        world.generate_early();
        world.create_regions().expect("failed to create regions");
        world.create_items().expect("failed to create items");
        assert_eq!(world.regions().len(), 3);
        assert_eq!(world.entrances_into("Church of Elleh").map(|entrance| &*entrance.name).collect_vec(), vec!["New Game"]);
        assert_eq!(world.entrances_into("Stormhill Shack").map(|entrance| &*entrance.name).collect_vec(), vec!["Go To Stormhill Shack"]);
        // the repeated rune is replaced by filler
        assert_eq!(world.itempool().len(), 3);
    }

    #[test]
    fn priority_beats_the_missable_policy() {
        let catalog = small_catalog();
        let options = Options {
            important_locations: collect![ImportantLocation::KeyItem],
            missable_location_behavior: MissableLocationBehavior::ForbidUseful,
            ..Options::default()
        };
        let mut world = World::new(Player(1), "Tarnished", options, &catalog, &GenerationPolicy::default(), 0).expect("invalid options");
        world.generate_early();
        world.create_regions().expect("failed to create regions");
        let location = world.location(KALE_KEY).expect("missing location");
        assert_eq!(location.progress_type, ProgressType::Priority);
        assert!(location.item_rule.is_unrestricted());
        assert!(world.priority_locations().contains(KALE_KEY));
        assert!(!world.reported_excluded().contains(KALE_KEY));
        let mut world = World::new(Player(1), "Tarnished", Options::default(), &catalog, &GenerationPolicy::default(), 0).expect("invalid options");
        world.generate_early();
        world.create_regions().expect("failed to create regions");
        let location = world.location(KALE_KEY).expect("missing location");
        assert_eq!(location.progress_type, ProgressType::Excluded);
        assert!(location.item_rule.forbids(ItemClassification::Useful));
    }

    #[test]
    fn rules_only_reference_progression_items() {
        let mut world = world(Options::default());
        world.generate_early();
        world.create_regions().expect("failed to create regions");
        assert!(matches!(world.add_location_rule(["LG/CE: Smithing Stone [1] - church altar"], "Golden Seed"), Err(Error::Invariant(Invariant::NotProgression(_)))));
        assert!(matches!(world.add_location_rule(["LG/CE: Smithing Stone [1] - church altar"], "Nothing"), Err(Error::Invariant(Invariant::UnknownItem(_)))));
        assert!(matches!(world.add_location_rule(["Nowhere: Nothing - nowhere"], "Rold Medallion"), Err(Error::Invariant(Invariant::UnknownLocation(_)))));
        assert!(matches!(world.add_entrance_rule("Nowhere", "Rold Medallion"), Err(Error::Invariant(Invariant::UnknownRegion(_)))));
        // accepted and skipped: the expansion is off
        assert!(world.add_entrance_rule("Gravesite Plain", "Rold Medallion").is_ok());
        assert!(world.add_location_rule(["GP: Map: Gravesite Plain - stele"], "Rold Medallion").is_ok());
        // an event item is fine
        world.add_location_rule(["LG/CE: Smithing Stone [1] - church altar"], model::MILLICENT_GIVEN_PROSTHESIS).expect("events may be required");
    }

    #[test]
    fn medal_is_progression_only_when_it_opens_mohgwyn() {
        let medal = CATALOG.item(model::PUREBLOOD_MEDAL).expect("missing medal");
        let world = generated(Options { enable_dlc: true, ..Options::default() });
        assert!(world.overlay().is_progression(medal));
        let world = generated(Options { enable_dlc: true, late_dlc: LateDlc::AfterMedallion, ..Options::default() });
        assert!(!world.overlay().is_progression(medal));
        assert!(!CATALOG.item(model::PUREBLOOD_MEDAL).expect("missing medal").classification.is_progression());
    }

    #[test]
    fn every_option_combination_generates() {
        for world_logic in enum_iterator::all::<WorldLogic>() {
            for smithing_bell_bearing_option in enum_iterator::all::<SmithingBellBearing>() {
                for late_dlc in enum_iterator::all::<LateDlc>() {
                    for enable_dlc in [false, true] {
                        let options = Options {
                            world_logic, smithing_bell_bearing_option, late_dlc, enable_dlc,
                            messmer_kindle: true,
                            ..Options::default()
                        };
                        let world = generated(options);
                        let open = world.locations().filter(|location| location.locked_item.is_none()).count();
                        assert_eq!(world.itempool().len(), open, "unbalanced pool for {:?}", world.options);
                    }
                }
            }
        }
    }

    #[test]
    fn progression_duplicates_stay_in_the_pool() {
        let world = generated(Options::default());
        let vanilla = CATALOG.locations().iter().filter(|location| location.default_item_name.as_deref() == Some("Deathroot") && world.is_available(location)).count();
        assert!(vanilla >= 4);
        assert_eq!(world.itempool().iter().filter(|item| item.name == "Deathroot").count(), vanilla);
        assert!(world.itempool().iter().filter(|item| item.name == "Golden Seed").count() <= 1);
    }

    #[test]
    fn injection_falls_back_to_starting_inventory() {
        let mut world = world(Options { world_logic: WorldLogic::RegionLock, ..Options::default() });
        world.generate_early();
        let injected = world.create_injectable_items(2);
        assert_eq!(injected.len(), 2);
        assert!(injected.iter().all(|item| item.classification.is_progression()));
        assert_eq!(world.precollected().len(), model::REGION_LOCKS.len() - 2);
        assert_eq!(world.warnings().len(), model::REGION_LOCKS.len() - 2);
        let mut names = injected.iter().chain(world.precollected()).map(|item| &*item.name).collect_vec();
        names.sort_unstable();
        let mut locks = model::REGION_LOCKS.iter().map(|(lock, _)| *lock).collect_vec();
        locks.sort_unstable();
        assert_eq!(names, locks);
    }

    #[test]
    fn injection_pads_with_filler() {
        let mut world = world(Options { world_logic: WorldLogic::OpenWorld, ..Options::default() });
        world.generate_early();
        let injected = world.create_injectable_items(20);
        assert_eq!(injected.len(), 20);
        assert!(world.precollected().is_empty());
        assert!(injected.iter().all(|item| !CATALOG.item(&item.name).map_or(true, |item| item.is_dlc())));
    }

    #[test]
    fn local_fill_without_candidates() {
        let mut world = world(Options::default());
        world.generate_early();
        world.create_regions().expect("failed to create regions");
        world.fill_local_item("Somberstone Miner's Bell Bearing [5]", &["Grand Lift of Rold"]).expect("failed to fill");
        assert_eq!(world.precollected().iter().map(|item| &*item.name).collect_vec(), vec!["Somberstone Miner's Bell Bearing [5]"]);
        assert_eq!(world.itempool().len(), 1);
        assert_eq!(world.warnings().len(), 1);
    }

    #[test]
    fn bell_bearings_are_placed_in_their_home_regions() {
        let world = generated(Options::default());
        for family in enum_iterator::all::<BellBearingFamily>() {
            for tier in 1..=family.tiers() {
                let bearing = family.bearing(tier);
                let placed = world.locations().find(|location| location.locked_item.as_ref().map_or(false, |item| item.name == bearing) && !location.is_event());
                match placed {
                    Some(location) => assert!(family.home_regions(tier).contains(&&*location.region), "{} placed in {}", bearing, location.region),
                    None => assert!(world.precollected().iter().any(|item| item.name == bearing)),
                }
                assert!(world.itempool().iter().all(|item| item.name != bearing));
            }
        }
    }

    #[test]
    fn local_items() {
        let world = generated(Options::default());
        assert!(world.overlay().local_items().contains("Golden Rune [1]"));
        assert!(!world.overlay().local_items().contains("Cloth Garb"));
        let world = generated(Options { local_item_option: false, ..Options::default() });
        assert!(world.overlay().local_items().is_empty());
    }
}
