//! Access rules as data, and the one interpreter that evaluates them.

use {
    std::{
        collections::BTreeSet,
        fmt,
    },
    itertools::Itertools as _,
    serde::{
        Deserialize,
        Serialize,
    },
    crate::{
        host::{
            CollectedState,
            Player,
        },
        item::ItemClassification,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    True,
    Item {
        name: String,
        count: u32,
    },
    /// Sum of `count(name) * weight` over all aliases is at least `min`.
    CountThreshold {
        aliases: Vec<(String, u32)>,
        min: u32,
    },
    ReachableRegion(String),
    ReachableLocation(String),
    All(Vec<Rule>),
    Any(Vec<Rule>),
}

impl Default for Rule {
    fn default() -> Self { Self::True }
}

impl Rule {
    pub fn item(name: impl Into<String>) -> Self {
        Self::Item { name: name.into(), count: 1 }
    }

    pub fn items(name: impl Into<String>, count: u32) -> Self {
        Self::Item { name: name.into(), count }
    }

    pub fn region(name: impl Into<String>) -> Self { Self::ReachableRegion(name.into()) }
    pub fn location(name: impl Into<String>) -> Self { Self::ReachableLocation(name.into()) }

    pub fn count_threshold<'a>(aliases: impl IntoIterator<Item = (&'a str, u32)>, min: u32) -> Self {
        Self::CountThreshold {
            aliases: aliases.into_iter().map(|(name, weight)| (name.to_owned(), weight)).collect(),
            min,
        }
    }

    /// Conjunction, flattening nested `All`s and dropping `True`s.
    pub fn all(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut flat = Vec::default();
        for rule in rules {
            match rule {
                Self::True => {}
                Self::All(inner) => flat.extend(inner),
                rule => flat.push(rule),
            }
        }
        match flat.len() {
            0 => Self::True,
            1 => flat.pop().unwrap_or_default(),
            _ => Self::All(flat),
        }
    }

    pub fn any(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut flat = Vec::default();
        for rule in rules {
            match rule {
                Self::True => return Self::True,
                Self::Any(inner) => flat.extend(inner),
                rule => flat.push(rule),
            }
        }
        if flat.len() == 1 { flat.pop().unwrap_or_default() } else { Self::Any(flat) }
    }

    pub fn and(self, other: Rule) -> Self {
        Self::all([self, other])
    }

    pub fn is_true(&self) -> bool { *self == Self::True }

    pub fn eval<S: CollectedState + ?Sized>(&self, state: &S, player: Player) -> bool {
        match self {
            Self::True => true,
            Self::Item { name, count } => state.has(name, player, *count),
            Self::CountThreshold { aliases, min } => aliases.iter()
                .map(|(name, weight)| u64::from(state.count(name, player)) * u64::from(*weight))
                .sum::<u64>() >= u64::from(*min),
            Self::ReachableRegion(region) => state.can_reach_region(region, player),
            Self::ReachableLocation(location) => state.can_reach_location(location, player),
            Self::All(rules) => rules.iter().all(|rule| rule.eval(state, player)),
            Self::Any(rules) => rules.iter().any(|rule| rule.eval(state, player)),
        }
    }

    fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Rule)) {
        f(self);
        if let Self::All(rules) | Self::Any(rules) = self {
            for rule in rules {
                rule.walk(f);
            }
        }
    }

    /// Every item name this rule looks at.
    pub fn item_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::default();
        self.walk(&mut |rule| match rule {
            Self::Item { name, .. } => { names.insert(&**name); }
            Self::CountThreshold { aliases, .. } => names.extend(aliases.iter().map(|(name, _)| &**name)),
            _ => {}
        });
        names
    }

    pub fn region_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::default();
        self.walk(&mut |rule| if let Self::ReachableRegion(name) = rule { names.insert(&**name); });
        names
    }

    pub fn location_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::default();
        self.walk(&mut |rule| if let Self::ReachableLocation(name) = rule { names.insert(&**name); });
        names
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::Item { name, count: 1 } => write!(f, "{:?}", name),
            Self::Item { name, count } => write!(f, "{:?} x{}", name, count),
            Self::CountThreshold { aliases, min } => write!(f, "{} >= {}", aliases.iter().map(|(name, weight)| if *weight == 1 {
                format!("{:?}", name)
            } else {
                format!("{}*{:?}", weight, name)
            }).join(" + "), min),
            Self::ReachableRegion(region) => write!(f, "region {:?}", region),
            Self::ReachableLocation(location) => write!(f, "location {:?}", location),
            Self::All(rules) => write!(f, "({})", rules.iter().join(" and ")),
            Self::Any(rules) => write!(f, "({})", rules.iter().join(" or ")),
        }
    }
}

/// Restricts which items may be placed at a location.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemRule {
    forbidden: BTreeSet<ItemClassification>,
}

impl ItemRule {
    /// Used for soft-excluded locations: progression is already kept out by the excluded progress type.
    pub fn forbid_useful() -> Self {
        Self { forbidden: [ItemClassification::Useful].into_iter().collect() }
    }

    pub fn forbids(&self, classification: ItemClassification) -> bool {
        self.forbidden.contains(&classification)
    }

    pub fn allows(&self, classification: ItemClassification) -> bool { !self.forbids(classification) }

    pub fn and(mut self, other: ItemRule) -> Self {
        self.forbidden.extend(other.forbidden);
        self
    }

    pub fn is_unrestricted(&self) -> bool { self.forbidden.is_empty() }
}
