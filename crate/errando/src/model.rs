//! Game knowledge shared by the bundled tables and the rule tables.

use {
    std::fmt,
    enum_iterator::Sequence,
    crate::{
        access::Rule,
        item::ItemCategory,
    },
};

pub const ELDEN_BEAST: &str = "ET: Elden Beast";
pub const CONSORT_RADAHN: &str = "EI: Consort Radahn";
pub const MILLICENT_GIVEN_PROSTHESIS: &str = "AP: Millicent given Valkyrie's Prosthesis";

pub const KINDLING: &str = "Messmer's Kindling";
pub const PUREBLOOD_MEDAL: &str = "Pureblood Knight's Medal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum GreatRune {
    Godrick,
    Rykard,
    Radahn,
    Morgott,
    Mohg,
    Malenia,
    Unborn,
}

impl GreatRune {
    pub fn item_name(&self) -> &'static str {
        match self {
            Self::Godrick => "Godrick's Great Rune",
            Self::Rykard => "Rykard's Great Rune",
            Self::Radahn => "Radahn's Great Rune",
            Self::Morgott => "Morgott's Great Rune",
            Self::Mohg => "Mohg's Great Rune",
            Self::Malenia => "Malenia's Great Rune",
            Self::Unborn => "Great Rune of the Unborn",
        }
    }
}

impl fmt::Display for GreatRune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item_name())
    }
}

pub fn has_enough_keys(count: u32) -> Rule {
    Rule::count_threshold([("Stonesword Key", 1), ("Stonesword Key x3", 3)], count)
}

pub fn has_enough_hearts(count: u32) -> Rule {
    Rule::count_threshold([("Dragon Heart", 1), ("Dragon Heart x5", 5)], count)
}

pub fn has_enough_great_runes(count: u32) -> Rule {
    Rule::count_threshold(enum_iterator::all::<GreatRune>().map(|rune| (rune.item_name(), 1)), count)
}

pub fn kindling_required(count: u32) -> Rule {
    Rule::count_threshold([(KINDLING, 1)], count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum BellBearingFamily {
    SmithingStone,
    Somberstone,
}

impl BellBearingFamily {
    pub fn tiers(&self) -> u32 {
        match self {
            Self::SmithingStone => 4,
            Self::Somberstone => 5,
        }
    }

    /// `tier` starts at 1.
    pub fn bearing(&self, tier: u32) -> String {
        match self {
            Self::SmithingStone => format!("Smithing-Stone Miner's Bell Bearing [{}]", tier),
            Self::Somberstone => format!("Somberstone Miner's Bell Bearing [{}]", tier),
        }
    }

    pub fn bearings(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.tiers()).map(move |tier| self.bearing(tier))
    }

    /// The regions a bearing of this tier is placed in when bell bearings are progression.
    pub fn home_regions(&self, tier: u32) -> &'static [&'static str] {
        match (self, tier) {
            (Self::SmithingStone, 1) => &["Liurnia of The Lakes", "Raya Lucaria Academy"],
            (Self::SmithingStone, 2) => &["Altus Plateau", "Mt. Gelmir"],
            (Self::SmithingStone, 3) => &["Mountaintops of the Giants"],
            (Self::SmithingStone, _) => &["Crumbling Farum Azula"],
            (Self::Somberstone, 1) => &["Caelid", "Sellia Crystal Tunnel"],
            (Self::Somberstone, 2) => &["Altus Plateau"],
            (Self::Somberstone, 3) => &["Volcano Manor"],
            (Self::Somberstone, 4) => &["Consecrated Snowfield"],
            (Self::Somberstone, _) => &["Crumbling Farum Azula"],
        }
    }
}

/// Any `count` bearings of the family.
pub fn bell_bearings_required(family: BellBearingFamily, count: u32) -> Rule {
    let bearings = family.bearings().collect::<Vec<_>>();
    Rule::count_threshold(bearings.iter().map(|bearing| (&**bearing, 1)), count)
}

/// Regions gated by bell bearing counts: `(region, smithing-stone bearings, somberstone bearings)`.
pub const BELL_BEARING_GATES: &[(&str, u32, u32)] = &[
    ("Mountaintops of the Giants", 2, 2),
    ("Crumbling Farum Azula", 3, 3),
    ("Leyndell, Ashen Capital", 4, 5),
];

/// Synthetic items that open regions in region lock mode.
pub const REGION_LOCKS: &[(&str, &[&str])] = &[
    ("Weeping Lock", &["Weeping Peninsula"]),
    ("Liurnia Lock", &["Liurnia of The Lakes"]),
    ("Caelid Lock", &["Caelid", "Sellia Crystal Tunnel"]),
    ("Altus Lock", &["Altus Plateau"]),
    ("Leyndell Lock", &["Leyndell, Royal Capital"]),
    ("Mountaintops Lock", &["Mountaintops of the Giants"]),
    ("Snowfield Lock", &["Consecrated Snowfield"]),
];

pub struct Remembrance {
    pub item: &'static str,
    pub boss: &'static str,
    pub drop_location: &'static str,
    /// What Enia trades for the remembrance.
    pub rewards: &'static [(&'static str, ItemCategory)],
    pub dlc: bool,
}

macro_rules! remembrances {
    ($($item:literal, $boss:literal, $drop:literal, [$($reward:literal: $category:ident),+], $dlc:literal;)+) => {
        pub const REMEMBRANCES: &[Remembrance] = &[$(
            Remembrance {
                item: $item,
                boss: $boss,
                drop_location: $drop,
                rewards: &[$(($reward, ItemCategory::$category)),+],
                dlc: $dlc,
            },
        )+];
    };
}

remembrances! {
    "Remembrance of the Grafted", "Godrick", "SC: Remembrance of the Grafted - boss drop", ["Axe of Godrick": Weapon, "Grafted Dragon": Weapon], false;
    "Remembrance of the Full Moon Queen", "Rennala", "RLA: Remembrance of the Full Moon Queen - boss drop", ["Carian Regal Scepter": Weapon, "Rennala's Full Moon": Goods], false;
    "Remembrance of the Starscourge", "Radahn", "CL/(RC): Remembrance of the Starscourge - boss drop", ["Starscourge Greatsword": Weapon, "Lion Greatbow": Weapon], false;
    "Remembrance of the Regal Ancestor", "Regal Ancestor Spirit", "NEC: Remembrance of the Regal Ancestor - boss drop", ["Winged Greathorn": Weapon, "Ancestral Spirit's Horn": Goods], false;
    "Remembrance of the Omen King", "Morgott", "LRC: Remembrance of the Omen King - boss drop", ["Morgott's Cursed Sword": Weapon, "Regal Omen Bairn": Goods], false;
    "Remembrance of the Naturalborn", "Astel", "LoR: Remembrance of the Naturalborn - boss drop", ["Waves of Darkness": Goods, "Bastard's Stars": Goods], false;
    "Remembrance of the Blasphemous", "Rykard", "VM: Remembrance of the Blasphemous - boss drop", ["Rykard's Rancor": Goods, "Blasphemous Blade": Weapon], false;
    "Remembrance of the Lichdragon", "Lichdragon", "DD: Remembrance of the Lichdragon - boss drop", ["Fortissax's Lightning Spear": Goods, "Death Lightning": Goods], false;
    "Remembrance of the Fire Giant", "Fire Giant", "MotG: Remembrance of the Fire Giant - boss drop", ["Giant's Red Braid": Weapon, "Burn, O Flame!": Goods], false;
    "Remembrance of the Blood Lord", "Mohg", "MP: Remembrance of the Blood Lord - boss drop", ["Mohgwyn's Sacred Spear": Weapon, "Bloodboon": Goods], false;
    "Remembrance of the Black Blade", "Maliketh", "CFA: Remembrance of the Black Blade - boss drop", ["Maliketh's Black Blade": Weapon, "Black Blade": Goods], false;
    "Remembrance of the Dragonlord", "Placidusax", "CFA: Remembrance of the Dragonlord - boss drop", ["Dragon King's Cragblade": Weapon, "Placidusax's Ruin": Goods], false;
    "Remembrance of Hoarah Loux", "Hoarah Loux", "LAC: Remembrance of Hoarah Loux - boss drop", ["Axe of Godfrey": Weapon, "Hoarah Loux's Earthshaker": Goods], false;
    "Remembrance of the Rot Goddess", "Malenia", "EBH/HR: Remembrance of the Rot Goddess - boss drop", ["Hand of Malenia": Weapon, "Scarlet Aeonia": Goods], false;
    "Elden Remembrance", "Elden Beast", "ET: Elden Remembrance - boss drop", ["Marika's Hammer": Weapon, "Sacred Relic Sword": Weapon], false;
    "Remembrance of the Dancing Lion", "Dancing Lion", "BTS: Remembrance of the Dancing Lion - boss drop", ["Enraged Divine Beast": Weapon, "Divine Beast Frost Stomp": Goods], true;
    "Remembrance of the Twin Moon Knight", "Rellana", "CE: Remembrance of the Twin Moon Knight - boss drop", ["Rellana's Twin Blades": Weapon, "Rellana's Twin Moons": Goods], true;
    "Remembrance of Putrescence", "Putrescent Knight", "SCF: Remembrance of Putrescence - boss drop", ["Putrescence Cleaver": Weapon, "Vortex of Putrescence": Goods], true;
    "Remembrance of the Wild Boar Rider", "Commander Gaius", "SA: Remembrance of the Wild Boar Rider - boss drop", ["Sword Lance": Weapon, "Blades of Stone": Goods], true;
    "Remembrance of the Shadow Sunflower", "Scadutree Avatar", "STB: Remembrance of the Shadow Sunflower - boss drop", ["Shadow Sunflower Blossom": Weapon, "Land of Shadow": Goods], true;
    "Remembrance of the Impaler", "Messmer", "SK: Remembrance of the Impaler - boss drop", ["Spear of the Impaler": Weapon, "Messmer's Orb": Goods], true;
    "Remembrance of the Saint of the Bud", "Romina", "ARR: Remembrance of the Saint of the Bud - boss drop", ["Poleblade of the Bud": Weapon, "Rotten Butterflies": Goods], true;
    "Remembrance of the Mother of Fingers", "Metyr", "FRM: Remembrance of the Mother of Fingers - boss drop", ["Staff of the Great Beyond": Weapon, "Gazing Finger": Weapon], true;
    "Remembrance of the Lord of Frenzied Flame", "Midra", "AW: Remembrance of the Lord of Frenzied Flame - boss drop", ["Greatsword of Damnation": Weapon, "Midra's Flame of Frenzy": Goods], true;
    "Remembrance of a God and a Lord", "Consort Radahn", "EI: Remembrance of a God and a Lord - boss drop", ["Greatsword of Radahn (Lord)": Weapon, "Light of Miquella": Goods], true;
}

pub fn remembrance(boss: &str) -> Option<&'static Remembrance> {
    REMEMBRANCES.iter().find(|remembrance| remembrance.boss == boss)
}

/// A book that unlocks spells in a shop, and where the book itself is found.
pub struct SpellBook {
    pub name: &'static str,
    pub spells: &'static [&'static str],
}

/// Given to Sellen at Waypoint Ruins.
pub const SCROLLS: &[SpellBook] = &[
    SpellBook { name: "Academy Scroll", spells: &["Great Glintstone Shard", "Swift Glintstone Shard"] },
    SpellBook { name: "Conspectus Scroll", spells: &["Glintstone Cometshard", "Star Shower"] },
    SpellBook { name: "Royal House Scroll", spells: &["Glintblade Phalanx", "Carian Slicer"] },
];

/// Given to Brother Corhyn at the Roundtable Hold.
pub const PRAYERBOOKS: &[SpellBook] = &[
    SpellBook { name: "Two Fingers' Prayerbook", spells: &["Lord's Heal", "Lord's Aura"] },
    SpellBook { name: "Assassin's Prayerbook", spells: &["Assassin's Approach", "Darkness"] },
    SpellBook { name: "Golden Order Principia", spells: &["Radagon's Rings of Light", "Law of Regression"] },
    SpellBook { name: "Dragon Cult Prayerbook", spells: &["Lightning Spear", "Honed Bolt"] },
    SpellBook { name: "Ancient Dragon Prayerbook", spells: &["Ancient Dragons' Lightning Strike", "Lightning Strike"] },
    SpellBook { name: "Fire Monks' Prayerbook", spells: &["O, Flame!", "Surge, O Flame!"] },
    SpellBook { name: "Giant's Prayerbook", spells: &["Flame, Cleanse Me", "Flame, Grant Me Strength"] },
    SpellBook { name: "Godskin Prayerbook", spells: &["Black Flame", "Black Flame Blade"] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_bearing_names() {
        assert_eq!(BellBearingFamily::SmithingStone.bearings().count(), 4);
        assert_eq!(BellBearingFamily::Somberstone.bearing(5), "Somberstone Miner's Bell Bearing [5]");
        assert_eq!(bell_bearings_required(BellBearingFamily::Somberstone, 2).item_names().len(), 5);
    }

    #[test]
    fn remembrance_table() {
        assert_eq!(REMEMBRANCES.iter().filter(|remembrance| !remembrance.dlc).count(), 15);
        assert_eq!(REMEMBRANCES.iter().filter(|remembrance| remembrance.dlc).count(), 10);
        assert_eq!(remembrance("Radahn").map(|remembrance| remembrance.item), Some("Remembrance of the Starscourge"));
        assert!(REMEMBRANCES.iter().all(|remembrance| remembrance.drop_location.contains(remembrance.item)));
    }
}
