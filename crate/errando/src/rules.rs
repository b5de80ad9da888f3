//! The access rules of the base game and the expansion, attached through [`World`]'s rule operations.

use {
    log::debug,
    crate::{
        access::Rule,
        model::{
            self,
            BellBearingFamily,
            PRAYERBOOKS,
            REGION_LOCKS,
            REMEMBRANCES,
            SCROLLS,
        },
        settings::{
            LateDlc,
            SmithingBellBearing,
            WorldLogic,
        },
        world::{
            Error,
            Invariant,
            World,
        },
    },
};

/// Cumulative Stonesword Key requirements. Each step assumes the previous ones were unlocked first.
const KEY_LOCATIONS: &[(u32, &[&str])] = &[
    (3, &["LG/(SWV): Green Turtle Talisman - behind imp statue"]),
    (6, &[
        "RH: Crepus's Black-Key Crossbow - behind imp statue in chest",
        "RH: Black-Key Bolt x20 - behind imp statue in chest",
        "RH: Assassin's Prayerbook - behind second imp statue in chest",
    ]),
    (8, &[
        "WP/(TCC): Nomadic Warrior's Cookbook [9] - behind imp statue",
        "WP/(WE): Radagon's Scarseal - Weeping Evergaol",
    ]),
    (14, &[
        "EBH/PR: Triple Rings of Light - exit PR then drop to E, behind imp statue",
        "EBH/PR: Marika's Soreseal - behind imp statue at the S end of the bottom area",
    ]),
];

const KEY_REGIONS: &[(u32, &str)] = &[
    (3, "Fringefolk Hero's Grave"),
    (11, "Gaol Cave"),
];

const DRAGON_COMMUNION: &[(u32, &[&str])] = &[
    (3, &[
        "LG/(CDC): Dragonfire - Dragon Communion",
        "LG/(CDC): Dragonclaw - Dragon Communion",
        "LG/(CDC): Dragonmaw - Dragon Communion",
    ]),
    (13, &[
        "CL/(CDC): Glintstone Breath - Dragon Communion",
        "CL/(CDC): Rotten Breath - Dragon Communion",
        "CL/(CDC): Dragonice - Dragon Communion",
        "CL/(CDC): Agheel's Flame - Dragon Communion",
        "CL/(CDC): Greyoll's Roar - Dragon Communion",
        "CL/(CDC): Ekzykes's Decay - Dragon Communion",
    ]),
    (20, &[
        "CL/(CDC): Magma Breath - Dragon Communion",
        "CL/(CDC): Theodorix's Magma - Dragon Communion",
        "CL/(CDC): Smarag's Glintstone Breath - Dragon Communion",
        "CL/(CDC): Borealis's Mist - Dragon Communion",
    ]),
];

const GURRANQ: &[(u32, &[&str])] = &[
    (1, &[
        "CL/(BS): Clawmark Seal - Gurranq, deathroot reward 1",
        "CL/(BS): Beast Eye - Gurranq, deathroot reward 1 or kill",
    ]),
    (2, &["CL/(BS): Bestial Sling - Gurranq, deathroot reward 2"]),
    (3, &["CL/(BS): Bestial Vitality - Gurranq, deathroot reward 3"]),
    (4, &["CL/(BS): Ash of War: Beast's Roar - Gurranq, deathroot reward 4"]),
];

const GOWRY_SHOP: &[&str] = &[
    "CL/(GS): Glintstone Stars - Gowry Shop",
    "CL/(GS): Night Shard - Gowry Shop",
    "CL/(GS): Night Maiden's Mist - Gowry Shop",
];

const HEIRLOOM: &str = "CL/(CP): Prosthesis-Wearer Heirloom - give Millicent fixed needle";
const PEST_THREADS: &str = "CL/(GS): Pest Threads - Gowry Shop after giving Valkyrie's Prosthesis to Millicent";
const MILLICENT_NEEDLE: &str = "EBH/EIW: Unalloyed Gold Needle (Milicent) - help Millicent talk then reload area";

fn boss_drop(boss: &str) -> Result<&'static str, Error> {
    model::remembrance(boss)
        .map(|remembrance| remembrance.drop_location)
        .ok_or_else(|| Invariant::UnknownLocation(format!("{} boss drop", boss)).into())
}

pub(crate) fn set_rules(world: &mut World<'_>) -> Result<(), Error> {
    key_rules(world)?;
    dragon_communion_rules(world)?;
    shop_rules(world)?;
    npc_rules(world)?;
    remembrance_rules(world)?;
    world_logic(world)?;
    progression_gates(world)?;
    if world.options.enable_dlc {
        dlc_rules(world)?;
    }
    if world.options.smithing_bell_bearing_option == SmithingBellBearing::ProgressionRandomize {
        bell_bearing_rules(world)?;
    }
    Ok(())
}

fn key_rules(world: &mut World<'_>) -> Result<(), Error> {
    for &(keys, locations) in KEY_LOCATIONS {
        world.add_location_rule(locations.iter().copied(), model::has_enough_keys(keys))?;
    }
    for &(keys, region) in KEY_REGIONS {
        world.add_entrance_rule(region, model::has_enough_keys(keys))?;
    }
    Ok(())
}

fn dragon_communion_rules(world: &mut World<'_>) -> Result<(), Error> {
    for &(hearts, locations) in DRAGON_COMMUNION {
        world.add_location_rule(locations.iter().copied(), model::has_enough_hearts(hearts))?;
    }
    Ok(())
}

/// Spells that only appear in a shop once its book was handed over.
fn shop_rules(world: &mut World<'_>) -> Result<(), Error> {
    for scroll in SCROLLS {
        let locations = scroll.spells.iter().map(|spell| format!("LG/(WR): {} - {}", spell, scroll.name)).collect::<Vec<_>>();
        world.add_location_rule(locations.iter().map(|location| &**location), scroll.name)?;
    }
    for book in PRAYERBOOKS {
        let locations = book.spells.iter().map(|spell| format!("RH: {} - {}", spell, book.name)).collect::<Vec<_>>();
        world.add_location_rule(locations.iter().map(|location| &**location), book.name)?;
    }
    Ok(())
}

/// Questlines are assumed to be followed without killing anyone.
fn npc_rules(world: &mut World<'_>) -> Result<(), Error> {
    // D, Hunter of the Dead
    world.add_location_rule(["RH: Litany of Proper Death - D shop", "RH: Order's Blade - D shop"], Rule::region("Bestial Sanctum"))?;
    for &(deathroot, locations) in GURRANQ {
        world.add_location_rule(locations.iter().copied(), Rule::items("Deathroot", deathroot))?;
    }
    // Gowry and Millicent
    world.add_location_rule([
        "CL/(GS): Sellia's Secret - talk to Gowry with needle",
        "CL/(GS): Unalloyed Gold Needle (Fixed) - talk to Gowry after giving needle",
    ], "Unalloyed Gold Needle (Broken)")?;
    world.add_location_rule([HEIRLOOM], "Unalloyed Gold Needle (Fixed)")?;
    world.add_location_rule(GOWRY_SHOP.iter().copied(), Rule::location(HEIRLOOM))?;
    world.add_location_rule([model::MILLICENT_GIVEN_PROSTHESIS], "Valkyrie's Prosthesis")?;
    world.add_location_rule([PEST_THREADS], model::MILLICENT_GIVEN_PROSTHESIS)?;
    world.add_location_rule(["CL/(GS): Desperate Prayer - buy 4th shop item"], Rule::location(PEST_THREADS))?;
    world.add_location_rule([
        "EBH/EIW: Rotten Winged Sword Insignia - help Millicent",
        MILLICENT_NEEDLE,
        "EBH/EIW: Millicent's Prosthesis - invade Millicent or kill in altus",
    ], model::MILLICENT_GIVEN_PROSTHESIS)?;
    world.add_location_rule(["CL/(GS): Flock's Canvas Talisman - kill Gowry or complete questline"], Rule::location(MILLICENT_NEEDLE))?;
    world.add_location_rule([
        "EBH/HR: Miquella's Needle - use needle on flower in boss arena after Millicent quest",
        "EBH/HR: Somber Ancient Dragon Smithing Stone - use needle on flower in boss arena after Millicent quest",
    ], Rule::all([Rule::location(MILLICENT_NEEDLE), Rule::item("Unalloyed Gold Needle (Milicent)")]))?;
    // paintings
    world.add_location_rule(["LG/SR: Incantation Scarab - \"Homing Instinct\" Painting reward to NW"], "\"Homing Instinct\" Painting")?;
    world.add_location_rule(["CL/MEE: Ash of War: Rain of Arrows - \"Redmane\" Painting reward down hidden cliff E of MEE"], "\"Redmane\" Painting")?;
    // the festival starts once the Altus Plateau is reached
    world.add_location_rule(["CL/(RC): Smithing Stone [6] - in church during festival"], Rule::region("Altus Plateau"))?;
    Ok(())
}

/// Enia trades each remembrance for one of two rewards once the player holds a great rune.
fn remembrance_rules(world: &mut World<'_>) -> Result<(), Error> {
    for remembrance in REMEMBRANCES {
        if remembrance.dlc && !world.options.enable_dlc { continue }
        let locations = remembrance.rewards.iter().map(|(reward, _)| format!("RH: {} - Enia for {}", reward, remembrance.boss)).collect::<Vec<_>>();
        world.add_location_rule(
            locations.iter().map(|location| &**location),
            Rule::all([Rule::item(remembrance.item), model::has_enough_great_runes(1)]),
        )?;
    }
    Ok(())
}

fn world_logic(world: &mut World<'_>) -> Result<(), Error> {
    match world.options.world_logic {
        WorldLogic::RegionLock => for &(lock, regions) in REGION_LOCKS {
            for region in regions {
                world.add_entrance_rule(region, lock)?;
            }
        },
        WorldLogic::RegionLockBosses => debug!("{}: region_lock_bosses adds no gating", world.player_name),
        WorldLogic::OpenWorld => {
            world.add_entrance_rule("Leyndell, Royal Capital", model::has_enough_great_runes(world.options.great_runes_required.into()))?;
            if world.options.soft_logic {
                world.add_entrance_rule("Caelid", Rule::region("Stormveil Castle"))?;
                world.add_entrance_rule("Sellia Crystal Tunnel", Rule::region("Stormveil Castle"))?;
                world.add_entrance_rule("Dragonbarrow", Rule::region("Altus Plateau"))?;
            }
        }
    }
    Ok(())
}

fn progression_gates(world: &mut World<'_>) -> Result<(), Error> {
    world.add_entrance_rule("Grand Lift of Dectus", Rule::all([Rule::item("Dectus Medallion (Left)"), Rule::item("Dectus Medallion (Right)")]))?;
    world.add_entrance_rule("Grand Lift of Rold", "Rold Medallion")?;
    world.add_entrance_rule("Consecrated Snowfield", Rule::all([
        Rule::item("Haligtree Secret Medallion (Left)"),
        Rule::item("Haligtree Secret Medallion (Right)"),
    ]))?;
    world.add_entrance_rule("Raya Lucaria Academy", "Academy Glintstone Key")?;
    world.add_entrance_rule("Chapel of Anticipation [Return]", "Imbued Sword Key")?;
    world.add_entrance_rule("Nokron, Eternal City", Rule::location(boss_drop("Radahn")?))?;
    world.add_entrance_rule("Forbidden Lands", Rule::location(boss_drop("Morgott")?))?;
    world.add_entrance_rule("Crumbling Farum Azula", Rule::location(boss_drop("Fire Giant")?))?;
    world.add_entrance_rule("Leyndell, Ashen Capital", Rule::location(boss_drop("Maliketh")?))?;
    world.add_entrance_rule("Elden Throne", Rule::location(boss_drop("Hoarah Loux")?))?;
    let snowfield = Rule::region("Consecrated Snowfield");
    let mohgwyn = if world.options.enable_dlc && world.options.late_dlc == LateDlc::Off {
        Rule::any([Rule::item(model::PUREBLOOD_MEDAL), snowfield])
    } else {
        snowfield
    };
    world.add_entrance_rule("Mohgwyn Palace", mohgwyn)
}

fn dlc_rules(world: &mut World<'_>) -> Result<(), Error> {
    let mut entry = vec![Rule::location(boss_drop("Mohg")?), Rule::location(boss_drop("Radahn")?)];
    if world.options.late_dlc == LateDlc::AfterMedallion {
        entry.extend([
            Rule::item("Rold Medallion"),
            Rule::item("Haligtree Secret Medallion (Left)"),
            Rule::item("Haligtree Secret Medallion (Right)"),
        ]);
    }
    world.add_entrance_rule("Gravesite Plain", Rule::all(entry))?;
    world.add_location_rule([
        "GADC: Bayle's Flame Lightning - Altar for Heart of Bayle",
        "GADC: Bayle's Tyranny - Altar for Heart of Bayle",
    ], "Heart of Bayle")?;
    let mut enir_ilim = Rule::location(boss_drop("Messmer")?);
    if world.options.messmer_kindle {
        enir_ilim = enir_ilim.and(model::kindling_required(world.options.messmer_kindle_required.into()));
    }
    world.add_entrance_rule("Enir-Ilim", enir_ilim)
}

/// The regions after the ones a bearing is usually found in expect the bearings of that tier.
fn bell_bearing_rules(world: &mut World<'_>) -> Result<(), Error> {
    for &(region, smithing, somber) in model::BELL_BEARING_GATES {
        world.add_entrance_rule(region, Rule::all([
            model::bell_bearings_required(BellBearingFamily::SmithingStone, smithing),
            model::bell_bearings_required(BellBearingFamily::Somberstone, somber),
        ]))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        crate::{
            catalog::CATALOG,
            settings::{
                GenerationPolicy,
                Options,
            },
            host::Player,
        },
        super::*,
    };

    fn generated(options: Options) -> World<'static> {
        let mut world = World::new(Player(1), "Tarnished", options, &CATALOG, &GenerationPolicy::default(), 7).expect("invalid options");
        world.generate().expect("generation failed");
        world
    }

    fn entrance_rule(world: &World<'_>, region: &str) -> Rule {
        Rule::all(world.entrances_into(region).map(|entrance| entrance.rule.clone()))
    }

    #[test]
    fn key_thresholds_are_cumulative() {
        let thresholds = KEY_LOCATIONS.iter().map(|(keys, _)| *keys).chain(KEY_REGIONS.iter().map(|(keys, _)| *keys)).collect::<Vec<_>>();
        assert!(thresholds.iter().all(|keys| [3, 6, 8, 11, 14].contains(keys)));
        let world = generated(Options::default());
        let rule = &world.location("WP/(WE): Radagon's Scarseal - Weeping Evergaol").expect("missing location").rule;
        assert_eq!(*rule, model::has_enough_keys(8));
        assert_eq!(entrance_rule(&world, "Gaol Cave"), model::has_enough_keys(11));
    }

    #[test]
    fn every_rule_target_exists() {
        for (_, locations) in KEY_LOCATIONS.iter().chain(DRAGON_COMMUNION).chain(GURRANQ) {
            for location in *locations {
                assert!(CATALOG.location(location).is_some(), "{}", location);
            }
        }
        for location in GOWRY_SHOP.iter().chain(&[HEIRLOOM, PEST_THREADS, MILLICENT_NEEDLE]) {
            assert!(CATALOG.location(location).is_some(), "{}", location);
        }
        for (_, region) in KEY_REGIONS {
            assert!(CATALOG.region(region).is_some(), "{}", region);
        }
    }

    #[test]
    fn shops_need_their_books() {
        let world = generated(Options::default());
        let rule = &world.location("RH: Lord's Heal - Two Fingers' Prayerbook").expect("missing location").rule;
        assert_eq!(*rule, Rule::item("Two Fingers' Prayerbook"));
    }

    #[test]
    fn region_locks() {
        let world = generated(Options { world_logic: WorldLogic::RegionLock, ..Options::default() });
        for entrance in world.entrances_into("Weeping Peninsula") {
            assert!(entrance.rule.item_names().contains("Weeping Lock"));
        }
        assert!(entrance_rule(&world, "Leyndell, Royal Capital").item_names().contains("Leyndell Lock"));
        assert!(!entrance_rule(&world, "Leyndell, Royal Capital").item_names().contains("Godrick's Great Rune"));
        let world = generated(Options { world_logic: WorldLogic::RegionLockBosses, ..Options::default() });
        assert!(!entrance_rule(&world, "Weeping Peninsula").item_names().contains("Weeping Lock"));
    }

    #[test]
    fn soft_logic_registers_indirect_conditions() {
        let world = generated(Options { world_logic: WorldLogic::OpenWorld, ..Options::default() });
        assert_eq!(entrance_rule(&world, "Dragonbarrow"), Rule::region("Altus Plateau"));
        assert!(world.indirect_conditions().contains(&(format!("Altus Plateau"), format!("Go To Dragonbarrow"))));
        let world = generated(Options { world_logic: WorldLogic::OpenWorld, soft_logic: false, ..Options::default() });
        assert!(entrance_rule(&world, "Dragonbarrow").is_true());
    }

    #[test]
    fn dlc_entry() {
        let world = generated(Options { enable_dlc: true, ..Options::default() });
        let rule = entrance_rule(&world, "Gravesite Plain");
        assert!(rule.item_names().is_empty());
        assert!(rule.location_names().contains("MP: Remembrance of the Blood Lord - boss drop"));
        assert!(entrance_rule(&world, "Mohgwyn Palace").item_names().contains(model::PUREBLOOD_MEDAL));
        let world = generated(Options { enable_dlc: true, late_dlc: LateDlc::AfterMedallion, ..Options::default() });
        assert!(entrance_rule(&world, "Gravesite Plain").item_names().contains("Rold Medallion"));
        assert!(!entrance_rule(&world, "Mohgwyn Palace").item_names().contains(model::PUREBLOOD_MEDAL));
        let world = generated(Options { enable_dlc: true, messmer_kindle: true, messmer_kindle_required: 4, ..Options::default() });
        assert!(entrance_rule(&world, "Enir-Ilim").item_names().contains(model::KINDLING));
        let kindling = world.itempool().iter().chain(world.precollected()).filter(|item| item.name == model::KINDLING).count();
        assert!(kindling >= 10);
    }

    #[test]
    fn bell_bearing_gates_follow_the_option() {
        let world = generated(Options::default());
        assert!(entrance_rule(&world, "Crumbling Farum Azula").item_names().contains("Somberstone Miner's Bell Bearing [1]"));
        let world = generated(Options { smithing_bell_bearing_option: SmithingBellBearing::Randomize, ..Options::default() });
        assert!(entrance_rule(&world, "Crumbling Farum Azula").item_names().is_empty());
    }
}
