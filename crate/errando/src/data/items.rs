use crate::{
    item::{
        ItemCategory,
        ItemData,
    },
    model::{
        BellBearingFamily,
        GreatRune,
        PRAYERBOOKS,
        REGION_LOCKS,
        REMEMBRANCES,
        SCROLLS,
    },
};

/// Where each category's IDs start in the game's param tables.
fn game_id_base(category: ItemCategory) -> u32 {
    match category {
        ItemCategory::Weapon => 1_000_000,
        ItemCategory::Armor => 10_000_000,
        ItemCategory::Accessory => 20_000_000,
        ItemCategory::AshOfWar => 80_000_000,
        ItemCategory::Goods => 40_000_000,
        ItemCategory::CustomWeapon => 90_000_000,
    }
}

fn goods<'a>(names: &'a [&'a str]) -> impl Iterator<Item = ItemData> + 'a {
    names.iter().map(|&name| ItemData::goods(name))
}

pub(crate) fn items() -> Vec<ItemData> {
    let mut items = Vec::default();
    // key items
    items.extend([
        ItemData::goods("Stonesword Key").progression(),
        ItemData::goods("Stonesword Key x3").progression(),
        ItemData::goods("Rusty Key").useful(),
        ItemData::goods("Academy Glintstone Key").progression(),
        ItemData::goods("Imbued Sword Key").progression(),
        ItemData::goods("Drawing-Room Key").useful(),
        ItemData::goods("Discarded Palace Key").useful(),
        ItemData::goods("Dectus Medallion (Left)").progression(),
        ItemData::goods("Dectus Medallion (Right)").progression(),
        ItemData::goods("Rold Medallion").progression(),
        ItemData::goods("Haligtree Secret Medallion (Left)").progression(),
        ItemData::goods("Haligtree Secret Medallion (Right)").progression(),
        ItemData::goods("Dragon Heart").progression(),
        ItemData::goods("Dragon Heart x5").progression(),
        ItemData::goods("Deathroot").progression(),
        ItemData::goods("Unalloyed Gold Needle (Broken)").progression(),
        ItemData::goods("Unalloyed Gold Needle (Fixed)").progression(),
        ItemData::goods("Unalloyed Gold Needle (Milicent)").progression(),
        ItemData::weapon("Valkyrie's Prosthesis").progression(),
        ItemData::goods("\"Homing Instinct\" Painting").progression(),
        ItemData::goods("\"Redmane\" Painting").progression(),
        ItemData::goods("Pureblood Knight's Medal").useful(),
        ItemData::goods("Heart of Bayle").progression().dlc(),
        ItemData::goods("Messmer's Kindling").progression().dlc(),
        ItemData::goods("Talisman Pouch").useful().injectable(),
        ItemData::goods("Memory Stone").useful().injectable(),
        ItemData::goods("Larval Tear").useful().injectable(),
        ItemData::goods("Spirit Calling Bell").useful(),
        ItemData::goods("Crafting Kit").useful(),
        ItemData::goods("Whetstone Knife").useful(),
        ItemData::goods("Sewing Needle").useful(),
        ItemData::goods("Tailoring Tools").useful(),
        ItemData::goods("Flask of Wondrous Physick").useful(),
        ItemData::goods("Hammer").useful(),
        ItemData::goods("Tarnished's Wizened Finger").skip(),
        ItemData::goods("Finger Severer").skip(),
        ItemData::goods("Note: Flask of Wondrous Physick").skip(),
        ItemData::goods("Torch").skip(),
    ]);
    items.extend(enum_iterator::all::<GreatRune>().map(|rune| ItemData::goods(rune.item_name()).progression()));
    for family in enum_iterator::all::<BellBearingFamily>() {
        items.extend(family.bearings().map(|bearing| ItemData::goods(bearing).useful().smithing_bell_bearing()));
    }
    // region locks only exist for the randomizer, so they have no game ID
    items.extend(REGION_LOCKS.iter().map(|(lock, _)| ItemData::goods(*lock).progression()));
    for remembrance in REMEMBRANCES {
        let item = ItemData::goods(remembrance.item).progression();
        items.push(if remembrance.dlc { item.dlc() } else { item });
        for &(reward, category) in remembrance.rewards {
            let item = ItemData::new(reward, category).useful();
            items.push(if remembrance.dlc { item.dlc() } else { item });
        }
    }
    for book in SCROLLS.iter().chain(PRAYERBOOKS) {
        items.push(ItemData::goods(book.name).progression());
        items.extend(book.spells.iter().map(|&spell| ItemData::goods(spell).useful()));
    }
    // other spells
    items.extend(goods(&[
        "Dragonfire", "Dragonclaw", "Dragonmaw", "Glintstone Breath", "Rotten Breath", "Dragonice",
        "Agheel's Flame", "Greyoll's Roar", "Ekzykes's Decay", "Magma Breath", "Theodorix's Magma",
        "Smarag's Glintstone Breath", "Borealis's Mist", "Litany of Proper Death", "Order's Blade",
        "Glintstone Pebble", "Glintstone Stars", "Night Shard", "Night Maiden's Mist", "Pest Threads",
        "Desperate Prayer", "Heal from Afar", "Sellen's Primal Glintstone", "Sellia's Secret",
    ]).map(ItemData::useful));
    items.extend([
        ItemData::goods("Bayle's Flame Lightning").useful().dlc(),
        ItemData::goods("Bayle's Tyranny").useful().dlc(),
    ]);
    // spirit ashes
    items.extend(goods(&[
        "Banished Knight Oleg", "Lone Wolf Ashes", "Noble Sorcerer Ashes", "Spirit Jellyfish Ashes",
        "Ancestral Follower Ashes", "Mimic Tear Ashes", "Black Knife Tiche", "Putrid Corpse Ashes",
        "Warhawk Ashes", "Nightmaiden & Swordstress Puppets",
    ]).map(ItemData::useful));
    // upgrades and consumables
    items.extend(goods(&[
        "Golden Seed", "Sacred Tear", "Somber Ancient Dragon Smithing Stone", "Cerulean Crystal Tear",
        "Greenburst Crystal Tear", "Crimsonburst Crystal Tear", "Opaline Bubbletear", "Cerulean Hidden Tear",
        "Crepus's Vial",
    ]).map(ItemData::useful));
    items.extend([
        ItemData::goods("Scadutree Fragment").useful().dlc(),
        ItemData::goods("Revered Spirit Ash").useful().dlc(),
        ItemData::goods("Blessing of Marika").useful().dlc(),
        ItemData::goods("Map: Gravesite Plain").dlc(),
        ItemData::goods("Map: Scadu Altus").dlc(),
    ]);
    items.extend(goods(&[
        "Map: Limgrave, West", "Map: Limgrave, East", "Map: Weeping Peninsula", "Map: Liurnia, East",
        "Map: Liurnia, North", "Map: Caelid", "Map: Dragonbarrow", "Map: Altus Plateau", "Map: Mt. Gelmir",
        "Map: Leyndell, Royal Capital", "Map: Mountaintops of the Giants, West", "Map: Consecrated Snowfield",
    ]));
    items.extend(goods(&[
        "Golden Rune [1]", "Golden Rune [2]", "Golden Rune [4]", "Golden Rune [5]", "Golden Rune [10]",
        "Golden Rune [12]", "Golden Rune [13]", "Smithing Stone [1]", "Smithing Stone [2]", "Smithing Stone [6]",
        "Smithing Stone [8]", "Mushroom", "Arteria Leaf", "Glowstone", "Great Ghost Glovewort", "Bloody Finger",
        "Dragonwound Grease", "Cuckoo Glintstone", "Prattling Pate \"Hello\"", "Black-Key Bolt x20",
        "Ailing Villager's Cookbook [1]", "Nomadic Warrior's Cookbook [3]", "Nomadic Warrior's Cookbook [6]",
        "Nomadic Warrior's Cookbook [9]", "Nomadic Warrior's Cookbook [11]", "Chrysalids' Memento",
    ]));
    items.extend([
        ItemData::goods("Shadow Realm Rune [1]").dlc(),
        ItemData::goods("Shadow Realm Rune [2]").dlc(),
        ItemData::goods("Hefty Furnace Pot").dlc(),
        ItemData::goods("Rainbow Stone x5"),
        ItemData::goods("Rowa Raisin x3"),
    ]);
    // weapons
    items.extend([
        "Ornamental Straight Sword", "Golden Beast Crest Shield", "Bloodhound's Fang", "Flail", "Twinblade",
        "Uchigatana", "Assassin's Crimson Dagger", "Hawk Crest Wooden Shield", "Grafted Blade Greatsword",
        "Meteorite Staff", "Rosus' Axe", "Crystal Knife", "Glintstone Kris", "Carian Knight's Sword",
        "Magma Wyrm's Scalesword", "Fingerslayer Blade", "Cipher Pata", "Black Knife", "Bloody Helice",
        "Dragonscale Blade", "Ruins Greatsword", "Magma Whip Candlestick", "Crepus's Black-Key Crossbow",
        "Millicent's Prosthesis",
    ].iter().map(|&name| ItemData::weapon(name).useful()));
    items.extend([
        "Cloth Garb", "Leather Armor", "Bloodhound Knight Armor",
    ].iter().map(|&name| ItemData::armor(name)));
    // talismans
    items.extend([
        "Green Turtle Talisman", "Radagon's Scarseal", "Marika's Soreseal", "Claw Talisman", "Flamedrake Talisman",
        "Graven-School Talisman", "Radagon Icon", "Dark Moon Ring", "Roar Medallion", "Flock's Canvas Talisman",
        "Prosthesis-Wearer Heirloom", "Rotten Winged Sword Insignia", "Talisman of Lord's Bestowal",
        "Crimson Tear Scarab", "Mohg's Shackle",
    ].iter().map(|&name| ItemData::accessory(name).useful()));
    items.extend([
        "Ash of War: Lion's Claw", "Ash of War: Storm Stomp", "Ash of War: Unsheathe", "Ash of War: Determination",
        "Ash of War: Glintblade Phalanx", "Ash of War: Poison Moth Flight", "Ash of War: Rain of Arrows",
        "Ash of War: Barricade Shield", "Ash of War: Beast's Roar",
    ].iter().map(|&name| ItemData::ash_of_war(name).useful()));
    items.extend([
        ItemData::goods("Incantation Scarab").useful(),
        ItemData::goods("Clawmark Seal").useful(),
        ItemData::goods("Beast Eye").useful(),
        ItemData::goods("Bestial Sling").useful(),
        ItemData::goods("Bestial Vitality").useful(),
        ItemData::goods("Triple Rings of Light").useful(),
        ItemData::goods("Flame of the Redmanes").useful(),
        ItemData::goods("Royal Knight's Resolve").useful(),
        ItemData::goods("Miquella's Needle").useful(),
    ]);
    let mut next = std::collections::HashMap::<ItemCategory, u32>::default();
    for item in &mut items {
        if REGION_LOCKS.iter().any(|(lock, _)| item.name == *lock) { continue }
        let offset = next.entry(item.category).or_default();
        item.game_id = Some(game_id_base(item.category) + *offset * 10);
        *offset += 1;
    }
    items
}
