use crate::{
    catalog::RegionData,
    location::LocationData,
    model::REMEMBRANCES,
};

fn l(name: &str, item: &str) -> LocationData { LocationData::new(name, item) }

/// Roundtable Hold, including one Enia exchange per remembrance reward.
fn roundtable_hold() -> RegionData {
    let mut locations = vec![
        l("RH: Stonesword Key x3 - Twin Maiden Husks shop", "Stonesword Key x3").shop(),
        l("RH: Crepus's Black-Key Crossbow - behind imp statue in chest", "Crepus's Black-Key Crossbow"),
        l("RH: Black-Key Bolt x20 - behind imp statue in chest", "Black-Key Bolt x20"),
        l("RH: Assassin's Prayerbook - behind second imp statue in chest", "Assassin's Prayerbook").progression(),
        l("RH: Litany of Proper Death - D shop", "Litany of Proper Death").shop().npc().missable(),
        l("RH: Order's Blade - D shop", "Order's Blade").shop().npc().missable(),
        l("RH: Cipher Pata - table by Fia", "Cipher Pata"),
        l("RH: Crepus's Vial - Fia's room", "Crepus's Vial").hidden(),
        l("RH: Memory Stone - Twin Maiden Husks shop", "Memory Stone").shop(),
        l("RH: Nomadic Warrior's Cookbook [3] - Twin Maiden Husks shop", "Nomadic Warrior's Cookbook [3]").shop(),
        l("RH: Hammer - Smithing Master Hewg gift", "Hammer").npc(),
    ];
    for book in crate::model::PRAYERBOOKS {
        for spell in book.spells {
            locations.push(l(&format!("RH: {} - {}", spell, book.name), spell).shop().npc());
        }
    }
    for remembrance in REMEMBRANCES {
        for (reward, _) in remembrance.rewards {
            let location = l(&format!("RH: {} - Enia for {}", reward, remembrance.boss), reward).shop().npc();
            locations.push(if remembrance.dlc { location.dlc() } else { location });
        }
    }
    RegionData::new("Roundtable Hold", locations)
}

pub(crate) fn regions() -> Vec<RegionData> {
    let mut waypoint_ruins = vec![
        l("LG/(WR): Sellen's Primal Glintstone - Sellen quest", "Sellen's Primal Glintstone").npc().missable(),
        l("LG/(WR): Glintstone Pebble - Sellen shop", "Glintstone Pebble").shop().npc(),
        l("LG/(WR): Golden Seed - cellar boss drop", "Golden Seed").boss(),
    ];
    for scroll in crate::model::SCROLLS {
        for spell in scroll.spells {
            waypoint_ruins.push(l(&format!("LG/(WR): {} - {}", spell, scroll.name), spell).shop().npc().conditional().missable());
        }
    }
    vec![
        RegionData::new("Chapel of Anticipation", vec![
            l("CA: Ornamental Straight Sword - boss drop", "Ornamental Straight Sword").boss().missable(),
            l("CA: Golden Beast Crest Shield - boss drop", "Golden Beast Crest Shield").boss().missable(),
            l("CA: Finger Severer - Grafted Scion chest", "Finger Severer").missable(),
        ]),
        RegionData::new("Stranded Graveyard", vec![
            l("SG: Tarnished's Wizened Finger - start", "Tarnished's Wizened Finger").static_key("0:10000"),
            l("SG: Golden Rune [1] - corpse by graves", "Golden Rune [1]"),
            l("SG: Map: Limgrave, West - Gatefront stele", "Map: Limgrave, West").static_key("0:10001"),
        ]),
        RegionData::new("Fringefolk Hero's Grave", vec![
            l("LG/FHG: Banished Knight Oleg - chariot gauntlet chest", "Banished Knight Oleg"),
            l("LG/FHG: Golden Seed - boss drop", "Golden Seed").boss(),
            l("LG/FHG: Stonesword Key - chariot gauntlet corpse", "Stonesword Key"),
        ]),
        RegionData::new("Limgrave", vec![
            l("LG: Flask of Wondrous Physick - Third Church road", "Flask of Wondrous Physick"),
            l("LG: Torch - Kalé shop", "Torch").shop(),
            l("LG: Map: Limgrave, East - Mistwood stele", "Map: Limgrave, East"),
            l("LG: Dragon Heart - Flying Dragon Agheel drop", "Dragon Heart").boss(),
            l("LG: Golden Seed - Sites of Grace sapling by Gatefront", "Golden Seed"),
            l("LG: Golden Seed - sapling at Saintsbridge", "Golden Seed"),
            l("LG: Spirit Calling Bell - Ranni at Church of Elleh", "Spirit Calling Bell").npc(),
            l("LG: Lone Wolf Ashes - Ranni at Church of Elleh", "Lone Wolf Ashes").npc(),
            l("LG: Stonesword Key - Waypoint Ruins approach", "Stonesword Key"),
            l("LG: Golden Rune [1] - beach corpse", "Golden Rune [1]"),
            l("LG: Smithing Stone [1] - Dragon-Burnt Ruins road", "Smithing Stone [1]"),
            l("LG: Black Knife - Nerijus invasion", "Black Knife").hostile_npc().missable(),
            l("LG: Bloodhound's Fang - Bloodhound Knight Darriwil", "Bloodhound's Fang").boss(),
            l("LG: Ash of War: Lion's Claw - scarab near Stormgate", "Ash of War: Lion's Claw").scarab(),
            l("LG: Crimson Tear Scarab - scarab under Saintsbridge", "Crimson Tear Scarab").scarab(),
            l("LG: Arteria Leaf - Tree Sentinel flowers", "Arteria Leaf"),
            l("LG: Golden Rune [1] - Stormhill corpse", "Golden Rune [1]"),
            l("LG: Deathroot - Tibia Mariner at Summonwater", "Deathroot").boss(),
        ]),
        RegionData::new("Church of Elleh", vec![
            l("LG/CE: Smithing Stone [1] - church altar", "Smithing Stone [1]"),
            l("LG/CE: Crafting Kit - Kalé shop", "Crafting Kit").shop(),
        ]),
        RegionData::new("Coastal Cave", vec![
            l("LG/CC: Sewing Needle - boss drop", "Sewing Needle").boss(),
            l("LG/CC: Tailoring Tools - boss drop", "Tailoring Tools").boss(),
        ]),
        RegionData::new("Church of Dragon Communion", vec![
            l("LG/(CDC): Dragonfire - Dragon Communion", "Dragonfire").shop(),
            l("LG/(CDC): Dragonclaw - Dragon Communion", "Dragonclaw").shop(),
            l("LG/(CDC): Dragonmaw - Dragon Communion", "Dragonmaw").shop(),
            l("LG/(CDC): Stonesword Key - church entrance", "Stonesword Key"),
        ]),
        RegionData::new("Groveside Cave", vec![
            l("LG/GC: Flamedrake Talisman - boss drop", "Flamedrake Talisman").boss(),
            l("LG/GC: Cloth Garb - cave corpse", "Cloth Garb"),
        ]),
        RegionData::new("Stormfoot Catacombs", vec![
            l("LG/SFC: Noble Sorcerer Ashes - boss drop", "Noble Sorcerer Ashes").boss(),
            l("LG/SFC: Prattling Pate \"Hello\" - behind fire trap", "Prattling Pate \"Hello\""),
        ]),
        RegionData::new("Gatefront Ruins", vec![
            l("LG/GR: Map: Limgrave, West - ruins stele", "Map: Limgrave, West"),
            l("LG/GR: Whetstone Knife - cellar chest", "Whetstone Knife").progression(),
            l("LG/GR: Ash of War: Storm Stomp - cellar chest", "Ash of War: Storm Stomp"),
            l("LG/GR: Flail - ruins corpse", "Flail"),
        ]),
        RegionData::new("Limgrave Tunnels", vec![
            l("LG/LT: Roar Medallion - boss drop", "Roar Medallion").boss(),
            l("LG/LT: Smithing Stone [1] - miner corpse", "Smithing Stone [1]"),
        ]),
        RegionData::new("Stormhill Shack", vec![
            l("LG/SS: Note: Flask of Wondrous Physick - Roderika's shack", "Note: Flask of Wondrous Physick"),
            l("LG/SS: Spirit Jellyfish Ashes - Roderika", "Spirit Jellyfish Ashes").npc(),
        ]),
        RegionData::new("Waypoint Ruins", waypoint_ruins),
        RegionData::new("Dragon-Burnt Ruins", vec![
            l("LG/DBR: Twinblade - cellar chest", "Twinblade"),
            l("LG/DBR: Stonesword Key - ruins cellar", "Stonesword Key"),
        ]),
        RegionData::new("Murkwater Cave", vec![
            l("LG/MC: Bloody Finger - Patches", "Bloody Finger").npc().missable(),
            l("LG/MC: Leather Armor - Patches chest", "Leather Armor"),
        ]),
        RegionData::new("Mistwood Ruins", vec![
            l("LG/MR: Golden Seed - Mistwood sapling", "Golden Seed"),
            l("LG/MR: Ash of War: Determination - Mistwood cellar", "Ash of War: Determination"),
        ]),
        RegionData::new("Fort Haight", vec![
            l("LG/(FH): Dectus Medallion (Right) - tower chest", "Dectus Medallion (Right)").progression(),
            l("LG/(FH): Bloodhound Knight Armor - fort corpse", "Bloodhound Knight Armor"),
        ]),
        RegionData::new("Third Church of Marika", vec![
            l("LG/TCM: Sacred Tear - church", "Sacred Tear"),
            l("LG/TCM: Flask of Wondrous Physick - church basin", "Flask of Wondrous Physick"),
        ]),
        RegionData::new("LG Artist's Shack", vec![
            l("LG/(AS): \"Homing Instinct\" Painting - painting", "\"Homing Instinct\" Painting"),
        ]),
        RegionData::new("Summonwater Village", vec![
            l("LG/(SWV): Green Turtle Talisman - behind imp statue", "Green Turtle Talisman"),
            l("LG/(SWV): Deathroot - boss drop", "Deathroot").boss(),
            l("LG/(SWV): Mushroom - village corpse", "Mushroom"),
        ]),
        RegionData::new("Deathtouched Catacombs", vec![
            l("LG/DC: Assassin's Crimson Dagger - boss drop", "Assassin's Crimson Dagger").boss(),
            l("LG/DC: Uchigatana - catacombs corpse", "Uchigatana"),
        ]),
        RegionData::new("Warmaster's Shack", vec![
            l("LG/WS: Smithing Stone [2] - Warmaster corpse", "Smithing Stone [2]"),
        ]),
        roundtable_hold(),
        RegionData::new("Bridge of Sacrifice", vec![
            l("LG/BS: Golden Rune [2] - bridge corpse", "Golden Rune [2]"),
        ]),
        RegionData::new("Stormveil Castle", vec![
            l("SC: Remembrance of the Grafted - boss drop", "Remembrance of the Grafted").main_boss().remembrance(),
            l("SC: Godrick's Great Rune - boss drop", "Godrick's Great Rune").main_boss(),
            l("SC: Rusty Key - Liftside Chamber", "Rusty Key").progression(),
            l("SC: Stonesword Key - rampart tower", "Stonesword Key"),
            l("SC: Stonesword Key - Secluded Cell", "Stonesword Key"),
            l("SC: Golden Seed - Margit boss drop", "Golden Seed").boss(),
            l("SC: Talisman Pouch - Margit boss drop", "Talisman Pouch").boss(),
            l("SC: Ash of War: Unsheathe - Grafted Scion drop", "Ash of War: Unsheathe").drop(),
            l("SC: Chrysalids' Memento - Gostoc's cell", "Chrysalids' Memento").npc(),
            l("SC: Hawk Crest Wooden Shield - rampart corpse", "Hawk Crest Wooden Shield"),
        ]),
        RegionData::new("Weeping Peninsula", vec![
            l("WP/(TCC): Nomadic Warrior's Cookbook [9] - behind imp statue", "Nomadic Warrior's Cookbook [9]"),
            l("WP/(WE): Radagon's Scarseal - Weeping Evergaol", "Radagon's Scarseal").boss(),
            l("WP: Map: Weeping Peninsula - Castle Morne approach stele", "Map: Weeping Peninsula"),
            l("WP: Golden Seed - Church of Pilgrimage sapling", "Golden Seed"),
            l("WP: Sacred Tear - Church of Pilgrimage", "Sacred Tear"),
            l("WP: Stonesword Key - Tombsward Ruins", "Stonesword Key"),
            l("WP: Opaline Bubbletear - scarab at Isolated Merchant's", "Opaline Bubbletear").scarab(),
            l("WP: Ailing Villager's Cookbook [1] - Minor Erdtree", "Ailing Villager's Cookbook [1]"),
            l("WP: Larval Tear - Ailing Villager", "Larval Tear").hidden(),
        ]),
        RegionData::new("Castle Morne", vec![
            l("WP/CM: Grafted Blade Greatsword - boss drop", "Grafted Blade Greatsword").boss(),
            l("WP/CM: Nomadic Warrior's Cookbook [6] - castle corpse", "Nomadic Warrior's Cookbook [6]"),
            l("WP/CM: Claw Talisman - castle chest", "Claw Talisman"),
        ]),
        RegionData::new("Liurnia of The Lakes", vec![
            l("LRL: Academy Glintstone Key - Glintstone Dragon Smarag", "Academy Glintstone Key").boss().progression(),
            l("LRL: Dragon Heart - Glintstone Dragon Smarag", "Dragon Heart").boss(),
            l("LRL: Dragon Heart - Glintstone Dragon Adula", "Dragon Heart").boss(),
            l("LRL: Academy Scroll - corpse near academy gate", "Academy Scroll"),
            l("LRL: Dectus Medallion (Left) - Dectus Lift tower", "Dectus Medallion (Left)").progression(),
            l("LRL: Dragon Cult Prayerbook - Stormcaller Church", "Dragon Cult Prayerbook"),
            l("LRL: Map: Liurnia, East - Liurnia Highway stele", "Map: Liurnia, East"),
            l("LRL: Map: Liurnia, North - Academy Gate Town stele", "Map: Liurnia, North"),
            l("LRL: Golden Seed - Liurnia Highway sapling", "Golden Seed"),
            l("LRL: Cerulean Crystal Tear - Converted Fringe Tower basin", "Cerulean Crystal Tear"),
            l("LRL: Stonesword Key - Laskyar Ruins", "Stonesword Key"),
            l("LRL: Stonesword Key - Liurnia Highway", "Stonesword Key"),
            l("LRL: Smithing-Stone Miner's Bell Bearing [1] - Crystal Tunnel boss drop", "Smithing-Stone Miner's Bell Bearing [1]").boss(),
            l("LRL: Deathroot - Tibia Mariner drop", "Deathroot").boss(),
            l("LRL: Ash of War: Glintblade Phalanx - scarab in Academy Gate Town", "Ash of War: Glintblade Phalanx").scarab(),
            l("LRL: Imbued Sword Key - Four Belfries chest", "Imbued Sword Key").progression(),
            l("LRL: Meteorite Staff - Street of Sages Ruins", "Meteorite Staff"),
            l("LRL: Rosus' Axe - Bellum Church rise puzzle", "Rosus' Axe").rise_puzzle(),
            l("LRL: Crystal Knife - Converted Tower", "Crystal Knife"),
            l("LRL: Cuckoo Glintstone - Converted Tower", "Cuckoo Glintstone"),
        ]),
        RegionData::new("Raya Lucaria Academy", vec![
            l("RLA: Remembrance of the Full Moon Queen - boss drop", "Remembrance of the Full Moon Queen").main_boss().remembrance(),
            l("RLA: Great Rune of the Unborn - boss drop", "Great Rune of the Unborn").main_boss(),
            l("RLA: Conspectus Scroll - Debate Parlor chest", "Conspectus Scroll"),
            l("RLA: Glintstone Kris - academy rooftop corpse", "Glintstone Kris"),
            l("RLA: Graven-School Talisman - Schoolhouse Classroom", "Graven-School Talisman"),
            l("RLA: Golden Seed - Debate Parlor boss drop", "Golden Seed").boss(),
            l("RLA: Radagon Icon - academy library", "Radagon Icon"),
        ]),
        RegionData::new("Caria Manor", vec![
            l("CRM: Royal House Scroll - manor chest", "Royal House Scroll"),
            l("CRM: Royal Knight's Resolve - boss drop", "Royal Knight's Resolve").boss(),
            l("CRM: Greenburst Crystal Tear - manor basin", "Greenburst Crystal Tear"),
            l("CRM: Carian Knight's Sword - manor corpse", "Carian Knight's Sword"),
        ]),
        RegionData::new("Chapel of Anticipation [Return]", vec![
            l("CA/R: Golden Rune [12] - chapel altar", "Golden Rune [12]").hidden(),
            l("CA/R: Discarded Palace Key - Four Belfries warp", "Discarded Palace Key"),
        ]),
        RegionData::new("Ruin-Strewn Precipice", vec![
            l("LRL/RSP: Magma Wyrm's Scalesword - boss drop", "Magma Wyrm's Scalesword").boss(),
            l("LRL/RSP: Dragon Heart - Magma Wyrm Makar drop", "Dragon Heart").boss(),
        ]),
        RegionData::new("Grand Lift of Dectus", vec![]),
        RegionData::new("Ainsel River", vec![
            l("AR: Nightmaiden & Swordstress Puppets - Seluvis quest", "Nightmaiden & Swordstress Puppets").npc().missable(),
            l("AR: Golden Rune [5] - Ainsel main corpse", "Golden Rune [5]"),
        ]),
        RegionData::new("Lake of Rot", vec![
            l("LoR: Remembrance of the Naturalborn - boss drop", "Remembrance of the Naturalborn").main_boss().remembrance(),
            l("LoR: Dark Moon Ring - Ranni quest", "Dark Moon Ring").npc().missable(),
        ]),
        RegionData::new("Siofra River", vec![
            l("SR: Ancestral Follower Ashes - Hallowhorn Grounds", "Ancestral Follower Ashes"),
            l("LG/SR: Incantation Scarab - \"Homing Instinct\" Painting reward to NW", "Incantation Scarab").hidden(),
            l("SR: Golden Rune [4] - riverside corpse", "Golden Rune [4]"),
        ]),
        RegionData::new("Nokron, Eternal City", vec![
            l("NEC: Remembrance of the Regal Ancestor - boss drop", "Remembrance of the Regal Ancestor").main_boss().remembrance(),
            l("NEC: Mimic Tear Ashes - behind illusory wall", "Mimic Tear Ashes").hidden(),
            l("NEC: Fingerslayer Blade - Night's Sacred Ground", "Fingerslayer Blade").progression(),
            l("NEC: Larval Tear - Nokron cliff", "Larval Tear"),
        ]),
        RegionData::new("Deeproot Depths", vec![
            l("DD: Remembrance of the Lichdragon - boss drop", "Remembrance of the Lichdragon").main_boss().remembrance(),
            l("DD: Great Ghost Glovewort - Deeproot boss drop", "Great Ghost Glovewort").boss(),
        ]),
        RegionData::new("Caelid", vec![
            l("CL: Dragon Heart x5 - Greyoll drop", "Dragon Heart x5").boss(),
            l("CL: Dragon Heart - Decaying Ekzykes drop", "Dragon Heart").boss(),
            l("CL: Unalloyed Gold Needle (Broken) - Aeonia swamp corpse", "Unalloyed Gold Needle (Broken)"),
            l("CL: \"Redmane\" Painting - Chamber Outlook Tower", "\"Redmane\" Painting"),
            l("CL/MEE: Ash of War: Rain of Arrows - \"Redmane\" Painting reward down hidden cliff E of MEE", "Ash of War: Rain of Arrows").hidden(),
            l("CL: Map: Caelid - Rotview stele", "Map: Caelid"),
            l("CL: Golden Seed - Caelid Highway sapling", "Golden Seed"),
            l("CL: Stonesword Key - Caelid Waypoint Ruins", "Stonesword Key"),
            l("CL: Stonesword Key - Swamp of Aeonia", "Stonesword Key"),
            l("CL: Ash of War: Poison Moth Flight - scarab in Aeonia", "Ash of War: Poison Moth Flight").scarab(),
            l("CL: Bloody Helice - Bloody Finger Okina", "Bloody Helice").hostile_npc().missable(),
        ]),
        RegionData::new("Smoldering Church", vec![
            l("CL/(SC): Godskin Prayerbook - church altar", "Godskin Prayerbook"),
            l("CL/(SC): Nomadic Warrior's Cookbook [11] - church corpse", "Nomadic Warrior's Cookbook [11]"),
        ]),
        RegionData::new("Gaol Cave", vec![
            l("CL/GC: Glowstone - cave cell", "Glowstone"),
            l("CL/GC: Putrid Corpse Ashes - boss drop", "Putrid Corpse Ashes").boss(),
        ]),
        RegionData::new("Sellia Crystal Tunnel", vec![
            l("CL/(SCT): Somberstone Miner's Bell Bearing [1] - boss drop", "Somberstone Miner's Bell Bearing [1]").boss(),
            l("CL/(SCT): Dragonwound Grease - tunnel corpse", "Dragonwound Grease"),
        ]),
        RegionData::new("Cathedral of Dragon Communion", vec![
            l("CL/(CDC): Glintstone Breath - Dragon Communion", "Glintstone Breath").shop(),
            l("CL/(CDC): Rotten Breath - Dragon Communion", "Rotten Breath").shop(),
            l("CL/(CDC): Dragonice - Dragon Communion", "Dragonice").shop(),
            l("CL/(CDC): Agheel's Flame - Dragon Communion", "Agheel's Flame").shop(),
            l("CL/(CDC): Greyoll's Roar - Dragon Communion", "Greyoll's Roar").shop(),
            l("CL/(CDC): Ekzykes's Decay - Dragon Communion", "Ekzykes's Decay").shop(),
            l("CL/(CDC): Magma Breath - Dragon Communion", "Magma Breath").shop(),
            l("CL/(CDC): Theodorix's Magma - Dragon Communion", "Theodorix's Magma").shop(),
            l("CL/(CDC): Smarag's Glintstone Breath - Dragon Communion", "Smarag's Glintstone Breath").shop(),
            l("CL/(CDC): Borealis's Mist - Dragon Communion", "Borealis's Mist").shop(),
        ]),
        RegionData::new("Gowry's Shack", vec![
            l("CL/(GS): Sellia's Secret - talk to Gowry with needle", "Sellia's Secret").npc(),
            l("CL/(GS): Unalloyed Gold Needle (Fixed) - talk to Gowry after giving needle", "Unalloyed Gold Needle (Fixed)").npc(),
            l("CL/(GS): Glintstone Stars - Gowry Shop", "Glintstone Stars").shop().npc(),
            l("CL/(GS): Night Shard - Gowry Shop", "Night Shard").shop().npc(),
            l("CL/(GS): Night Maiden's Mist - Gowry Shop", "Night Maiden's Mist").shop().npc(),
            l("CL/(GS): Pest Threads - Gowry Shop after giving Valkyrie's Prosthesis to Millicent", "Pest Threads").shop().npc(),
            l("CL/(GS): Desperate Prayer - buy 4th shop item", "Desperate Prayer").shop().npc(),
            l("CL/(GS): Flock's Canvas Talisman - kill Gowry or complete questline", "Flock's Canvas Talisman").npc().missable(),
        ]),
        RegionData::new("Church of the Plague", vec![
            l("CL/(CP): Prosthesis-Wearer Heirloom - give Millicent fixed needle", "Prosthesis-Wearer Heirloom").npc().missable(),
            l("CL/(CP): Sacred Tear - church", "Sacred Tear"),
        ]),
        RegionData::new("Redmane Castle", vec![
            l("CL/(RC): Remembrance of the Starscourge - boss drop", "Remembrance of the Starscourge").main_boss().remembrance(),
            l("CL/(RC): Radahn's Great Rune - boss drop", "Radahn's Great Rune").main_boss(),
            l("CL/(RC): Smithing Stone [6] - in church during festival", "Smithing Stone [6]").conditional(),
            l("CL/(RC): Ruins Greatsword - Misbegotten Warrior boss drop", "Ruins Greatsword").boss(),
            l("CL/(RC): Heal from Afar - castle chapel", "Heal from Afar"),
        ]),
        RegionData::new("Fort Gael", vec![
            l("CL/FG: Fire Monks' Prayerbook - fort corpse", "Fire Monks' Prayerbook"),
            l("CL/FG: Flame of the Redmanes - boss drop", "Flame of the Redmanes").boss(),
            l("CL/FG: Warhawk Ashes - fort chest", "Warhawk Ashes"),
        ]),
        RegionData::new("Dragonbarrow", vec![
            l("DB: Dragon Heart - Flying Dragon Greyll drop", "Dragon Heart").boss(),
            l("DB: Map: Dragonbarrow - Dragonbarrow stele", "Map: Dragonbarrow"),
            l("DB: Stonesword Key - Fort Faroth", "Stonesword Key"),
            l("DB: Dragonscale Blade - Farum Greatbridge chest", "Dragonscale Blade"),
        ]),
        RegionData::new("Bestial Sanctum", vec![
            l("CL/(BS): Clawmark Seal - Gurranq, deathroot reward 1", "Clawmark Seal").npc(),
            l("CL/(BS): Beast Eye - Gurranq, deathroot reward 1 or kill", "Beast Eye").npc(),
            l("CL/(BS): Bestial Sling - Gurranq, deathroot reward 2", "Bestial Sling").npc(),
            l("CL/(BS): Bestial Vitality - Gurranq, deathroot reward 3", "Bestial Vitality").npc(),
            l("CL/(BS): Ash of War: Beast's Roar - Gurranq, deathroot reward 4", "Ash of War: Beast's Roar").npc(),
        ]),
        RegionData::new("Altus Plateau", vec![
            l("AP: Dragon Heart - Ancient Dragon Lansseax drop", "Dragon Heart").boss(),
            l("AP: Dragon Heart x5 - Lansseax second encounter", "Dragon Heart x5").boss(),
            l("AP: Valkyrie's Prosthesis - Sainted Hero's Grave approach", "Valkyrie's Prosthesis"),
            LocationData::event("AP: Millicent given Valkyrie's Prosthesis"),
            l("AP/(SCT): Smithing-Stone Miner's Bell Bearing [2] - Sealed Tunnel", "Smithing-Stone Miner's Bell Bearing [2]"),
            l("AP/(WR): Somberstone Miner's Bell Bearing [2] - Wyndham Ruins", "Somberstone Miner's Bell Bearing [2]"),
            l("AP: Map: Altus Plateau - Altus Highway stele", "Map: Altus Plateau"),
            l("AP: Golden Seed - Altus Highway sapling", "Golden Seed"),
            l("AP: Stonesword Key - Shaded Castle approach", "Stonesword Key"),
            l("AP: Stonesword Key - Windmill Village", "Stonesword Key"),
            l("AP: Deathroot - Tibia Mariner at Wyndham", "Deathroot").boss(),
            l("AP: Crimsonburst Crystal Tear - Minor Erdtree basin", "Crimsonburst Crystal Tear"),
            l("AP: Ash of War: Barricade Shield - scarab at Lux Ruins", "Ash of War: Barricade Shield").scarab(),
        ]),
        RegionData::new("Mt. Gelmir", vec![
            l("MG: Deathroot - Gelmir Hero's Grave", "Deathroot"),
            l("MG: Map: Mt. Gelmir - Gelmir stele", "Map: Mt. Gelmir"),
            l("MG: Golden Seed - Gelmir sapling", "Golden Seed"),
            l("MG: Dragon Heart - Magma Wyrm drop", "Dragon Heart").boss(),
        ]),
        RegionData::new("Volcano Manor", vec![
            l("VM: Remembrance of the Blasphemous - boss drop", "Remembrance of the Blasphemous").main_boss().remembrance(),
            l("VM: Rykard's Great Rune - boss drop", "Rykard's Great Rune").main_boss(),
            l("VM: Somberstone Miner's Bell Bearing [3] - Temple of Eiglay", "Somberstone Miner's Bell Bearing [3]"),
            l("VM: Drawing-Room Key - Tanith", "Drawing-Room Key").npc(),
            l("VM: Magma Whip Candlestick - Temple of Eiglay", "Magma Whip Candlestick"),
        ]),
        RegionData::new("Leyndell, Royal Capital", vec![
            l("LRC: Remembrance of the Omen King - boss drop", "Remembrance of the Omen King").main_boss().remembrance(),
            l("LRC: Morgott's Great Rune - boss drop", "Morgott's Great Rune").main_boss(),
            l("LRC: Two Fingers' Prayerbook - Erdtree Sanctuary", "Two Fingers' Prayerbook"),
            l("LRC: Golden Order Principia - rooftops", "Golden Order Principia"),
            l("LRC: Map: Leyndell, Royal Capital - capital stele", "Map: Leyndell, Royal Capital"),
            l("LRC: Stonesword Key - East Capital Rampart", "Stonesword Key"),
            l("LRC: Golden Seed - Godfrey phantom boss drop", "Golden Seed").boss(),
            l("LRC: Talisman of Lord's Bestowal - Erdtree Sanctuary", "Talisman of Lord's Bestowal"),
        ]),
        RegionData::new("Subterranean Shunning-Grounds", vec![
            l("SSG: Deathroot - Frenzied Flame Proscription", "Deathroot"),
            l("SSG: Mohg's Shackle - boss drop", "Mohg's Shackle").boss(),
            l("SSG: Golden Rune [10] - sewer corpse", "Golden Rune [10]"),
        ]),
        RegionData::new("Forbidden Lands", vec![
            l("FL: Rold Medallion - Grand Lift of Rold, Melina", "Rold Medallion").progression(),
            l("FL: Black Knife Tiche - boss drop", "Black Knife Tiche").boss(),
        ]),
        RegionData::new("Grand Lift of Rold", vec![]),
        RegionData::new("Mountaintops of the Giants", vec![
            l("MotG: Remembrance of the Fire Giant - boss drop", "Remembrance of the Fire Giant").main_boss().remembrance(),
            l("MotG: Giant's Prayerbook - Church of the Eclipse", "Giant's Prayerbook"),
            l("MotG/(ZR): Smithing-Stone Miner's Bell Bearing [3] - Zamor Ruins", "Smithing-Stone Miner's Bell Bearing [3]"),
            l("MotG: Dragon Heart - Borealis drop", "Dragon Heart").boss(),
            l("MotG: Map: Mountaintops of the Giants, West - stele", "Map: Mountaintops of the Giants, West"),
            l("MotG: Haligtree Secret Medallion (Left) - Castle Sol", "Haligtree Secret Medallion (Left)").progression(),
            l("MotG: Golden Seed - Zamor sapling", "Golden Seed"),
        ]),
        RegionData::new("Consecrated Snowfield", vec![
            l("CS: Somberstone Miner's Bell Bearing [4] - Yelough Anix Tunnel", "Somberstone Miner's Bell Bearing [4]").blizzard(),
            l("CS: Dragon Heart - Great Wyrm Theodorix drop", "Dragon Heart").boss().blizzard(),
            l("CS: Map: Consecrated Snowfield - stele", "Map: Consecrated Snowfield"),
            l("CS: Golden Seed - snowfield sapling", "Golden Seed"),
            l("CS: Pureblood Knight's Medal - Varre", "Pureblood Knight's Medal").npc().missable(),
        ]),
        RegionData::new("Mohgwyn Palace", vec![
            l("MP: Remembrance of the Blood Lord - boss drop", "Remembrance of the Blood Lord").main_boss().remembrance(),
            l("MP: Mohg's Great Rune - boss drop", "Mohg's Great Rune").main_boss(),
            l("MP: Sacred Tear - Mohgwyn Dynasty Mausoleum", "Sacred Tear"),
            l("MP: Golden Seed - palace sapling", "Golden Seed"),
        ]),
        RegionData::new("Miquella's Haligtree", vec![
            l("MH: Haligtree Secret Medallion (Right) - Albus", "Haligtree Secret Medallion (Right)").progression(),
            l("MH: Golden Seed - haligtree canopy", "Golden Seed"),
            l("MH: Cerulean Hidden Tear - haligtree basin", "Cerulean Hidden Tear"),
        ]),
        RegionData::new("Elphael, Brace of the Haligtree", vec![
            l("EBH/HR: Remembrance of the Rot Goddess - boss drop", "Remembrance of the Rot Goddess").main_boss().remembrance(),
            l("EBH/HR: Malenia's Great Rune - boss drop", "Malenia's Great Rune").main_boss(),
            l("EBH/PR: Triple Rings of Light - exit PR then drop to E, behind imp statue", "Triple Rings of Light"),
            l("EBH/PR: Marika's Soreseal - behind imp statue at the S end of the bottom area", "Marika's Soreseal"),
            l("EBH/EIW: Rotten Winged Sword Insignia - help Millicent", "Rotten Winged Sword Insignia").npc().missable(),
            l("EBH/EIW: Unalloyed Gold Needle (Milicent) - help Millicent talk then reload area", "Unalloyed Gold Needle (Milicent)").npc().missable(),
            l("EBH/EIW: Millicent's Prosthesis - invade Millicent or kill in altus", "Millicent's Prosthesis").hostile_npc().missable(),
            l("EBH/HR: Miquella's Needle - use needle on flower in boss arena after Millicent quest", "Miquella's Needle").npc().missable(),
            l("EBH/HR: Somber Ancient Dragon Smithing Stone - use needle on flower in boss arena after Millicent quest", "Somber Ancient Dragon Smithing Stone").npc().missable(),
        ]),
        RegionData::new("Crumbling Farum Azula", vec![
            l("CFA: Remembrance of the Black Blade - boss drop", "Remembrance of the Black Blade").main_boss().remembrance(),
            l("CFA: Remembrance of the Dragonlord - boss drop", "Remembrance of the Dragonlord").main_boss().remembrance(),
            l("CFA: Ancient Dragon Prayerbook - Dragon Temple", "Ancient Dragon Prayerbook"),
            l("CFA: Smithing-Stone Miner's Bell Bearing [4] - Dragon Temple Rooftop", "Smithing-Stone Miner's Bell Bearing [4]"),
            l("CFA: Somberstone Miner's Bell Bearing [5] - Beside the Great Bridge", "Somberstone Miner's Bell Bearing [5]"),
            l("CFA: Dragon Heart - Dragon Temple dragon", "Dragon Heart").boss(),
            l("CFA: Dragon Heart - Flying Dragon on the great bridge", "Dragon Heart").boss(),
        ]),
        RegionData::new("Leyndell, Ashen Capital", vec![
            l("LAC: Remembrance of Hoarah Loux - boss drop", "Remembrance of Hoarah Loux").main_boss().remembrance(),
            l("LAC: Golden Rune [13] - ashen rubble", "Golden Rune [13]"),
        ]),
        RegionData::new("Elden Throne", vec![
            l("ET: Elden Remembrance - boss drop", "Elden Remembrance").main_boss().remembrance(),
            LocationData::event("ET: Elden Beast"),
        ]),
        // Shadow of the Erdtree
        RegionData::dlc("Gravesite Plain", vec![
            l("GP: Scadutree Fragment - Scorched Ruins", "Scadutree Fragment"),
            l("GP: Scadutree Fragment - Church of Consolation", "Scadutree Fragment"),
            l("GP: Revered Spirit Ash - Gravesite Plain grave", "Revered Spirit Ash"),
            l("GP: Map: Gravesite Plain - stele", "Map: Gravesite Plain"),
            l("GP: Blessing of Marika - Miquella's Cross", "Blessing of Marika"),
            l("GP: Miquella's Cross: Smithing Stone [8] - Cross near the Gate", "Smithing Stone [8]"),
        ]),
        RegionData::dlc("Belurat, Tower Settlement", vec![
            l("BTS: Remembrance of the Dancing Lion - boss drop", "Remembrance of the Dancing Lion").main_boss().remembrance(),
            l("BTS: Scadutree Fragment - settlement balcony", "Scadutree Fragment"),
        ]),
        RegionData::dlc("Castle Ensis", vec![
            l("CE: Remembrance of the Twin Moon Knight - boss drop", "Remembrance of the Twin Moon Knight").main_boss().remembrance(),
            l("CE: Revered Spirit Ash - castle rampart", "Revered Spirit Ash"),
        ]),
        RegionData::dlc("Grand Altar of Dragon Communion", vec![
            l("GADC: Bayle's Flame Lightning - Altar for Heart of Bayle", "Bayle's Flame Lightning").shop(),
            l("GADC: Bayle's Tyranny - Altar for Heart of Bayle", "Bayle's Tyranny").shop(),
        ]),
        RegionData::dlc("Jagged Peak", vec![
            l("JP: Heart of Bayle - boss drop", "Heart of Bayle").boss(),
            l("JP: Scadutree Fragment - Jagged Peak summit", "Scadutree Fragment"),
        ]),
        RegionData::dlc("Stone Coffin Fissure", vec![
            l("SCF: Remembrance of Putrescence - boss drop", "Remembrance of Putrescence").main_boss().remembrance(),
        ]),
        RegionData::dlc("Scadu Altus", vec![
            l("SA: Remembrance of the Wild Boar Rider - boss drop", "Remembrance of the Wild Boar Rider").main_boss().remembrance(),
            l("SA: Messmer's Kindling - Castle Watering Hole", "Messmer's Kindling"),
            l("SA: Scadutree Fragment - Highroad Cross", "Scadutree Fragment"),
            l("SA: Map: Scadu Altus - stele", "Map: Scadu Altus"),
        ]),
        RegionData::dlc("Shadow Keep", vec![
            l("SK: Remembrance of the Impaler - boss drop", "Remembrance of the Impaler").main_boss().remembrance(),
            l("SK: Revered Spirit Ash - Storehouse", "Revered Spirit Ash"),
        ]),
        RegionData::dlc("Scadutree Base", vec![
            l("STB: Remembrance of the Shadow Sunflower - boss drop", "Remembrance of the Shadow Sunflower").main_boss().remembrance(),
        ]),
        RegionData::dlc("Ancient Ruins of Rauh", vec![
            l("ARR: Remembrance of the Saint of the Bud - boss drop", "Remembrance of the Saint of the Bud").main_boss().remembrance(),
        ]),
        RegionData::dlc("Finger Ruins of Miyr", vec![
            l("FRM: Remembrance of the Mother of Fingers - boss drop", "Remembrance of the Mother of Fingers").main_boss().remembrance(),
        ]),
        RegionData::dlc("Abyssal Woods", vec![
            l("AW: Remembrance of the Lord of Frenzied Flame - boss drop", "Remembrance of the Lord of Frenzied Flame").main_boss().remembrance(),
        ]),
        RegionData::dlc("Enir-Ilim", vec![
            l("EI: Remembrance of a God and a Lord - boss drop", "Remembrance of a God and a Lord").main_boss().remembrance(),
            LocationData::event("EI: Consort Radahn"),
        ]),
    ]
}
