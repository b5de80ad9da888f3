//! Region edges as `(from, to)`, plus the region a new game starts in.

use crate::catalog::RegionGraph;

const START: &str = "Chapel of Anticipation";

const BASE: &[(&str, &str)] = &[
    ("Chapel of Anticipation", "Stranded Graveyard"),
    ("Stranded Graveyard", "Fringefolk Hero's Grave"),
    ("Stranded Graveyard", "Limgrave"),
    // Limgrave
    ("Limgrave", "Church of Elleh"),
    ("Limgrave", "Coastal Cave"),
    ("Coastal Cave", "Church of Dragon Communion"),
    ("Limgrave", "Groveside Cave"),
    ("Limgrave", "Stormfoot Catacombs"),
    ("Limgrave", "Gatefront Ruins"),
    ("Limgrave", "Limgrave Tunnels"),
    ("Limgrave", "Stormhill Shack"),
    ("Limgrave", "Waypoint Ruins"),
    ("Limgrave", "Dragon-Burnt Ruins"),
    ("Limgrave", "Murkwater Cave"),
    ("Limgrave", "Mistwood Ruins"),
    ("Limgrave", "Fort Haight"),
    ("Limgrave", "Third Church of Marika"),
    ("Limgrave", "LG Artist's Shack"),
    ("Limgrave", "Summonwater Village"),
    ("Limgrave", "Deathtouched Catacombs"),
    ("Limgrave", "Warmaster's Shack"),
    ("Limgrave", "Roundtable Hold"),
    ("Limgrave", "Bridge of Sacrifice"),
    ("Limgrave", "Stormveil Castle"),
    ("Bridge of Sacrifice", "Weeping Peninsula"),
    ("Weeping Peninsula", "Castle Morne"),
    // Liurnia
    ("Stormveil Castle", "Liurnia of The Lakes"),
    ("Liurnia of The Lakes", "Raya Lucaria Academy"),
    ("Liurnia of The Lakes", "Caria Manor"),
    ("Liurnia of The Lakes", "Chapel of Anticipation [Return]"),
    ("Liurnia of The Lakes", "Ruin-Strewn Precipice"),
    ("Liurnia of The Lakes", "Grand Lift of Dectus"),
    ("Liurnia of The Lakes", "Ainsel River"),
    ("Ainsel River", "Lake of Rot"),
    // underground
    ("Mistwood Ruins", "Siofra River"),
    ("Siofra River", "Nokron, Eternal City"),
    ("Nokron, Eternal City", "Deeproot Depths"),
    // Caelid
    ("Limgrave", "Caelid"),
    ("Dragon-Burnt Ruins", "Sellia Crystal Tunnel"),
    ("Caelid", "Sellia Crystal Tunnel"),
    ("Caelid", "Smoldering Church"),
    ("Caelid", "Gaol Cave"),
    ("Caelid", "Cathedral of Dragon Communion"),
    ("Caelid", "Gowry's Shack"),
    ("Caelid", "Church of the Plague"),
    ("Caelid", "Redmane Castle"),
    ("Caelid", "Fort Gael"),
    ("Caelid", "Dragonbarrow"),
    ("Dragonbarrow", "Bestial Sanctum"),
    // Altus
    ("Ruin-Strewn Precipice", "Altus Plateau"),
    ("Grand Lift of Dectus", "Altus Plateau"),
    ("Altus Plateau", "Mt. Gelmir"),
    ("Mt. Gelmir", "Volcano Manor"),
    ("Altus Plateau", "Leyndell, Royal Capital"),
    ("Leyndell, Royal Capital", "Subterranean Shunning-Grounds"),
    ("Leyndell, Royal Capital", "Forbidden Lands"),
    // late game
    ("Forbidden Lands", "Grand Lift of Rold"),
    ("Grand Lift of Rold", "Mountaintops of the Giants"),
    ("Mountaintops of the Giants", "Consecrated Snowfield"),
    ("Mountaintops of the Giants", "Crumbling Farum Azula"),
    ("Consecrated Snowfield", "Mohgwyn Palace"),
    ("Roundtable Hold", "Mohgwyn Palace"),
    ("Consecrated Snowfield", "Miquella's Haligtree"),
    ("Miquella's Haligtree", "Elphael, Brace of the Haligtree"),
    ("Crumbling Farum Azula", "Leyndell, Ashen Capital"),
    ("Leyndell, Ashen Capital", "Elden Throne"),
];

const DLC: &[(&str, &str)] = &[
    ("Mohgwyn Palace", "Gravesite Plain"),
    ("Gravesite Plain", "Belurat, Tower Settlement"),
    ("Gravesite Plain", "Castle Ensis"),
    ("Gravesite Plain", "Grand Altar of Dragon Communion"),
    ("Grand Altar of Dragon Communion", "Jagged Peak"),
    ("Gravesite Plain", "Stone Coffin Fissure"),
    ("Gravesite Plain", "Finger Ruins of Miyr"),
    ("Gravesite Plain", "Abyssal Woods"),
    ("Castle Ensis", "Scadu Altus"),
    ("Scadu Altus", "Shadow Keep"),
    ("Shadow Keep", "Scadutree Base"),
    ("Shadow Keep", "Ancient Ruins of Rauh"),
    ("Ancient Ruins of Rauh", "Enir-Ilim"),
];

pub(crate) fn graph() -> RegionGraph {
    BASE.iter().chain(DLC).fold(RegionGraph::new(START), |graph, &(from, to)| graph.edge(from, to))
}
