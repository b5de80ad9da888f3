#![deny(rust_2018_idioms, unused, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

use {
    std::fmt,
    clap::Parser as _,
    itertools::Itertools as _,
    log::info,
    errando::{
        catalog::CATALOG,
        host::Player,
        settings::{
            GenerationPolicy,
            Options,
        },
        tracker::{
            Collect,
            Tracker,
            TrackerError,
        },
        world::{
            self,
            World,
        },
    },
};

const PLAYER: Player = Player(1);

#[derive(clap::Parser)]
#[clap(version)]
struct Args {
    /// Player options as a JSON object. Missing options keep their defaults.
    #[clap(long)]
    options: Option<String>,
    #[clap(long, default_value_t = 0)]
    seed: u64,
    #[clap(long, default_value = "Tarnished")]
    player_name: String,
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Region, location and pool counts of a generated world, plus its warnings.
    Summary,
    /// Location and item groups as JSON.
    Groups,
    /// What a vanilla fill makes reachable with the given inventory, collecting events along the way.
    Reachable {
        items: Vec<String>,
    },
    /// The client payload of a vanilla fill, as JSON.
    SlotData,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)] Fmt(#[from] fmt::Error),
    #[error(transparent)] Json(#[from] serde_json::Error),
    #[error(transparent)] Tracker(#[from] TrackerError),
    #[error(transparent)] World(#[from] world::Error),
}

fn generate(options: Option<&str>, player_name: String, seed: u64) -> Result<World<'static>, Error> {
    let options = match options {
        Some(options) => serde_json::from_str::<Options>(options)?,
        None => Options::default(),
    };
    let mut world = World::new(PLAYER, player_name, options, &CATALOG, &GenerationPolicy::default(), seed)?;
    world.generate()?;
    info!("generated world for {}", world.player_name);
    Ok(world)
}

fn summary(world: &World<'_>, out: &mut impl fmt::Write) -> Result<(), Error> {
    writeln!(out, "regions: {}", world.regions().len())?;
    writeln!(out, "locations: {} ({} randomized)", world.locations().count(), world.locations().filter(|location| location.locked_item.is_none()).count())?;
    writeln!(out, "priority: {}", world.priority_locations().len())?;
    writeln!(out, "excluded: {}", world.reported_excluded().len())?;
    writeln!(out, "item pool: {}", world.itempool().len())?;
    writeln!(out, "starting inventory: {}", world.precollected().iter().map(|item| &item.name).join(", "))?;
    writeln!(out, "completion: {}", world.completion_condition())?;
    world.write_spoiler(out)?;
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match args.subcommand {
        Subcommand::Groups => println!("{}", serde_json::to_string_pretty(&serde_json::json!({
            "locations": CATALOG.location_groups(),
            "items": CATALOG.item_groups(),
        }))?),
        Subcommand::Summary => {
            let world = generate(args.options.as_deref(), args.player_name, args.seed)?;
            let mut out = String::default();
            summary(&world, &mut out)?;
            print!("{}", out);
        }
        Subcommand::Reachable { items } => {
            let world = generate(args.options.as_deref(), args.player_name, args.seed)?;
            let mut tracker = Tracker::default();
            world.register(&mut tracker);
            tracker.place_vanilla(PLAYER, &CATALOG)?;
            let sweep = tracker.sweep(PLAYER, items.iter().map(String::as_str), Collect::Events)?;
            let regions = sweep.reachable_regions();
            println!("{} of {} regions reachable:", regions.len(), world.regions().len());
            for region in &regions {
                println!("  {}", region);
            }
            println!("{} of {} locations reachable", sweep.reachable_locations().len(), world.locations().count());
            println!("can beat game: {}", sweep.can_beat_game());
        }
        Subcommand::SlotData => {
            let world = generate(args.options.as_deref(), args.player_name, args.seed)?;
            let mut tracker = Tracker::default();
            world.register(&mut tracker);
            tracker.place_vanilla(PLAYER, &CATALOG)?;
            let slot_data = world.fill_slot_data(&tracker, &format!("{}", args.seed));
            println!("{}", serde_json::to_string_pretty(&slot_data)?);
        }
    }
    Ok(())
}
