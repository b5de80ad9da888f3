//! Elden Ring content for a multiworld randomizer: item and location catalogs, the region graph, access rules and the client payload.

#![deny(rust_2018_idioms, unused, unused_crate_dependencies, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

use semver::Version;
pub use crate::{
    access::{
        ItemRule,
        Rule,
    },
    catalog::{
        Catalog,
        CATALOG,
    },
    host::{
        CollectedState,
        Host,
        Placements,
        Player,
    },
    settings::{
        GenerationPolicy,
        Options,
    },
    slot_data::SlotData,
    tracker::Tracker,
    world::World,
};

pub mod access;
pub mod catalog;
mod data;
pub mod host;
pub mod item;
pub mod location;
pub mod model;
pub mod overlay;
pub mod region;
mod rules;
pub mod settings;
pub mod slot_data;
pub mod tracker;
pub mod world;

pub fn version() -> Result<Version, semver::Error> {
    Version::parse(env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    #[test]
    fn version() {
        assert_eq!(super::version().expect("failed to parse current version").major, 0);
    }
}
