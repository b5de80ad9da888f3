//! The bundled Elden Ring tables.

pub(crate) mod connections;
pub(crate) mod items;
pub(crate) mod locations;
