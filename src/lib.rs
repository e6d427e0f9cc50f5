#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod stats;

use rocket::{Build, Rocket};

pub use config::Config;

use crate::config::{ConfigFairing, DatabaseFairing};
use crate::logging::LoggerFairing;

/// Construct the rocket instance: all fairings attached and routes mounted,
/// ready to ignite. Configuration loading and the database connection happen
/// during ignition, inside the fairings.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(DatabaseFairing)
        .mount("/", api::routes())
}
