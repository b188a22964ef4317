//! Waypoint Server — HTTP resource handlers for destination records with
//! write-then-publish mutation events.

pub mod channel;
pub mod config;
pub mod network;
pub mod service;
pub mod storage;

pub use config::ServerConfig;
