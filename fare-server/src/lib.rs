//! Fare administration server.
//!
//! A web service for editing Metro Manila public and private transport fare
//! tables, built around a pure fare-generation engine: distance-banded
//! road-transit tables and per-station-pair rail fares computed from
//! parameterized formulas.

pub mod domain;
pub mod fares;
pub mod stations;
pub mod store;
pub mod web;
