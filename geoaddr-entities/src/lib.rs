#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # geoaddr-entities
//!
//! Reusable, agnostic domain entities for geoaddr.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod geo;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
