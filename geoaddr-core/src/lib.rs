pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use geoaddr_entities::{address::*, geo::*};
}
