pub use geoaddr_boundary::*;

use geoaddr_core::{entities as e, repositories};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn new_address(a: NewAddress) -> repositories::NewAddress {
        let NewAddress {
            street_no,
            city,
            state,
            country,
            coordinates_l1,
            coordinates_l2,
        } = a;
        repositories::NewAddress {
            street_no,
            city,
            state,
            country,
            pos: e::MapPoint::new(coordinates_l1, coordinates_l2),
        }
    }

    pub fn address_changes(a: UpdateAddress) -> repositories::AddressChanges {
        let UpdateAddress {
            street_no,
            city,
            state,
            country,
            coordinates_l1,
            coordinates_l2,
        } = a;
        repositories::AddressChanges {
            street_no,
            city,
            state,
            country,
            lat: coordinates_l1,
            lng: coordinates_l2,
        }
    }
}
