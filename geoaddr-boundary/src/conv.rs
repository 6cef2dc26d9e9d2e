use super::*;
use geoaddr_entities as e;

impl From<e::address::Address> for Address {
    fn from(from: e::address::Address) -> Self {
        let e::address::Address {
            id,
            street_no,
            city,
            state,
            country,
            pos,
        } = from;
        Self {
            id,
            street: street_no,
            city,
            state,
            country,
            l1: pos.lat,
            l2: pos.lng,
        }
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat,
            lng: from.lng,
        }
    }
}

impl From<Coordinate> for e::geo::MapPoint {
    fn from(from: Coordinate) -> Self {
        Self {
            lat: from.lat,
            lng: from.lng,
        }
    }
}
