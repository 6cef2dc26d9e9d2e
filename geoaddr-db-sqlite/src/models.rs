use super::schema::*;
use geoaddr_core::{entities, repositories};

#[derive(Insertable)]
#[diesel(table_name = address)]
pub struct NewAddress<'a> {
    pub street_no: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub coordinates_l1: f64,
    pub coordinates_l2: f64,
}

impl<'a> From<&'a repositories::NewAddress> for NewAddress<'a> {
    fn from(from: &'a repositories::NewAddress) -> Self {
        let repositories::NewAddress {
            street_no,
            city,
            state,
            country,
            pos,
        } = from;
        Self {
            street_no,
            city,
            state,
            country,
            coordinates_l1: pos.lat,
            coordinates_l2: pos.lng,
        }
    }
}

#[derive(Queryable)]
pub struct AddressEntity {
    pub id: i64,
    pub street_no: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub coordinates_l1: f64,
    pub coordinates_l2: f64,
}

impl From<AddressEntity> for entities::Address {
    fn from(from: AddressEntity) -> Self {
        let AddressEntity {
            id,
            street_no,
            city,
            state,
            country,
            coordinates_l1,
            coordinates_l2,
        } = from;
        Self {
            id,
            street_no,
            city,
            state,
            country,
            pos: entities::MapPoint::new(coordinates_l1, coordinates_l2),
        }
    }
}

// `None` fields are skipped by Diesel, which implements the
// "absent means untouched" semantics of a partial update.
#[derive(AsChangeset)]
#[diesel(table_name = address)]
pub struct AddressChangeset<'a> {
    pub street_no: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub country: Option<&'a str>,
    pub coordinates_l1: Option<f64>,
    pub coordinates_l2: Option<f64>,
}

impl<'a> From<&'a repositories::AddressChanges> for AddressChangeset<'a> {
    fn from(from: &'a repositories::AddressChanges) -> Self {
        let repositories::AddressChanges {
            street_no,
            city,
            state,
            country,
            lat,
            lng,
        } = from;
        Self {
            street_no: street_no.as_deref(),
            city: city.as_deref(),
            state: state.as_deref(),
            country: country.as_deref(),
            coordinates_l1: *lat,
            coordinates_l2: *lng,
        }
    }
}
