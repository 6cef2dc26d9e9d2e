use std::{cell::RefCell, result};

use super::*;
use crate::{
    entities::*,
    repositories::{self, AddressChanges, AddressRepo, NewAddress},
};
use geoaddr_entities::builders::*;

type RepoResult<T> = result::Result<T, repositories::Error>;

#[derive(Default)]
pub struct MockDb {
    pub addresses: RefCell<Vec<Address>>,
    next_id: RefCell<i64>,
}

impl AddressRepo for MockDb {
    fn create_address(&self, new_address: &NewAddress) -> RepoResult<i64> {
        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        let id = *next_id;
        self.addresses.borrow_mut().push(Address {
            id,
            street_no: new_address.street_no.clone(),
            city: new_address.city.clone(),
            state: new_address.state.clone(),
            country: new_address.country.clone(),
            pos: new_address.pos,
        });
        Ok(id)
    }

    fn all_addresses(&self) -> RepoResult<Vec<Address>> {
        Ok(self.addresses.borrow().clone())
    }

    fn count_addresses(&self) -> RepoResult<u64> {
        Ok(self.addresses.borrow().len() as u64)
    }

    fn update_address(&self, id: i64, changes: &AddressChanges) -> RepoResult<()> {
        debug_assert!(!changes.is_empty());
        let mut addresses = self.addresses.borrow_mut();
        let addr = addresses
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(repositories::Error::NotFound)?;
        if let Some(ref street_no) = changes.street_no {
            addr.street_no = street_no.clone();
        }
        if let Some(ref city) = changes.city {
            addr.city = city.clone();
        }
        if let Some(ref state) = changes.state {
            addr.state = state.clone();
        }
        if let Some(ref country) = changes.country {
            addr.country = country.clone();
        }
        if let Some(lat) = changes.lat {
            addr.pos.lat = lat;
        }
        if let Some(lng) = changes.lng {
            addr.pos.lng = lng;
        }
        Ok(())
    }

    fn delete_address(&self, id: i64) -> RepoResult<()> {
        let mut addresses = self.addresses.borrow_mut();
        let len_before = addresses.len();
        addresses.retain(|a| a.id != id);
        if addresses.len() == len_before {
            return Err(repositories::Error::NotFound);
        }
        Ok(())
    }
}

fn new_address(city: &str, pos: MapPoint) -> NewAddress {
    NewAddress {
        street_no: "1".into(),
        city: city.into(),
        state: "state".into(),
        country: "country".into(),
        pos,
    }
}

#[test]
fn create_and_list_round_trip() {
    let db = MockDb::default();
    let fields = new_address("Munich", MapPoint::new(48.137, 11.575));
    let id = create_address(&db, fields.clone()).unwrap();
    let all = load_addresses(&db).unwrap();
    assert_eq!(all.len(), 1);
    let addr = &all[0];
    assert_eq!(addr.id, id);
    assert_eq!(addr.street_no, fields.street_no);
    assert_eq!(addr.city, fields.city);
    assert_eq!(addr.state, fields.state);
    assert_eq!(addr.country, fields.country);
    assert_eq!(addr.pos, fields.pos);
}

#[test]
fn create_with_empty_field_is_rejected() {
    let db = MockDb::default();
    let mut fields = new_address("Munich", MapPoint::default());
    fields.country = "  ".into();
    assert!(matches!(
        create_address(&db, fields),
        Err(Error::EmptyField("country"))
    ));
    assert_eq!(db.count_addresses().unwrap(), 0);
}

#[test]
fn update_without_fields_fails_regardless_of_id() {
    let db = MockDb::default();
    let id = create_address(&db, new_address("Munich", MapPoint::default())).unwrap();
    assert!(matches!(
        update_address(&db, id, AddressChanges::default()),
        Err(Error::NoFields)
    ));
    assert!(matches!(
        update_address(&db, id + 1, AddressChanges::default()),
        Err(Error::NoFields)
    ));
}

#[test]
fn partial_update_changes_only_given_fields() {
    let db = MockDb::default();
    let id = create_address(&db, new_address("Munich", MapPoint::new(48.1, 11.6))).unwrap();
    let changes = AddressChanges {
        city: Some("Berlin".into()),
        ..Default::default()
    };
    update_address(&db, id, changes).unwrap();
    let addr = &load_addresses(&db).unwrap()[0];
    assert_eq!(addr.city, "Berlin");
    assert_eq!(addr.street_no, "1");
    assert_eq!(addr.state, "state");
    assert_eq!(addr.country, "country");
    assert_eq!(addr.pos, MapPoint::new(48.1, 11.6));
}

#[test]
fn update_nonexistent_id_fails_with_not_found() {
    let db = MockDb::default();
    let changes = AddressChanges {
        city: Some("Berlin".into()),
        ..Default::default()
    };
    assert!(matches!(
        update_address(&db, 7, changes),
        Err(Error::Repo(repositories::Error::NotFound))
    ));
}

#[test]
fn delete_nonexistent_id_leaves_repository_unchanged() {
    let db = MockDb::default();
    create_address(&db, new_address("Munich", MapPoint::default())).unwrap();
    let before = load_addresses(&db).unwrap();
    assert!(matches!(
        delete_address(&db, 99),
        Err(Error::Repo(repositories::Error::NotFound))
    ));
    assert_eq!(load_addresses(&db).unwrap(), before);
}

#[test]
fn delete_removes_the_record() {
    let db = MockDb::default();
    let id = create_address(&db, new_address("Munich", MapPoint::default())).unwrap();
    delete_address(&db, id).unwrap();
    assert!(load_addresses(&db).unwrap().is_empty());
}

#[test]
fn filter_with_zero_radius_keeps_only_coincident_points() {
    let db = MockDb::default();
    let center = MapPoint::new(48.137, 11.575);
    // ~5 km north of the center
    let nearby = MapPoint::new(48.182, 11.575);
    create_address(&db, new_address("At center", center)).unwrap();
    create_address(&db, new_address("Nearby", nearby)).unwrap();

    let hits = filter_addresses(&db, center, 0.0).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].city, "At center");

    let hits = filter_addresses(&db, center, 10.0).unwrap();
    assert_eq!(hits.len(), 2);
}

#[test]
fn filter_with_negative_radius_matches_nothing() {
    let db = MockDb::default();
    let center = MapPoint::new(48.137, 11.575);
    create_address(&db, new_address("At center", center)).unwrap();
    assert!(filter_addresses(&db, center, -1.0).unwrap().is_empty());
}

#[test]
fn filter_on_empty_repository_returns_empty() {
    let db = MockDb::default();
    assert!(filter_addresses(&db, MapPoint::default(), 100.0)
        .unwrap()
        .is_empty());
}

#[test]
fn filter_boundary_is_inclusive_and_preserves_order() {
    let db = MockDb::default();
    let center = MapPoint::new(0.0, 0.0);
    // One degree of longitude on the equator
    let on_boundary = MapPoint::new(0.0, 1.0);
    let inside = MapPoint::new(0.0, 0.5);
    let outside = MapPoint::new(0.0, 2.0);
    create_address(&db, new_address("boundary", on_boundary)).unwrap();
    create_address(&db, new_address("inside", inside)).unwrap();
    create_address(&db, new_address("outside", outside)).unwrap();

    let radius = geoaddr_entities::geo::distance_km(center, on_boundary);
    let hits = filter_addresses(&db, center, radius).unwrap();
    let cities: Vec<_> = hits.iter().map(|a| a.city.as_str()).collect();
    assert_eq!(cities, vec!["boundary", "inside"]);
}

#[test]
fn builder_produces_valid_defaults() {
    let addr = Address::build().city("Munich").finish();
    assert_eq!(addr.city, "Munich");
    assert!(!addr.street_no.is_empty());
}
