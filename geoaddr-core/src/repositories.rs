// Low-level database access traits.
// The address repository is the sole data-access boundary;
// no other component touches persisted records directly.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Field values for a new address record.
///
/// The id is assigned by the storage backend on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub street_no: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pos: MapPoint,
}

/// A partial patch of an address record.
///
/// `None` means "leave this field untouched", which is distinct
/// from setting it to an empty or zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressChanges {
    pub street_no: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl AddressChanges {
    pub fn is_empty(&self) -> bool {
        self.street_no.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.lat.is_none()
            && self.lng.is_none()
    }
}

pub trait AddressRepo {
    /// Inserts a new record and returns the storage-assigned id.
    fn create_address(&self, new_address: &NewAddress) -> Result<i64>;

    /// All stored records in stable storage order
    /// (insertion order in practice).
    fn all_addresses(&self) -> Result<Vec<Address>>;
    fn count_addresses(&self) -> Result<u64>;

    /// Applies the given fields to an existing record.
    /// The changeset must not be empty.
    fn update_address(&self, id: i64, changes: &AddressChanges) -> Result<()>;

    fn delete_address(&self, id: i64) -> Result<()>;
}
