use super::prelude::*;
use geoaddr_entities::geo::distance_km;

/// Returns all addresses within `max_distance_km` of `center`
/// (inclusive boundary), preserving repository order.
///
/// Plain O(n) scan over all records. A negative radius matches
/// nothing since no record has a negative distance.
pub fn filter_addresses<R>(repo: &R, center: MapPoint, max_distance_km: f64) -> Result<Vec<Address>>
where
    R: AddressRepo,
{
    let addresses = repo.all_addresses()?;
    Ok(addresses
        .into_iter()
        .filter(|addr| distance_km(center, addr.pos) <= max_distance_km)
        .collect())
}
