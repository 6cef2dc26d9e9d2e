use super::{create_address::check_not_empty, prelude::*};

pub fn update_address<R>(repo: &R, id: i64, changes: AddressChanges) -> Result<()>
where
    R: AddressRepo,
{
    // Rejected before touching the repository, so an empty patch
    // fails the same way whether or not the id exists.
    if changes.is_empty() {
        return Err(Error::NoFields);
    }
    if let Some(ref street_no) = changes.street_no {
        check_not_empty("street_no", street_no)?;
    }
    if let Some(ref city) = changes.city {
        check_not_empty("city", city)?;
    }
    if let Some(ref state) = changes.state {
        check_not_empty("state", state)?;
    }
    if let Some(ref country) = changes.country {
        check_not_empty("country", country)?;
    }
    repo.update_address(id, &changes)?;
    log::debug!("Updated address {id}");
    Ok(())
}
