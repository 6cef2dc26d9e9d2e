use super::prelude::*;

pub fn create_address<R>(repo: &R, new_address: NewAddress) -> Result<i64>
where
    R: AddressRepo,
{
    check_not_empty("street_no", &new_address.street_no)?;
    check_not_empty("city", &new_address.city)?;
    check_not_empty("state", &new_address.state)?;
    check_not_empty("country", &new_address.country)?;
    let id = repo.create_address(&new_address)?;
    log::debug!("Created address {id}");
    Ok(id)
}

pub(super) fn check_not_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::EmptyField(field));
    }
    Ok(())
}
