use super::prelude::*;

pub fn load_addresses<R>(repo: &R) -> Result<Vec<Address>>
where
    R: AddressRepo,
{
    Ok(repo.all_addresses()?)
}
