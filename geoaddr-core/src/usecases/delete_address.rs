use super::prelude::*;

pub fn delete_address<R>(repo: &R, id: i64) -> Result<()>
where
    R: AddressRepo,
{
    repo.delete_address(id)?;
    log::debug!("Deleted address {id}");
    Ok(())
}
