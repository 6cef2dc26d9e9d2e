use diesel::{
    self,
    prelude::*,
    result::Error as DieselError,
};

use geoaddr_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, DbConnection, DbReadOnly, DbReadWrite};

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

impl<'a> AddressRepo for DbReadOnly<'a> {
    fn create_address(&self, _new_address: &NewAddress) -> Result<i64> {
        unreachable!();
    }
    fn update_address(&self, _id: i64, _changes: &AddressChanges) -> Result<()> {
        unreachable!();
    }
    fn delete_address(&self, _id: i64) -> Result<()> {
        unreachable!();
    }

    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<u64> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

impl<'a> AddressRepo for DbReadWrite<'a> {
    fn create_address(&self, new_address: &NewAddress) -> Result<i64> {
        create_address(&mut self.conn.borrow_mut(), new_address)
    }
    fn update_address(&self, id: i64, changes: &AddressChanges) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), id, changes)
    }
    fn delete_address(&self, id: i64) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }

    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<u64> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

impl<'a> AddressRepo for DbConnection<'a> {
    fn create_address(&self, new_address: &NewAddress) -> Result<i64> {
        create_address(&mut self.conn.borrow_mut(), new_address)
    }
    fn update_address(&self, id: i64, changes: &AddressChanges) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), id, changes)
    }
    fn delete_address(&self, id: i64) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }

    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<u64> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

fn create_address(conn: &mut SqliteConnection, a: &NewAddress) -> Result<i64> {
    use schema::address::dsl;
    let new_address = models::NewAddress::from(a);
    let id = diesel::insert_into(schema::address::table)
        .values(&new_address)
        .returning(dsl::id)
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(id)
}

fn update_address(conn: &mut SqliteConnection, id: i64, changes: &AddressChanges) -> Result<()> {
    use schema::address::dsl;
    // An empty changeset would be a query builder error in Diesel.
    // The use case layer rejects it before we get here.
    debug_assert!(!changes.is_empty());
    let changeset = models::AddressChangeset::from(changes);
    let count = diesel::update(dsl::address.filter(dsl::id.eq(id)))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_address(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    use schema::address::dsl;
    let count = diesel::delete(dsl::address.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn all_addresses(conn: &mut SqliteConnection) -> Result<Vec<Address>> {
    use schema::address::dsl;
    Ok(dsl::address
        .order(dsl::id.asc())
        .load::<models::AddressEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_addresses(conn: &mut SqliteConnection) -> Result<u64> {
    use schema::address::dsl;
    Ok(dsl::address
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}
