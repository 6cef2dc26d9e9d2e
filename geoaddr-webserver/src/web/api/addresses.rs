use super::*;
use geoaddr_entities::geo::MapPoint;

#[get("/get_address")]
pub fn get_addresses(db: sqlite::Connections) -> Result<Vec<json::Address>> {
    let addresses = {
        let db = db.shared()?;
        usecases::load_addresses(&db)?
    };
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}

#[get("/addresses/filter?<latitude>&<longitude>&<max_distance>")]
pub fn get_addresses_filtered(
    db: sqlite::Connections,
    latitude: f64,
    longitude: f64,
    max_distance: f64,
) -> Result<Vec<json::Address>> {
    let center = MapPoint::new(latitude, longitude);
    let addresses = {
        let db = db.shared()?;
        usecases::filter_addresses(&db, center, max_distance)?
    };
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}

#[post("/create", data = "<new_address>")]
pub fn post_address(
    db: sqlite::Connections,
    new_address: JsonResult<json::NewAddress>,
) -> Result<json::ResponseMessage> {
    let new_address = from_json::new_address(new_address?.into_inner());
    let id = db
        .exclusive()?
        .transaction(|db| usecases::create_address(db, new_address))?;
    debug!("Added address {id}");
    Ok(Json(json::ResponseMessage {
        message: "Address added successfully".into(),
    }))
}

#[put("/update/<address_id>", data = "<update>")]
pub fn put_address(
    db: sqlite::Connections,
    address_id: i64,
    update: JsonResult<json::UpdateAddress>,
) -> Result<json::ResponseMessage> {
    let changes = from_json::address_changes(update?.into_inner());
    db.exclusive()?
        .transaction(|db| usecases::update_address(db, address_id, changes))?;
    Ok(Json(json::ResponseMessage {
        message: "Address updated successfully".into(),
    }))
}

#[delete("/delete/<address_id>")]
pub fn delete_address(
    db: sqlite::Connections,
    address_id: i64,
) -> Result<json::ResponseMessage> {
    db.exclusive()?
        .transaction(|db| usecases::delete_address(db, address_id))?;
    Ok(Json(json::ResponseMessage {
        message: "Address deleted successfully".into(),
    }))
}
