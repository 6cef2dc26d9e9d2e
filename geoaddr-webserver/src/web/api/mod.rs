use std::{fmt::Display, result};

use geoaddr_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, sqlite};
use crate::adapters::json::{self, from_json};
use geoaddr_core::usecases;

mod addresses;
mod error;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_version,
        // ---   addresses   --- //
        addresses::get_addresses,
        addresses::get_addresses_filtered,
        addresses::post_address,
        addresses::put_address,
        addresses::delete_address,
    ]
}

#[get("/")]
fn get_index() -> &'static str {
    "Hello World"
}

#[get("/server/version")]
fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
