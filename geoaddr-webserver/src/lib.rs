#[macro_use]
extern crate log;

use geoaddr_db_sqlite::Connections;

mod adapters;
mod web;

pub async fn run(connections: Connections, enable_cors: bool, version: &'static str) {
    web::run(connections.into(), enable_cors, version).await;
}
