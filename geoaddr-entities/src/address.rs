use crate::geo::MapPoint;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id        : i64,
    pub street_no : String,
    pub city      : String,
    pub state     : String,
    pub country   : String,
    pub pos       : MapPoint,
}
