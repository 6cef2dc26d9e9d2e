table! {
    address (id) {
        id -> BigInt,
        street_no -> Text,
        city -> Text,
        state -> Text,
        country -> Text,
        coordinates_l1 -> Double,
        coordinates_l2 -> Double,
    }
}
