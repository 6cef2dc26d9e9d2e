pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::address_builder::*;

pub mod address_builder {

    use super::*;
    use crate::{address::*, geo::*};

    #[derive(Debug)]
    pub struct AddressBuild {
        address: Address,
    }

    impl AddressBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.address.id = id;
            self
        }
        pub fn street_no(mut self, street_no: &str) -> Self {
            self.address.street_no = street_no.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.address.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.address.state = state.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.address.country = country.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.address.pos = pos;
            self
        }
        pub fn finish(self) -> Address {
            self.address
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                address: Address {
                    id: 0,
                    street_no: "1".into(),
                    city: "city".into(),
                    state: "state".into(),
                    country: "country".into(),
                    pos: MapPoint::default(),
                },
            }
        }
    }
}
