mod create_address;
mod delete_address;
mod error;
mod filter_addresses;
mod load_addresses;
mod update_address;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_address::*, delete_address::*, error::Error, filter_addresses::*, load_addresses::*,
    update_address::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
