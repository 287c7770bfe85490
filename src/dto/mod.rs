//! Transfer representations exposed at the `/banking` boundary.

pub mod account;
pub mod owner;

pub use account::AccountDto;
pub use owner::OwnerDto;

pub(crate) fn new_id() -> uuid::Uuid {
    uuid::Uuid::new_v4()
}
