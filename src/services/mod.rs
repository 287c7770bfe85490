// Banking services
pub mod accounts;
pub mod owners;

pub use accounts::AccountService;
pub use owners::OwnerService;
