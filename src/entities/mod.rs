pub mod account;
pub mod owner;
