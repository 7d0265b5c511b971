//! Domain model: accounts, payments and the storage ports the engine queries through.

pub mod account;
pub mod payment;
pub mod ports;
