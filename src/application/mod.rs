//! Application layer containing the analytical queries.
//!
//! `PaymentEngine` is the entry point: callers load a batch through `clear` and
//! `save`, then run any number of read-only queries against it.

pub mod engine;
