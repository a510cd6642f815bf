// Library root: re-exports all modules so integration tests and the
// csv2consensus binary can access the crate's public API.

pub mod coerce;
pub mod consensus;
pub mod rankings;
