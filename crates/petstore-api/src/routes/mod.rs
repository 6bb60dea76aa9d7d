//! # API Route Modules
//!
//! - `pets` — operations about pets: fetch by id, add/update, and the
//!   status/tag find endpoints. The only functional surface of the sample.

pub mod pets;
