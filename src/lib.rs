pub mod base;
pub mod config;
pub mod errors;
pub mod input;
pub mod reconstruct;
pub mod report;
pub mod shamir;
pub mod types;

pub use base::{decode, encode};
pub use errors::{ReconstructError, Result};
pub use reconstruct::{reconstruct_secret, Division};
pub use shamir::{interpolate_at_zero, interpolate_at_zero_exact};
pub use types::{Point, Secret, Share, Threshold};
