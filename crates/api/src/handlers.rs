pub mod availability;
pub mod location;
