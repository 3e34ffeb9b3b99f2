pub mod day;
pub mod location;
pub mod post;
pub mod schedule;
pub mod time_point;
pub mod time_slot;
