pub mod booking;
pub mod space;
pub mod user;
pub mod vehicle;
