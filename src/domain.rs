pub mod compass;
pub mod marine;
pub mod rating;
pub mod spots;
pub mod summary;
