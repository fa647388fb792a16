pub mod hero;
pub mod session;
pub mod spot_picker;
pub mod swell;
pub mod tide;
pub mod weekly;
