pub mod clock;
pub mod grid;
pub mod time;
