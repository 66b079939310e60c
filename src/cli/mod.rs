pub mod check;
pub mod last;
pub mod setup;
pub mod ui;
