pub mod app;
pub mod layout;
pub mod palette;
pub mod report;
