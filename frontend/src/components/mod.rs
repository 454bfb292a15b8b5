pub mod expenses;
pub mod header;
pub mod month_navigator;
pub mod stats;
