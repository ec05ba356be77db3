pub mod detail;
pub mod forms;
pub mod not_found;
pub mod search;
