pub mod api;
pub mod browser;
pub mod limit;
pub mod parse;
