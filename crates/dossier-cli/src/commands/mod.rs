pub mod ask;
pub mod auth;
pub mod dispatch;
pub mod history;
pub mod report;
pub mod shared;
pub mod status;
