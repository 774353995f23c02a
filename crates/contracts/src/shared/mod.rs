pub mod config;
pub mod date_utils;
pub mod error;
pub mod list_query;
