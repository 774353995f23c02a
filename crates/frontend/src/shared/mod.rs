pub mod list_controller;
pub mod list_utils;
pub mod record_store;
