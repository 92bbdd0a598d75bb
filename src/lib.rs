pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod notification;
pub mod search;
pub mod widgets;

#[cfg(test)]
mod test_utils;
