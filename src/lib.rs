pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod intake;
pub mod models;
pub mod recommend;
pub mod state;
