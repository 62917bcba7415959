pub mod api;
pub mod fetcher;
pub mod navigator;
pub mod ui;
pub mod view_model;
