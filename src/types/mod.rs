pub mod application;
pub mod assessment;
pub mod config;
pub mod scoring;
