pub mod app;
pub mod config;
pub mod data;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod input;
pub mod report;
pub mod setup;
pub mod solver;
