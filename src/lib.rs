pub mod app;
pub mod args;
pub mod config;
pub mod options;
pub mod parsers;
pub mod presentation;
