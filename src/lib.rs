//! Quote-art studio: pick or write a quote, style it, hand it to print.

pub mod catalog;
pub mod config;
pub mod design;
pub mod generate;
pub mod server;
pub mod session;
pub mod ui;
