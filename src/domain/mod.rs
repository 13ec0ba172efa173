//! Domain records and view state shared by the catalog and admin pages.

pub mod catalog;
pub mod connection;
pub mod filter;
pub mod session;
pub mod tool;
pub mod types;
pub mod user;
pub mod view;
