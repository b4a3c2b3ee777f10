pub mod backup;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod merge;
pub mod migrations;
pub mod owner;
pub mod paths;
pub mod product;
pub mod slug;
pub mod store;

pub use error::{Result, WorkshopError};
