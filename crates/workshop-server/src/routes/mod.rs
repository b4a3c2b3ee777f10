pub mod backup;
pub mod export;
pub mod import;
pub mod owners;
pub mod products;
pub mod templates;
