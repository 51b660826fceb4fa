pub mod export;
pub mod tables;
