pub mod ls;
pub mod root;
pub mod tables;
