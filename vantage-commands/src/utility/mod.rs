pub mod help;
pub mod tables;
pub mod usage;
