pub mod browse;
pub mod duplicates;
pub mod keys;
pub mod list;
pub mod search;
