pub mod bench;
pub mod demo;
