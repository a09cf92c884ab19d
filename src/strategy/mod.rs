pub mod panic;
pub mod runner;
