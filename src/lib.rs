pub mod cli;
pub mod packet;
pub mod training;
pub mod types;
pub mod utils;
