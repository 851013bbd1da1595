pub mod common;
mod log;
