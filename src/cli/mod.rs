pub mod args;
pub mod collector;
pub mod output;
