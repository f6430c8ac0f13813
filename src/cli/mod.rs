pub mod _cli;
pub mod prompt;
