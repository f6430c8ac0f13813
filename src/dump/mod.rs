pub mod _dump;
pub mod token;
