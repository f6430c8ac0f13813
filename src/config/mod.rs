pub mod _config;
