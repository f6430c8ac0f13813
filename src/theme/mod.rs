pub mod _theme;
pub mod emacs;
pub mod tables;
pub mod vim;
