pub mod _colorscheme;
