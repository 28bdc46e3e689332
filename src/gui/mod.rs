pub mod app;
pub mod circle;
pub mod theme;
pub mod window;
