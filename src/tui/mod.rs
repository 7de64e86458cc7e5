pub mod app;
pub mod focus;
pub mod input;
pub mod render;
pub mod row;
pub mod text_field;
pub mod theme;

pub use app::run;
