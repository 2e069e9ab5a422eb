pub mod app;
pub mod events;
pub mod form;
pub mod ui;

pub use app::App;
