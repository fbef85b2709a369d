mod app;
mod input;
pub mod state;
mod ui;

pub use app::run;
pub use state::StalePolicy;
