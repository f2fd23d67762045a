pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;
pub mod ui;

pub use api::ApiClient;
pub use config::Config;
pub use handlers::Controller;
pub use state::ViewState;
pub use storage::Store;
