// State module - manages application state

mod alert;

mod app_state;
pub use app_state::AppState;

mod shell;
pub use shell::Shell;
