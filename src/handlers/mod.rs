// Handlers module

pub mod chat;
pub mod login;
pub mod system;

pub use chat::chat_handler;
pub use login::login_handler;
pub use system::{get_history_handler, home_handler, ping_handler};
