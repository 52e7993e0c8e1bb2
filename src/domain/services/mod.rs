pub mod actions;
mod app_state;
mod conversation;
mod edit_session;
pub mod events;
mod inputs;
mod recipe_list;
mod suggestions;

pub use app_state::*;
pub use conversation::*;
pub use edit_session::*;
pub use inputs::*;
pub use recipe_list::*;
pub use suggestions::*;
