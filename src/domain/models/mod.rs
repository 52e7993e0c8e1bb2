mod action;
mod catalog;
mod command;
mod event;
mod failure;
mod focus;
mod loading;
mod message;
mod recipe;
mod textarea;

pub use action::*;
pub use catalog::*;
pub use command::*;
pub use event::*;
pub use failure::*;
pub use focus::*;
pub use loading::*;
pub use message::*;
pub use recipe::*;
pub use textarea::*;
