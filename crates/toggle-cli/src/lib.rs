//! Library side of the `toggle-rows` command.

pub mod action;
pub mod logging;
pub mod render;
pub mod session;
