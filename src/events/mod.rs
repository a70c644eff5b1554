pub mod pointer;
pub mod window;

pub use pointer::wire_pointer_handlers;
pub use window::{wire_resize, wire_unload};
