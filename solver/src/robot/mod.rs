pub mod traits;
mod virtual_mouse;

pub use traits::{RenderSink, Robot};
pub use virtual_mouse::VirtualMouse;
