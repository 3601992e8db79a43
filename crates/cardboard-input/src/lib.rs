pub mod drag;

pub use drag::{DragMode, DragTracker};
