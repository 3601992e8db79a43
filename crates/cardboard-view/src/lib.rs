pub mod camera;
pub mod controller;
pub mod scene;
pub mod wake;

pub use camera::Camera;
pub use controller::{ViewController, ViewMode};
pub use scene::SceneGroups;
pub use wake::{StubWakeLock, WakeLock};
