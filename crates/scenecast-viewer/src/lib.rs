pub mod renderer;
pub mod scene;
pub mod server;

pub use renderer::{DisplayOptions, RendererConfig, X3domRenderer};
pub use scene::SceneShape;
pub use server::{ShutdownHandle, StaticServer};
