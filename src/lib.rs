pub mod catalog;
pub mod contact;
pub mod motion;
pub mod scene;
pub mod surface;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
