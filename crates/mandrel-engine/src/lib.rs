//! Mandrel engine crate.
//!
//! Owns the platform + GPU runtime pieces (window, device, input, timing)
//! together with the mesh, camera, shader and render subsystems consumed by
//! the viewer binary.

pub mod core;
pub mod device;
pub mod input;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod shader;
pub mod time;
pub mod window;

pub mod logging;
