//! Cylinder tessellation demo.
//!
//! Renders a procedurally generated cylinder with time-animated banded
//! shading. Escape quits; F5 reloads the shader from disk.

mod app;

use std::path::PathBuf;

use anyhow::Result;
use winit::dpi::LogicalSize;

use mandrel_engine::device::GpuInit;
use mandrel_engine::logging::{LoggingConfig, init_logging};
use mandrel_engine::shader::ShaderFile;
use mandrel_engine::window::{Runtime, RuntimeConfig};

use crate::app::ViewerApp;

const EMBEDDED_SHADER: &str = include_str!("../shaders/cylinder.wgsl");

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "mandrel cylinder".to_string(),
        initial_size: LogicalSize::new(640.0, 480.0),
    };

    Runtime::run(config, GpuInit::default(), ViewerApp::new(load_shader()))
}

/// Resolves the shader source.
///
/// A file-backed source keeps F5 hot reload working; when the file is not
/// found (e.g. running the installed binary outside the repo) the baked-in
/// copy is used and reload becomes a no-op.
fn load_shader() -> ShaderFile {
    let path = std::env::var_os("MANDREL_SHADER_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/mandrel-viewer/shaders/cylinder.wgsl"));

    match ShaderFile::from_path(&path) {
        Ok(shader) => {
            log::info!("loaded shader from {}; press F5 to reload", path.display());
            shader
        }
        Err(e) => {
            log::warn!("{e:#}; using embedded shader (F5 reload disabled)");
            ShaderFile::embedded(EMBEDDED_SHADER)
        }
    }
}
