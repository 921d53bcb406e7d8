use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// WGSL shader source, optionally backed by a file on disk.
///
/// File-backed sources support `reload()` re-reading the file; embedded
/// sources (compiled into the binary) have nothing to reload.
#[derive(Debug, Clone)]
pub struct ShaderFile {
    path: Option<PathBuf>,
    text: String,
}

impl ShaderFile {
    /// Reads shader source from `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read shader source {}", path.display()))?;
        Ok(Self {
            path: Some(path),
            text,
        })
    }

    /// Wraps source text that has no backing file.
    pub fn embedded(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Re-reads the source from disk.
    ///
    /// Returns `Ok(true)` when new text was loaded, `Ok(false)` for embedded
    /// sources. A read failure leaves the current text untouched.
    pub fn reload(&mut self) -> Result<bool> {
        let Some(path) = self.path.as_deref() else {
            return Ok(false);
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to re-read shader source {}", path.display()))?;
        self.text = text;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mandrel-shader-{}-{name}", std::process::id()))
    }

    #[test]
    fn reload_picks_up_changed_text() {
        let path = scratch_path("reload.wgsl");
        std::fs::write(&path, "// v1").unwrap();

        let mut shader = ShaderFile::from_path(&path).unwrap();
        assert_eq!(shader.text(), "// v1");

        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "// v2").unwrap();
        drop(f);

        assert!(shader.reload().unwrap());
        assert_eq!(shader.text(), "// v2");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn reload_failure_keeps_previous_text() {
        let path = scratch_path("vanish.wgsl");
        std::fs::write(&path, "// kept").unwrap();

        let mut shader = ShaderFile::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(shader.reload().is_err());
        assert_eq!(shader.text(), "// kept");
    }

    #[test]
    fn embedded_source_has_nothing_to_reload() {
        let mut shader = ShaderFile::embedded("// baked in");
        assert!(shader.path().is_none());
        assert!(!shader.reload().unwrap());
        assert_eq!(shader.text(), "// baked in");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ShaderFile::from_path(scratch_path("missing.wgsl")).is_err());
    }
}
