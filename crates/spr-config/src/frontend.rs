//! Static frontend bundle location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_dir() -> PathBuf {
    PathBuf::from("frontend")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrontendConfig {
    /// Directory holding `index.html` and its assets.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

impl FrontendConfig {
    /// The SPA entry point served for unknown paths.
    #[must_use]
    pub fn index_file(&self) -> PathBuf {
        self.dir.join("index.html")
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        Path::new(&self.dir).is_dir()
    }
}
