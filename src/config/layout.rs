//! Concrete paths of the engine, game and bundle trees

use crate::config::constants;
use std::path::{Path, PathBuf};

/// Every path the build pipelines touch, derived from a single project root.
///
/// The project root is the directory holding the engine sources, the game sources
/// and the `Build` directory with the executable-linking makefile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    pub build_tool: String,
    pub game_bin_name: String,
    pub exe_name: String,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            build_tool: constants::BUILD_TOOL.to_string(),
            game_bin_name: constants::GAME_BIN_NAME.to_string(),
            exe_name: constants::EXE_NAME.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn engine_root(&self) -> PathBuf {
        self.root.join(constants::ENGINE_DIR)
    }

    pub fn engine_lib(&self) -> PathBuf {
        self.engine_root()
            .join(constants::LIB_DIR)
            .join(constants::ENGINE_LIB_FILE)
    }

    pub fn engine_include(&self) -> PathBuf {
        self.engine_root().join(constants::INCLUDE_DIR)
    }

    pub fn game_root(&self) -> PathBuf {
        self.root.join(constants::GAME_DIR)
    }

    /// `<game>/SGE`, the folder the game makefile reads the engine from
    pub fn engine_dep_root(&self) -> PathBuf {
        self.game_root().join(constants::ENGINE_DEP_DIR)
    }

    pub fn engine_dep_lib(&self) -> PathBuf {
        self.engine_dep_root().join(constants::LIB_DIR)
    }

    pub fn engine_dep_include(&self) -> PathBuf {
        self.engine_dep_root().join(constants::INCLUDE_DIR)
    }

    pub fn game_bin(&self) -> PathBuf {
        self.game_root()
            .join(constants::LIB_DIR)
            .join(&self.game_bin_name)
    }

    pub fn game_resources(&self) -> PathBuf {
        self.game_root().join(constants::RESOURCES_DIR)
    }

    pub fn build_root(&self) -> PathBuf {
        self.root.join(constants::BUILD_DIR)
    }

    pub fn bundle_root(&self) -> PathBuf {
        self.build_root().join(constants::BUNDLE_DIR)
    }

    pub fn bundle_lib(&self) -> PathBuf {
        self.bundle_root().join(constants::LIB_DIR)
    }

    pub fn bundle_resources(&self) -> PathBuf {
        self.bundle_root().join(constants::RESOURCES_DIR)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
