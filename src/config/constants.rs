//! Constants for sge-build

use std::path::PathBuf;
use std::sync::OnceLock;

/// Full path of the executable file
pub static EXECUTABLE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// External build tool
pub const BUILD_TOOL: &str = "make";

/// Target passed to the build tool on every invocation
pub const BUILD_TARGET: &str = "all";

/// Engine source root, relative to the project root
pub const ENGINE_DIR: &str = "SimpleGameEngine";

/// Static library produced by the engine build
pub const ENGINE_LIB_FILE: &str = "libSimpleGameEngine.a";

/// Game source root, relative to the project root
pub const GAME_DIR: &str = "Game";

/// Engine dependency folder inside the game source root
pub const ENGINE_DEP_DIR: &str = "SGE";

/// Directory holding the executable-linking makefile, relative to the project root
pub const BUILD_DIR: &str = "Build";

/// Dynamic library produced by the game build
pub const GAME_BIN_NAME: &str = "libGame.dylib";

/// Executable bundle directory inside the build directory
pub const BUNDLE_DIR: &str = "GameOut";

/// Game resources directory
pub const RESOURCES_DIR: &str = "resources";

/// Name of the final linked executable
pub const EXE_NAME: &str = "Game";

/// Library subdirectory used by every build output
pub const LIB_DIR: &str = "lib";

/// Public header directory of the engine
pub const INCLUDE_DIR: &str = "include";

/// Build parameter keys understood by the makefiles
pub const PARAM_BIN_NAME: &str = "BIN_NAME";
pub const PARAM_OUT_DIR: &str = "OUT_DIR";
pub const PARAM_EXE_NAME: &str = "EXE_NAME";

/// Log directory, next to the executable
pub const LOG_DIR: &str = "logs";

/// Record the executable path. Repeated calls keep the first value.
pub fn init_constants() -> std::io::Result<()> {
    let exe_path = std::env::current_exe()?;
    let _ = EXECUTABLE_PATH.set(exe_path);
    Ok(())
}
