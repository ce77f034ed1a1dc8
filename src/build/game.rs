use crate::config::{ProjectLayout, constants};
use crate::error::PipelineResult;
use crate::pipeline::{Pipeline, Stage};

pub const GAME_PIPELINE: &str = "BuildGameExecutable";

pub const PHASE_GAME_BUILD: &str = "game binary build";
pub const PHASE_BUNDLE_SETUP: &str = "bundle directory setup";
pub const PHASE_BIN_COPY: &str = "game binary copy";
pub const PHASE_RESOURCE_COPY: &str = "resource copy";
pub const PHASE_LINK: &str = "executable link";

/// Build the game library, assemble the bundle directory and link the executable.
///
/// Needs the engine dependency folder filled by the engine pipeline.
pub fn game_executable_pipeline(layout: &ProjectLayout) -> PipelineResult<Pipeline> {
    let bin_name = layout.game_bin_name.as_str();

    Pipeline::new(GAME_PIPELINE)
        .add_stage(
            PHASE_GAME_BUILD,
            Stage::build_target(
                &layout.build_tool,
                layout.game_root(),
                &[(constants::PARAM_BIN_NAME, bin_name)],
            ),
        )?
        .add_stage(
            PHASE_BUNDLE_SETUP,
            Stage::create_dirs(vec![layout.bundle_root(), layout.bundle_lib()]),
        )?
        .add_stage(
            PHASE_BIN_COPY,
            Stage::copy(vec![layout.game_bin()], layout.bundle_lib()),
        )?
        .add_stage(
            PHASE_RESOURCE_COPY,
            Stage::copy_tree(vec![layout.game_resources()], layout.bundle_root()),
        )?
        // OUT_DIR is resolved by the makefile relative to the build directory
        .add_stage(
            PHASE_LINK,
            Stage::build_target(
                &layout.build_tool,
                layout.build_root(),
                &[
                    (constants::PARAM_OUT_DIR, constants::BUNDLE_DIR),
                    (constants::PARAM_BIN_NAME, bin_name),
                    (constants::PARAM_EXE_NAME, layout.exe_name.as_str()),
                ],
            ),
        )
}
