use crate::config::ProjectLayout;
use crate::error::PipelineResult;
use crate::pipeline::{Pipeline, Stage};

pub const ENGINE_PIPELINE: &str = "UpdateEngineDeps";

pub const PHASE_ENGINE_BUILD: &str = "engine build";
pub const PHASE_LIB_COPY: &str = "engine library copy";
pub const PHASE_HEADER_COPY: &str = "engine header copy";

/// Build the engine, then place its static library and public headers into the
/// game's dependency folder, where the game makefile expects them.
pub fn engine_deps_pipeline(layout: &ProjectLayout) -> PipelineResult<Pipeline> {
    Pipeline::new(ENGINE_PIPELINE)
        .add_stage(
            PHASE_ENGINE_BUILD,
            Stage::build_target(&layout.build_tool, layout.engine_root(), &[]),
        )?
        .add_stage(
            PHASE_LIB_COPY,
            Stage::copy(vec![layout.engine_lib()], layout.engine_dep_lib()),
        )?
        .add_stage(
            PHASE_HEADER_COPY,
            Stage::copy_tree(vec![layout.engine_include()], layout.engine_dep_root()),
        )
}
