// Shared test doubles and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use sge_build::config::ProjectLayout;
use sge_build::pipeline::CommandInvoker;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub working_dir: PathBuf,
    pub command: String,
    pub args: Vec<String>,
}

/// Returns scripted exit codes in call order (0 once the script runs out) and records every call
#[derive(Default)]
pub struct ScriptedInvoker {
    exit_codes: Mutex<VecDeque<i32>>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedInvoker {
    pub fn new(exit_codes: impl IntoIterator<Item = i32>) -> Self {
        Self {
            exit_codes: Mutex::new(exit_codes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandInvoker for ScriptedInvoker {
    async fn invoke(
        &self,
        working_dir: &Path,
        command: &str,
        args: &[String],
    ) -> std::io::Result<i32> {
        self.calls.lock().unwrap().push(Invocation {
            working_dir: working_dir.to_path_buf(),
            command: command.to_string(),
            args: args.to_vec(),
        });
        Ok(self.exit_codes.lock().unwrap().pop_front().unwrap_or(0))
    }
}

/// Fails to spawn, as if the build tool were not installed
pub struct MissingToolInvoker;

#[async_trait]
impl CommandInvoker for MissingToolInvoker {
    async fn invoke(
        &self,
        _working_dir: &Path,
        command: &str,
        _args: &[String],
    ) -> std::io::Result<i32> {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{command}: not found"),
        ))
    }
}

fn write(path: PathBuf, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Engine outputs as `make all` would leave them
pub fn seed_engine_outputs(layout: &ProjectLayout) {
    write(layout.engine_lib(), "engine archive");
    write(layout.engine_include().join("core/Game.h"), "class Game;");
    write(layout.engine_include().join("core/vec2.h"), "struct vec2;");
    write(layout.engine_include().join("components/Component.h"), "class Component;");
    write(layout.engine_include().join(".clang-format"), "BasedOnStyle: LLVM");
}

/// Game outputs and resources as the game makefile would leave them
pub fn seed_game_outputs(layout: &ProjectLayout) {
    write(layout.game_bin(), "game dylib");
    write(layout.game_resources().join("textures/player.png"), "png");
    write(layout.game_resources().join("scripts/main.sge"), "script");
    write(layout.game_resources().join(".keep"), "");
    fs::create_dir_all(layout.build_root()).unwrap();
}

/// Every file under `root` as a sorted list of relative paths
pub fn list_files(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_relative(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_relative(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_relative(root, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }
    Ok(())
}
