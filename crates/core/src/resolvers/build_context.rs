use std::path::MAIN_SEPARATOR;

use crate::context::{Configuration, IdeContext};
use crate::resolver::MacroResolver;

pub const SOLUTION_DIR: &str = "$(SolutionDir)";
pub const PROJECT_DIR: &str = "$(ProjectDir)";
pub const CONFIGURATION: &str = "$(Configuration)";
pub const PLATFORM: &str = "$(Platform)";

/// Resolves the standard build macros from the host's active solution and project.
///
/// | Token              | Value                                             |
/// |--------------------|---------------------------------------------------|
/// | `$(SolutionDir)`   | directory of the active solution, trailing separator |
/// | `$(ProjectDir)`    | directory of the active project, trailing separator  |
/// | `$(Configuration)` | name of the active project's configuration        |
/// | `$(Platform)`      | platform of the active project's configuration    |
///
/// The context is queried on every call and never held on to. Hosts whose
/// solution and project objects may only be touched from one designated
/// thread must call the evaluator that owns this resolver from that thread.
#[derive(Debug, Clone)]
pub struct BuildContextResolver<C> {
    context: C,
}

impl<C: IdeContext> BuildContextResolver<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    fn active_configuration(&self) -> Option<Configuration> {
        self.context.active_project()?.configuration
    }
}

impl<C: IdeContext> MacroResolver for BuildContextResolver<C> {
    fn compute_macro(&self, token: &str) -> Option<String> {
        match token {
            SOLUTION_DIR => self
                .context
                .active_solution()
                .map(|solution| directory_with_separator(&solution.path)),
            PROJECT_DIR => self
                .context
                .active_project()
                .map(|project| directory_with_separator(&project.path)),
            CONFIGURATION => self.active_configuration().map(|config| config.name),
            PLATFORM => self.active_configuration().map(|config| config.platform),
            _ => None,
        }
    }
}

/// Directory part of `path`, keeping the separator that ends it.
///
/// Both `/` and `\` count as separators so host paths from any platform work
/// the same way. A bare file name is taken to live in the current directory
/// and yields `.` plus the platform separator, never a lone separator.
fn directory_with_separator(path: &str) -> String {
    match path.rfind(['/', '\\']) {
        Some(index) => path[..=index].to_string(),
        None => format!(".{MAIN_SEPARATOR}"),
    }
}
