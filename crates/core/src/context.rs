//! Host build/IDE context.
//!
//! The engine never owns the solution, project or configuration it expands
//! macros from. It asks an [`IdeContext`] for them each time a macro has to
//! be computed, and any of them may be absent at that moment.

use std::fmt::{Display, Formatter};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Full file-system path of the solution file.
    pub path: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub name: String,
    pub platform: String,
}

impl Display for Configuration {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}|{}", self.name, self.platform)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Full file-system path of the project file.
    pub path: String,
    /// Active build configuration, if the host has one selected.
    pub configuration: Option<Configuration>,
}

/// Lookup contract for the host's active solution and project.
pub trait IdeContext {
    fn active_solution(&self) -> Option<Solution>;

    fn active_project(&self) -> Option<Project>;
}

impl<C: IdeContext + ?Sized> IdeContext for &C {
    fn active_solution(&self) -> Option<Solution> {
        (**self).active_solution()
    }

    fn active_project(&self) -> Option<Project> {
        (**self).active_project()
    }
}

/// A fixed snapshot of host state, usually read from a context file.
///
/// # Examples
///
/// ```
/// use macro_eval_core::context::{IdeContext, StaticContext};
///
/// let context: StaticContext = serde_yaml::from_str(
///     "solution:\n  path: 'C:\\Work\\App.sln'\n",
/// )?;
/// assert!(context.active_solution().is_some());
/// assert!(context.active_project().is_none());
/// # Ok::<(), serde_yaml::Error>(())
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticContext {
    pub solution: Option<Solution>,
    pub project: Option<Project>,
}

impl IdeContext for StaticContext {
    fn active_solution(&self) -> Option<Solution> {
        self.solution.clone()
    }

    fn active_project(&self) -> Option<Project> {
        self.project.clone()
    }
}
