//! Result types for dependency operations

/// Why a dependency step did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    MissingRequirements,
}

impl SkipReason {
    pub fn message(&self) -> &'static str {
        match self {
            SkipReason::Disabled => "Skipping, dependency is disabled.",
            SkipReason::MissingRequirements => "Skipping, missing the requirements file.",
        }
    }
}

/// Terminal state of a single `execute` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyOutcome {
    Skipped(SkipReason),
    Completed,
}
