//! Comparator configuration.

use serde::{Deserialize, Serialize};

use crate::diagnostic::report;
use crate::equatable::SpryEquatable;
use crate::resolver;

/// What the reporter does once a contract violation has been logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Panic with the diagnostic message. Test harnesses report the panic as
    /// a failed test.
    #[default]
    Panic,
    /// Terminate the process immediately.
    Abort,
}

impl FailureMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureMode::Panic => "panic",
            FailureMode::Abort => "abort",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ComparatorConfig {
    pub on_violation: FailureMode,
}

/// Entry point used by the spy layer to match recorded arguments.
///
/// Holds no state besides its configuration; one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator {
    config: ComparatorConfig,
}

impl Comparator {
    pub fn new(on_violation: FailureMode) -> Self {
        Self::from_config(ComparatorConfig { on_violation })
    }

    pub fn from_config(config: ComparatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Compares `expected` with a possibly absent `actual`.
    ///
    /// Returns `false` only for legitimately different values. Contract
    /// violations go to [`report`] and do not return.
    pub fn is_equal(
        &self,
        expected: &dyn SpryEquatable,
        actual: Option<&dyn SpryEquatable>,
    ) -> bool {
        match resolver::compare(expected, actual) {
            Ok(equal) => equal,
            Err(diagnostic) => report(diagnostic, self.config.on_violation),
        }
    }
}
