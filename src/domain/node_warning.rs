//! Node-scoped failures that exclude a node without aborting the run.

use std::fmt;

use crate::domain::TemplateProblem;

/// Why a node contributed no artifacts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("{0}")]
    Template(TemplateProblem),

    #[error("Unknown repository '{0}'")]
    UnknownRepo(String),

    #[error("Unknown product '{0}'")]
    UnknownProduct(String),

    #[error("No repository for product '{product}' version '{version}' on {platform} {platform_version}")]
    RepoNotFound { product: String, version: String, platform: String, platform_version: String },

    #[error("Product specification must set 'name' or 'repo'")]
    UnnamedProduct,

    #[error("Box '{box_name}' does not define '{field}'")]
    IncompleteBox { box_name: String, field: String },
}

/// Warning recorded for a skipped node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeWarning {
    pub node: String,
    pub reason: SkipReason,
}

impl fmt::Display for NodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node '{}' skipped: {}", self.node, self.reason)
    }
}
