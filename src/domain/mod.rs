pub mod box_descriptor;
pub mod config;
pub mod error;
pub mod identities;
pub mod key_pair;
pub mod node_params;
pub mod node_warning;
pub mod repo;
pub mod role;
pub mod template;

pub use box_descriptor::{BoxDescriptor, ProviderKind};
pub use config::GeneratorConfig;
pub use error::{AppError, TemplateProblem};
pub use identities::NodeName;
pub use key_pair::KeyPair;
pub use node_params::{
    CloudParams, HypervisorParams, MachineType, NetworkParams, NodeRequirements, ProviderParams,
    ResolutionContext, ResolvedNode,
};
pub use node_warning::{NodeWarning, SkipReason};
pub use repo::RepoDescriptor;
pub use role::{NodeConfigDocument, RoleDocument};
pub use template::{NodeSpec, ProductSpec, Template};
