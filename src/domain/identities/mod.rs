pub mod node_name;
pub mod validation;

pub use node_name::NodeName;
