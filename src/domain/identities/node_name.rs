use serde::Serialize;

use crate::domain::TemplateProblem;
use crate::domain::identities::validation::validate_node_name;
use crate::impl_validated_id;

/// A validated node name.
///
/// Guarantees:
/// - Non-empty
/// - Starts with a letter or `_`
/// - Contains only ASCII letters, digits, or `_`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeName(String);

impl_validated_id!(NodeName, validate_node_name, TemplateProblem::InvalidName);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifier() {
        assert_eq!(NodeName::new("node0").unwrap().as_str(), "node0");
    }

    #[test]
    fn rejects_dash() {
        assert_eq!(NodeName::new("node-a"), Err(TemplateProblem::InvalidName("node-a".into())));
    }

    #[test]
    fn display_impl() {
        let name = NodeName::new("backend_1").unwrap();
        assert_eq!(format!("{}", name), "backend_1");
    }
}
