//! Template validation.
//!
//! Every problem is collected in one pass. Problems concerning a single node's box
//! only exclude that node; everything else rejects the template.

use std::collections::BTreeSet;

use crate::app::commands::generate::OutputFormat;
use crate::domain::identities::validation::validate_node_name;
use crate::domain::{AppError, NodeWarning, ProviderKind, SkipReason, Template, TemplateProblem};
use crate::ports::BoxCatalog;

/// Outcome of validating a template against the box catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems rejecting the whole template.
    pub errors: Vec<TemplateProblem>,
    /// Nodes excluded from generation, in template order.
    pub skipped: Vec<NodeWarning>,
    /// Provider shared by every known box, when there is exactly one.
    pub provider: Option<ProviderKind>,
}

impl ValidationReport {
    pub fn is_skipped(&self, node: &str) -> Option<&NodeWarning> {
        self.skipped.iter().find(|warning| warning.node == node)
    }

    /// File a problem as a skipped node or as a fatal error.
    fn record(&mut self, node: &str, problem: TemplateProblem) {
        if problem.is_node_scoped() {
            let reason = SkipReason::Template(problem);
            self.skipped.push(NodeWarning { node: node.to_string(), reason });
        } else {
            self.errors.push(problem);
        }
    }

    /// The template provider, or every fatal problem found.
    pub fn provider(&self) -> Result<ProviderKind, AppError> {
        match self.provider {
            Some(provider) if self.errors.is_empty() => Ok(provider),
            _ => Err(AppError::InvalidTemplate(self.errors.clone())),
        }
    }
}

pub fn validate(
    template: &Template,
    boxes: &dyn BoxCatalog,
    format: OutputFormat,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut providers = BTreeSet::new();

    for (name, spec) in template.nodes() {
        if !validate_node_name(name) {
            report.record(name, TemplateProblem::InvalidName(name.to_string()));
        }

        if spec.box_name.is_empty() {
            report.record(name, TemplateProblem::MissingBox { node: name.to_string() });
            continue;
        }

        match boxes.get_box(&spec.box_name) {
            Some(descriptor) => {
                providers.insert(descriptor.provider);
            }
            None => {
                let problem = TemplateProblem::UnknownBox {
                    node: name.to_string(),
                    box_name: spec.box_name.clone(),
                };
                report.record(name, problem);
            }
        }
    }

    match providers.len() {
        0 => report.errors.push(TemplateProblem::NoProvider),
        1 => report.provider = providers.first().copied(),
        _ => report.errors.push(TemplateProblem::MixedProviders(
            providers.iter().map(|provider| provider.as_str().to_string()).collect(),
        )),
    }

    match report.provider {
        Some(provider) if format == OutputFormat::Terraform && !provider.is_cloud() => {
            report.errors.push(TemplateProblem::UnsupportedFormat {
                format: format.to_string(),
                provider: provider.to_string(),
            });
        }
        _ => {}
    }

    report
}
