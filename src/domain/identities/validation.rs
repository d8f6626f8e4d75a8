/// Validates a node name against the identifier grammar.
///
/// Generated Vagrantfiles and Terraform descriptors use the node name as a symbol,
/// so the name must:
/// - Be non-empty
/// - Start with an ASCII letter or '_'
/// - Contain only ASCII letters, digits, or '_'
pub fn validate_node_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Replaces every character outside `[A-Za-z0-9_-]` with '-'.
///
/// Used for resource names sent to cloud APIs.
pub fn sanitize_resource_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect()
}

#[macro_export]
macro_rules! impl_validated_id {
    ($name:ident, $validate:path, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(id: &str) -> Result<Self, $crate::domain::TemplateProblem> {
                if $validate(id) { Ok(Self(id.to_string())) } else { Err($err_variant(id.to_string())) }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
