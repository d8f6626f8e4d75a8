//! Facts about the machine and user running the generator.

/// Host and user the configuration is generated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEnvironment {
    pub host_machine: String,
    pub username: String,
}

impl RunEnvironment {
    /// Read the current host name and user from the process environment.
    pub fn detect() -> Self {
        let hostname_file = std::fs::read_to_string("/etc/hostname").ok();
        Self::from_sources(|key| std::env::var(key).ok(), hostname_file.as_deref())
    }

    /// Host name from `HOSTNAME`, then the hostname file, else `localhost`;
    /// user from `USER`, then `LOGNAME`, else `unknown`.
    pub fn from_sources<F>(env: F, hostname_file: Option<&str>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: String| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };

        let host_machine = env("HOSTNAME")
            .and_then(non_empty)
            .or_else(|| hostname_file.map(str::to_string).and_then(non_empty))
            .unwrap_or_else(|| "localhost".to_string());
        let username = env("USER")
            .and_then(non_empty)
            .or_else(|| env("LOGNAME").and_then(non_empty))
            .unwrap_or_else(|| "unknown".to_string());

        Self { host_machine, username }
    }
}
