//! AWS services backed by the `aws` command line client.

use std::process::{Command, Output};

use crate::domain::config::AwsConfig;
use crate::domain::{AppError, KeyPair};
use crate::ports::{DeviceNameLookup, KeyPairService};

#[derive(Debug, Clone)]
pub struct AwsCliAdapter {
    region: String,
    profile: Option<String>,
}

impl AwsCliAdapter {
    pub fn new(config: &AwsConfig) -> Self {
        Self { region: config.region.clone(), profile: config.profile.clone() }
    }

    fn base_args(&self) -> Vec<String> {
        let mut args = vec!["--region".to_string(), self.region.clone()];
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        args
    }

    fn run_output(&self, args: &[&str]) -> Result<Output, AppError> {
        let mut command = Command::new("aws");
        command.args(self.base_args());
        command.args(args);

        let output = command.output().map_err(|e| AppError::CommandFailed {
            command: format!("aws {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::CommandFailed {
                command: format!("aws {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = self.run_output(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl KeyPairService for AwsCliAdapter {
    fn generate_key_pair(&self, name: &str) -> Result<KeyPair, AppError> {
        let material = self
            .run(&[
                "ec2",
                "create-key-pair",
                "--key-name",
                name,
                "--query",
                "KeyMaterial",
                "--output",
                "text",
            ])
            .map_err(|e| AppError::KeyPair { name: name.to_string(), details: e.to_string() })?;

        if material.is_empty() {
            return Err(AppError::KeyPair {
                name: name.to_string(),
                details: "aws returned empty key material".to_string(),
            });
        }

        Ok(KeyPair { name: name.to_string(), material: format!("{}\n", material) })
    }

    fn delete_key_pair(&self, name: &str) -> Result<(), AppError> {
        self.run(&["ec2", "delete-key-pair", "--key-name", name]).map(|_| ())
    }
}

impl DeviceNameLookup for AwsCliAdapter {
    fn device_name_for_ami(&self, ami: &str) -> Option<String> {
        let result = self.run(&[
            "ec2",
            "describe-images",
            "--image-ids",
            ami,
            "--query",
            "Images[0].RootDeviceName",
            "--output",
            "text",
        ]);

        match result {
            Ok(name) if !name.is_empty() && name != "None" => Some(name),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Unable to look up root device of {}: {}", ami, e);
                None
            }
        }
    }
}
