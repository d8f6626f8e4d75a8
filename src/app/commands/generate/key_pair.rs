//! Cloud key pair provisioning and rollback.

use crate::domain::key_pair::{KEY_PAIR_MARKER, private_key_file_name};
use crate::domain::{AppError, KeyPair};
use crate::ports::{ConfigDirectory, KeyPairService};

/// Create the run's key pair and store it in the configuration directory.
///
/// `provisioned` is filled as soon as the service created the pair, so a failed write
/// still leaves something for the rollback to delete.
pub fn provision(
    service: &dyn KeyPairService,
    directory: &dyn ConfigDirectory,
    name: &str,
    provisioned: &mut Option<KeyPair>,
) -> Result<(), AppError> {
    log::info!("Creating key pair {}", name);
    let pair = service.generate_key_pair(name).map_err(|e| match e {
        AppError::KeyPair { .. } => e,
        other => AppError::KeyPair { name: name.to_string(), details: other.to_string() },
    })?;
    let pair = provisioned.insert(pair);

    directory.write_private_file(&private_key_file_name(&pair.name), &pair.material)?;
    directory.write_file(KEY_PAIR_MARKER, &pair.name)?;
    Ok(())
}

/// Delete a provisioned key pair. Failures are logged, never raised.
pub fn rollback(service: &dyn KeyPairService, pair: &KeyPair) {
    log::info!("Deleting key pair {}", pair.name);
    if let Err(e) = service.delete_key_pair(&pair.name) {
        log::warn!("Unable to delete key pair {}: {}", pair.name, e);
    }
}
