//! Reading template configurations and writing generated ones.

use std::{fs, path::Path};

use tracing::debug;

use super::{Cfg, CfgError, codec};

/// Read and parse a template configuration.
///
/// # Errors
///
/// Returns [`CfgError::Read`] if the file cannot be opened or is not valid
/// UTF-8. No partial configuration is returned.
pub fn read_template(path: &Path) -> Result<Cfg, CfgError> {
    let text = fs::read_to_string(path).map_err(|source| CfgError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = codec::parse(&text);
    debug!(
        path = %path.display(),
        invariants = cfg.invariants.len(),
        properties = cfg.properties.len(),
        constants = cfg.constants.len(),
        model_values = cfg.model_values.len(),
        "parsed configuration template"
    );
    Ok(cfg)
}

/// Render `cfg` and write it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`CfgError::Write`] if the destination cannot be written.
pub fn write_cfg(path: &Path, cfg: &Cfg) -> Result<(), CfgError> {
    fs::write(path, codec::format(cfg)).map_err(|source| CfgError::Write {
        path: path.to_path_buf(),
        source,
    })
}
