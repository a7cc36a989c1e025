//! Loading call-surface profiles from YAML files.
//!
//! A [`Profile`] is plain configuration data, so teams modeling several
//! builder flavors can keep the call surfaces next to their tests instead of
//! in code:
//!
//! ```yaml
//! handoff_call: getQuery
//! chain_calls:
//!   - select
//!   - where
//! terminal_calls:
//!   - execute
//! two_arg_terminals:
//!   - execute
//! ```

use std::fs;
use std::path::Path;

use crate::mocker::Profile;

/// Error type for profile loading issues.
#[derive(Debug, thiserror::Error)]
pub enum YamlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load a call-surface profile from a YAML file.
pub fn load_profile(path: &Path) -> Result<Profile, YamlError> {
    let content = fs::read_to_string(path)?;
    let profile: Profile = serde_yaml::from_str(&content)?;
    Ok(profile)
}
