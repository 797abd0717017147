//! Runtime configuration from CLI flags and environment overrides.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::commit::DEFAULT_DETAIL_LIMIT;

/// Environment variable overriding the per-category detail limit.
pub const DETAIL_LIMIT_ENV_VAR: &str = "QUICKCOMMIT_DETAIL_LIMIT";

/// Environment variable naming the remote to push to.
pub const REMOTE_ENV_VAR: &str = "QUICKCOMMIT_REMOTE";

/// Configuration for the commit workflow, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct CommitConfig {
    /// Working-tree root.
    pub root: PathBuf,
    pub dry_run: bool,
    /// Categories with at most this many files list per-file descriptions.
    pub detail_limit: usize,
    /// Remote for `git push -u <remote> HEAD`; `None` means plain `git push`.
    pub remote: Option<String>,
}

impl CommitConfig {
    /// Build a config from flags, filling the rest from the environment.
    pub fn from_env(root: PathBuf, dry_run: bool) -> Self {
        Self {
            root,
            dry_run,
            detail_limit: detail_limit_from_env(),
            remote: remote_from_env(),
        }
    }
}

/// Read the detail limit from `QUICKCOMMIT_DETAIL_LIMIT`.
///
/// Logs a warning and uses the default if the variable is set but not a
/// non-negative integer.
fn detail_limit_from_env() -> usize {
    match env::var(DETAIL_LIMIT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<usize>() {
            Ok(limit) => limit,
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}",
                    DETAIL_LIMIT_ENV_VAR, v, DEFAULT_DETAIL_LIMIT
                );
                DEFAULT_DETAIL_LIMIT
            }
        },
        _ => DEFAULT_DETAIL_LIMIT,
    }
}

fn remote_from_env() -> Option<String> {
    env::var(REMOTE_ENV_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_limit_default() {
        temp_env::with_var_unset(DETAIL_LIMIT_ENV_VAR, || {
            assert_eq!(detail_limit_from_env(), DEFAULT_DETAIL_LIMIT);
        });
    }

    #[test]
    fn test_detail_limit_from_env() {
        temp_env::with_var(DETAIL_LIMIT_ENV_VAR, Some("5"), || {
            assert_eq!(detail_limit_from_env(), 5);
        });
    }

    #[test]
    fn test_detail_limit_invalid_uses_default() {
        temp_env::with_var(DETAIL_LIMIT_ENV_VAR, Some("lots"), || {
            assert_eq!(detail_limit_from_env(), DEFAULT_DETAIL_LIMIT);
        });
    }

    #[test]
    fn test_detail_limit_negative_uses_default() {
        temp_env::with_var(DETAIL_LIMIT_ENV_VAR, Some("-1"), || {
            assert_eq!(detail_limit_from_env(), DEFAULT_DETAIL_LIMIT);
        });
    }

    #[test]
    fn test_remote_unset_and_blank() {
        temp_env::with_var_unset(REMOTE_ENV_VAR, || {
            assert_eq!(remote_from_env(), None);
        });
        temp_env::with_var(REMOTE_ENV_VAR, Some("   "), || {
            assert_eq!(remote_from_env(), None);
        });
    }

    #[test]
    fn test_from_env_reads_remote() {
        temp_env::with_vars(
            [(REMOTE_ENV_VAR, Some("origin")), (DETAIL_LIMIT_ENV_VAR, None)],
            || {
                let config = CommitConfig::from_env(PathBuf::from("."), true);
                assert_eq!(config.remote.as_deref(), Some("origin"));
                assert_eq!(config.detail_limit, DEFAULT_DETAIL_LIMIT);
                assert!(config.dry_run);
            },
        );
    }
}
