//! Environment variable expansion for configuration strings.

use std::cell::RefCell;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references.
///
/// Unset variables without a default are an error. Bare `$VAR` is left
/// untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let missing = RefCell::new(Vec::new());
    let expanded = shellexpand::env_with_context(value, |var| -> Result<Option<String>, std::env::VarError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(std::env::VarError::NotPresent) => {
                missing.borrow_mut().push(var.to_owned());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}}: {}", e.var_name, e.cause),
    })?
    .into_owned();

    let unresolved = missing
        .into_inner()
        .into_iter()
        .find(|var| expanded.contains(&format!("${{{var}}}")));
    if let Some(var) = unresolved {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{var}}} not set"),
        });
    }

    Ok(expanded)
}
