//! Where the island seed comes from.
//!
//! Native: `HEX_ISLAND_SEED=1234 hex-island`
//! Web: `index.html?seed=1234`
//!
//! A missing value gives the default island; an unparsable one is logged and
//! also falls back to the default.

use bevy::prelude::*;

use terrain::{IslandParams, ParamsError};

#[cfg(not(target_arch = "wasm32"))]
pub const SEED_ENV_VAR: &str = "HEX_ISLAND_SEED";

/// Resolve a raw seed override into params.
pub fn params_from_override(raw: Option<&str>) -> Result<IslandParams, ParamsError> {
    match raw {
        None => Ok(IslandParams::default()),
        Some(raw) => raw.parse(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn seed_override() -> Option<String> {
    std::env::var(SEED_ENV_VAR).ok()
}

/// Returns `Some(seed)` if `?seed=...` is present in the browser URL.
#[cfg(target_arch = "wasm32")]
fn seed_override() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("seed")
}

/// Inserts the [`IslandParams`] for this run. Add after `DefaultPlugins` so
/// the log subscriber is already installed.
pub struct IslandParamsPlugin;

impl Plugin for IslandParamsPlugin {
    fn build(&self, app: &mut App) {
        let params = match params_from_override(seed_override().as_deref()) {
            Ok(params) => params,
            Err(err) => {
                warn!("Ignoring seed override: {err}; using the default island");
                IslandParams::default()
            }
        };
        app.insert_resource(params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_override_is_default() {
        assert_eq!(params_from_override(None), Ok(IslandParams::default()));
    }

    #[test]
    fn test_numeric_override() {
        assert_eq!(
            params_from_override(Some(" 1234 ")),
            Ok(IslandParams::from_seed(1234))
        );
    }

    #[test]
    fn test_bad_override_is_error() {
        assert!(params_from_override(Some("forty-two")).is_err());
        assert_eq!(params_from_override(Some("  ")), Err(ParamsError::Empty));
    }
}
