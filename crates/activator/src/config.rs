//! Activator configuration.
//!
//! # Environment
//!
//! - `ACTIVATOR_DYNAMIC_CODE`: `0`, `false`, `off` or `no` disables factory
//!   synthesis; `1`, `true`, `on` or `yes` enables it. Defaults to enabled.
//! - `ACTIVATOR_CACHE_CAPACITY`: number of factory slots to preallocate.

use act_compile::CodegenCapability;

/// Environment variable toggling factory synthesis.
pub const DYNAMIC_CODE_ENV: &str = "ACTIVATOR_DYNAMIC_CODE";

/// Environment variable sizing the factory cache up front.
pub const CACHE_CAPACITY_ENV: &str = "ACTIVATOR_CACHE_CAPACITY";

/// Settings for an [`Activator`](crate::Activator).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActivatorConfig {
    /// Whether per-type factories may be synthesized. When false every
    /// construction goes through the host's reflective primitive.
    pub dynamic_code: bool,
    /// Factory slots to preallocate in the cache.
    pub initial_capacity: usize,
}

impl Default for ActivatorConfig {
    fn default() -> Self {
        ActivatorConfig {
            dynamic_code: true,
            initial_capacity: 0,
        }
    }
}

impl ActivatorConfig {
    /// Read settings from the process environment, keeping defaults for
    /// unset or unparseable variables.
    pub fn from_env() -> Self {
        let dynamic_code = std::env::var(DYNAMIC_CODE_ENV).ok();
        let capacity = std::env::var(CACHE_CAPACITY_ENV).ok();
        Self::from_vars(dynamic_code.as_deref(), capacity.as_deref())
    }

    /// Build settings from raw variable values.
    pub fn from_vars(dynamic_code: Option<&str>, capacity: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = dynamic_code {
            match parse_flag(raw) {
                Some(enabled) => config.dynamic_code = enabled,
                None => tracing::debug!(value = raw, "ignoring unrecognized {DYNAMIC_CODE_ENV}"),
            }
        }

        if let Some(raw) = capacity {
            match raw.trim().parse() {
                Ok(capacity) => config.initial_capacity = capacity,
                Err(_) => tracing::debug!(value = raw, "ignoring unparseable {CACHE_CAPACITY_ENV}"),
            }
        }

        config
    }

    #[must_use]
    pub fn with_dynamic_code(mut self, enabled: bool) -> Self {
        self.dynamic_code = enabled;
        self
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    #[inline]
    pub fn capability(&self) -> CodegenCapability {
        CodegenCapability::from_flag(self.dynamic_code)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
