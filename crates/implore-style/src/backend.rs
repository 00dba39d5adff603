//! Interactive runtime detection
//!
//! Notebook kernels need the `nbAgg` backend for inline interactive figures.
//! Detection happens once, when a session is created.

pub const BACKEND_KEY: &str = "backend";
pub const NOTEBOOK_BACKEND: &str = "nbAgg";

/// Variables a Jupyter server exports into its kernels
const NOTEBOOK_ENV_MARKERS: &[&str] = &["JPY_PARENT_PID", "JPY_SESSION_NAME"];

/// Where the session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Runtime {
    #[default]
    Terminal,
    Notebook,
}

impl Runtime {
    /// Inspect the process environment.
    pub fn detect() -> Self {
        Self::detect_with(|name| std::env::var_os(name).is_some())
    }

    /// Detect using a custom variable lookup.
    pub fn detect_with<F>(is_set: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        if NOTEBOOK_ENV_MARKERS.iter().any(|name| is_set(name)) {
            Self::Notebook
        } else {
            Self::Terminal
        }
    }

    /// Backend to force, if any
    pub fn backend(&self) -> Option<&'static str> {
        match self {
            Self::Notebook => Some(NOTEBOOK_BACKEND),
            Self::Terminal => None,
        }
    }
}
