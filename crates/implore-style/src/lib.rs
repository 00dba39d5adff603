//! implore-style - Publication-style plotting defaults
//!
//! This crate builds the rc-style registry that implore hands to its plotting
//! backends. Creating a [`StyleSession`] applies a curated base preset tuned
//! for compact journal figures; the session then switches between a few named
//! presets.
//!
//! # Key Components
//!
//! - **StyleRegistry**: dotted-key store of rendering defaults
//! - **StyleSession**: owns the registry and its single snapshot slot
//! - **PropCycle**: color/dash/marker cycle assigned to successive series
//! - **StyleConfig**: TOML/JSON preset selection with raw overrides
//!
//! # Presets
//!
//! - Line styles: `color`, `bw` (black with dash patterns), `both`
//! - Figure sizes: `normal` (175 mm) and `small` (85 mm)
//! - Figure styles: `paper` (9 pt) and `presentation` (16 pt by default)
//!
//! ```
//! use implore_style::StyleSession;
//!
//! let mut session = StyleSession::new();
//! session.set_line_marker_style("bw", false).unwrap();
//! session.set_figure_size("small", None).unwrap();
//! assert_eq!(session.registry().get_f64("font.size"), Some(9.0));
//! ```

pub mod backend;
pub mod config;
pub mod cycle;
pub mod error;
pub mod preset;
pub mod registry;
pub mod session;
pub mod style;
pub mod value;

pub use backend::*;
pub use config::*;
pub use cycle::*;
pub use error::*;
pub use preset::*;
pub use registry::*;
pub use session::*;
pub use style::*;
pub use value::*;
