//! # vite-manifest-config
//!
//! Configuration for locating a Vite build manifest under a server's static
//! web root.
//!
//! Values are merged from defaults, an optional `.json`/`.toml` file and
//! `VITE_*` environment variables. Later sources win.

pub mod error;
pub mod loading;
pub mod options;
pub mod validation;

pub use error::*;
pub use options::*;
