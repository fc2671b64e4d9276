/* src/lib.rs */

//!
//! Read and write configuration structs as JSON, YAML or TOML through one interface.
//!
//! This crate integrates two components:
//!
//! - **encoding**: The [`Encoding`] strategy trait with [`Decoder`] / [`Encoder`]
//!   handles, implemented by `Json`, `Yaml` and `Toml`, plus the runtime
//!   selectable `AnyEncoding` and its `JSON`, `YAML`, `TOML` constants.
//! - **binder**: [`Configer`], which binds a `&mut T` to one encoding and reads
//!   or writes it through any `Read` / `Write`, or a file path.
//!
//! ## Feature Flags
//!
//! - `full` (default): Enables all features.
//! - `json`, `yaml`, `toml`: Enables the matching encoding.
//! - `logging`: Emits `log` records for file operations.
//!
//! ## Basic Usage
//!
//! ```rust,ignore
//! use configer::{Configer, TOML};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Deserialize, Serialize)]
//! struct AppConfig {
//!     name: String,
//!     port: u16,
//! }
//!
//! let mut config = AppConfig::default();
//! let mut configer = Configer::new(&mut config, TOML);
//! configer.read("name = \"demo\"\nport = 8080\n".as_bytes())?;
//! configer.write_to_file("app.toml")?;
//! ```
//!
//! See `demos/basic.rs` for a complete example.

pub mod binder;
pub mod encoding;
pub mod error;

pub use binder::Configer;
pub use encoding::{Decoder, Encoder, Encoding};
pub use error::{BoxError, ConfigError, Result};

#[cfg(any(feature = "json", feature = "toml", feature = "yaml"))]
pub use encoding::AnyEncoding;

#[cfg(feature = "json")]
pub use encoding::{JSON, Json};

#[cfg(feature = "toml")]
pub use encoding::{TOML, Toml};

#[cfg(feature = "yaml")]
pub use encoding::{YAML, Yaml};
