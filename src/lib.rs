//! Bind a typed config struct to command-line flags, environment variables
//! and declared defaults in one call.
//!
//! Flagfig walks a config struct, derives a flag name and an env var name for
//! every leaf field, and fills each field from the highest-priority source
//! that has a value. Nested structs are walked recursively and their names
//! become part of the derived names.
//!
//! ```ignore
//! let mut config = AppConfig::default();
//! Flagfig::resolve(&mut config, "myapp")?;
//! ```
//!
//! That single call reads `MYAPP_*` environment variables, parses the
//! process arguments as `--flag value` pairs, applies declared defaults and
//! checks that every required field got a value.
//!
//! # Describing the struct
//!
//! The struct's schema is its [`Configure`] impl. It visits fields in
//! declaration order, handing each leaf to [`Walker::leaf`] together with its
//! [`Tags`] and each nested struct to [`Walker::nested`]:
//!
//! ```
//! use flagfig::{Configure, FlagfigError, Tags, Walker};
//!
//! #[derive(Default)]
//! struct AppConfig {
//!     port: u32,
//!     database: Database,
//! }
//!
//! #[derive(Default)]
//! struct Database {
//!     url: String,
//! }
//!
//! impl Configure for AppConfig {
//!     fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
//!         w.leaf("port", Tags::new().default("8080"), &mut self.port)?;
//!         w.nested("database", &mut self.database)
//!     }
//! }
//!
//! impl Configure for Database {
//!     fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
//!         w.leaf("url", Tags::new().required(), &mut self.url)
//!     }
//! }
//! ```
//!
//! Tags carry four optional keys:
//!
//! - **`default`**: the lowest-priority source string. Empty means none.
//! - **`required`**: resolution fails unless some source supplies a value.
//! - **`env`**: read this env var instead of the derived name.
//! - **`flag`**: register this flag instead of the derived name.
//!
//! # Derived names
//!
//! For a field at path `database.url` under app prefix `myapp`:
//!
//! ```text
//! flag     --database-url          path parts dash-joined, lowercased
//! env var  MYAPP_DATABASE_URL      prefix + path, underscore-joined, uppercased
//! ```
//!
//! Empty parts are skipped, so an empty prefix gives `DATABASE_URL`. Two
//! fields deriving the same flag or env name fail the pass with
//! [`FlagfigError::DuplicateName`].
//!
//! # Layer precedence
//!
//! ```text
//! Zero value            the type's default (0, "", false, empty list)
//!        ↑ overridden by
//! Tag default           Tags::default("...")
//!        ↑ overridden by
//! Environment var       MYAPP_DATABASE_URL=...   (empty counts as unset)
//!        ↑ overridden by
//! Flag                  --database-url ...
//! ```
//!
//! Every field ends up with exactly one of these. Whatever the field held
//! before the call is overwritten.
//!
//! # Supported types
//!
//! `i32`, `i64`, `u32`, `u64`, `f64`, `bool`, `String`,
//! [`std::time::Duration`] and `Vec<_>` of each. Sequences are written
//! comma-separated (`--ports 80,443`). Durations use the `1h2m3.5s` form.
//! Any other field type fails with [`FlagfigError::UnsupportedType`].
//!
//! Booleans accept `1 t T TRUE true True 0 f F FALSE false False`. For
//! compatibility with existing deployments any other string reads as
//! `false` (with a `warn` event) rather than an error. A bare `--name` sets
//! a boolean to `true`.
//!
//! # Errors
//!
//! The first failure aborts the pass and comes back as a [`FlagfigError`].
//! `--help` and unknown flags surface as [`FlagfigError::Cli`]; use
//! [`FlagfigError::is_display_request`] to tell the two apart, or call
//! `clap::Error::exit` on it.
//!
//! # Testing without the process environment
//!
//! [`FlagfigBuilder`] reads `std::env::args()` and `std::env::vars()` unless
//! told otherwise. [`args`](FlagfigBuilder::args) and
//! [`env_vars`](FlagfigBuilder::env_vars) replace them with synthetic data;
//! [`resolve()`] itself never does I/O.
//!
//! ```
//! # use flagfig::{Configure, Flagfig, FlagfigError, Source, Tags, Walker};
//! # #[derive(Default)]
//! # struct AppConfig { port: u32 }
//! # impl Configure for AppConfig {
//! #     fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
//! #         w.leaf("port", Tags::new().default("8080"), &mut self.port)
//! #     }
//! # }
//! let mut config = AppConfig::default();
//! let report = Flagfig::builder()
//!     .app_prefix("myapp")
//!     .args(["--port", "9000"])
//!     .env_vars([("MYAPP_PORT", "5000")])
//!     .resolve(&mut config)?;
//!
//! assert_eq!(config.port, 9000);
//! assert_eq!(report.get("port").unwrap().source, Source::Flag);
//! # Ok::<(), FlagfigError>(())
//! ```
//!
//! # Logging
//!
//! Flagfig emits [tracing](https://docs.rs/tracing) events (`debug` per
//! registered field and applied flag) and never installs a subscriber.

pub mod error;
pub mod types;

mod builder;
mod cli;
mod duration;
mod env;
mod names;
mod ops;
mod resolve;
mod setter;
mod walk;

#[cfg(test)]
mod fixtures;

pub use builder::{Flagfig, FlagfigBuilder};
pub use error::FlagfigError;
pub use ops::{Resolution, ResolvedField};
pub use resolve::{ResolveInput, resolve};
pub use setter::{Scalar, Setter, Setting, TypedSetter};
pub use types::{Source, Tags};
pub use walk::{Configure, IntoSlot, Slot, Walker};
