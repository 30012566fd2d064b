//! # dirdex
//!
//! A static index generator for content directories. Point it at a
//! directory of arbitrary assets and it writes an `index.html` listing
//! every file with its last-modified date — so the directory can be
//! browsed on any dumb file server, no server-side listing required.
//!
//! dirdex is a build step, not a service: one synchronous pass per run,
//! safe to re-run (the previous `index.html` is overwritten, never
//! listed), and deterministic (same tree in, same bytes out).
//!
//! # Pipeline
//!
//! ```text
//! list      contents/  →  Vec<Entry>     (filesystem → ordered listing)
//! render    listing    →  Markup         (Maud → full HTML document)
//! write     markup     →  index.html     (create-or-truncate, in place)
//! ```
//!
//! Each stage is a pure function over its inputs apart from the
//! filesystem effects it performs; no stage depends on another's
//! internal state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`list`] | Enumerates the content directory into an ordered listing |
//! | [`render`] | Renders a listing into the index page with Maud |
//! | [`write`] | Persists rendered bytes to the reserved output name |
//! | [`generate`] | Wires the three stages together for one run |
//! | [`config`] | Optional `dirdex.toml` loading and stock defaults |
//! | [`output`] | CLI display formatting — pure functions over results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The index page is generated with [Maud](https://maud.lambda.xyz/),
//! a compile-time HTML macro, rather than a runtime template file.
//! Malformed markup is a build error, file names are auto-escaped, and
//! there is no template to ship next to the binary or get out of sync.
//!
//! ## Deterministic Listing Order
//!
//! Directory enumeration order is unspecified on every platform, so the
//! lister sorts entries by name. Combined with UTC date rendering this
//! makes output byte-identical across runs and across build machines.
//!
//! ## Explicit Content Location
//!
//! The content directory is configuration (`--source` flag or `source`
//! in `dirdex.toml`), never derived from the binary's install path.
//! Where the tool lives says nothing about where the content lives.

pub mod config;
pub mod generate;
pub mod list;
pub mod output;
pub mod render;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
