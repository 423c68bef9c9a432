//! Hexport - public API header exporter for C kernel trees
//!
//! Hexport is a CLI tool and library for extracting the author-marked public
//! API surface from a tree of internal C header files. It scans headers for
//! exported regions, strips internal-only content, rewrites linkage keywords
//! for external consumption, and emits a sanitized header tree plus a single
//! umbrella header wrapping everything in include guards and `extern "C"`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `engine`: Line-oriented extraction engine (classifier, region tracker, transformer)
//! - `exporter`: Directory walking, output writing and umbrella assembly
//! - `strategy`: Extraction strategy selection (single keyword vs block markers)

pub mod cli;
pub mod config;
pub mod engine;
pub mod exporter;
pub mod strategy;
