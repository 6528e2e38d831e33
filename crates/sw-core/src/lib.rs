//! sw-core - Core library for sqlweave
//!
//! This crate holds the configuration side of the rewriter: keyword
//! replacement rules, the hand-declared table relationship graph, and the
//! loading and validation that turns both documents into an immutable
//! [`ConfigModel`].

pub mod config;
pub mod error;
pub mod keyword_key;
mod newtype_string;
pub mod relation;
pub mod replace;
pub mod table_name;
pub mod template;

pub use config::{ConfigFormat, ConfigModel, ConfigSource};
pub use error::{CoreError, CoreResult};
pub use keyword_key::KeywordKey;
pub use relation::{BaseRelation, Edge, RelationshipGraph};
pub use replace::{ReplacementConfig, ReplacementRule};
pub use table_name::{canonicalize, TableName};
pub use template::substitute;
