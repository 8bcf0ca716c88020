//! Derives Terraform data source bindings from GraphQL query documents.
//!
//! The pipeline has three stages, run once per document:
//!
//! 1. [`QueryParser`] turns brace-delimited query text into a [`ParsedQuery`]:
//!    the operation name, the lookup shape and a flat list of uniquely named
//!    leaf [`Field`]s.
//! 2. [`path_resolver`] re-segments each flat field name into its path
//!    components (consulting the [`ExceptionSet`] of names that legitimately
//!    contain the separator) and renders an [`AccessorPath`] into the decoded
//!    query response.
//! 3. [`DataSourceEmitter`] renders Go source for a Terraform plugin-framework
//!    data source that binds every field to its accessor path.
//!
//! [`generate_data_source()`] runs all three stages.

mod accessor_path;
mod data_source_emitter;
mod exception_set;
pub mod file_reader;
mod generator;
mod parsed_query;
pub mod path_resolver;
mod query_parser;
mod scalar_type;

pub use accessor_path::AccessorPath;
pub use data_source_emitter::DataSourceEmitter;
pub use data_source_emitter::EmitError;
pub use exception_set::ExceptionSet;
pub use generator::generate_data_source;
pub use generator::GenerateError;
pub use generator::GeneratedDataSource;
pub use parsed_query::Field;
pub use parsed_query::LookupShape;
pub use parsed_query::ParsedQuery;
pub use query_parser::parse_query;
pub use query_parser::QueryParseError;
pub use query_parser::QueryParser;
pub use query_parser::QueryParserConfig;
pub use scalar_type::ScalarType;

/// The character that joins nesting levels in a flattened field name.
pub const SEPARATOR: char = '_';

#[cfg(test)]
mod tests;
