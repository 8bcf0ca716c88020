use crate::DataSourceEmitter;
use crate::EmitError;
use crate::QueryParseError;
use crate::QueryParser;
use crate::QueryParserConfig;
use crate::path_resolver;

type Result<T> = std::result::Result<T, GenerateError>;

/// One rendered data source, ready to be written out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedDataSource {
    pub operation_name: String,
    /// `<operation_name>_data_source.go`
    pub file_name: String,
    pub source: String,
}

/// Runs the whole pipeline (parse, resolve, emit) over one query document.
pub fn generate_data_source(
    document: &str,
    config: &QueryParserConfig,
    emitter: &DataSourceEmitter,
) -> Result<GeneratedDataSource> {
    let parsed = QueryParser::new(config.clone()).parse(document)?;
    let paths = path_resolver::resolve_accessor_paths(&parsed);
    let source = emitter.emit(&parsed, &paths)?;

    let operation_name = parsed.operation_name().to_string();
    Ok(GeneratedDataSource {
        file_name: format!("{operation_name}_data_source.go"),
        operation_name,
        source,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Parse(#[from] QueryParseError),
}
