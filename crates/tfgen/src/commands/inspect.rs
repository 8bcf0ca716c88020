use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libtfgen::file_reader::read_content;
use libtfgen::path_resolver::resolve_accessor_paths;
use libtfgen::QueryParser;
use libtfgen::QueryParserConfig;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[arg(
        default_value_t=QueryParserConfig::DEFAULT_WRAPPER_DEPTH,
        help="Number of separators that the outermost wrapper blocks (e.g. \
             `edges` and `node`) contribute to each flattened field name.",
        long,
    )]
    wrapper_depth: usize,

    #[arg(
        help="Path to the query document to inspect.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let document = match read_content(&self.file_path) {
            Ok(document) => document,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let parser = QueryParser::new(QueryParserConfig {
            wrapper_depth: self.wrapper_depth,
        });
        let parsed = match parser.parse(&document) {
            Ok(parsed) => parsed,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {:#?}: {e}",
                output_utils::RED_X,
                self.file_path,
            )),
        };
        let accessor_paths = resolve_accessor_paths(&parsed);

        let fields: Vec<serde_json::Value> =
            parsed.fields()
                .iter()
                .map(|field| serde_json::json!({
                    "flat_name": field.flat_name,
                    "graphql_type": field.scalar.graphql_name(),
                    "terraform_type": field.scalar.terraform_type(),
                }))
                .collect();
        let report = serde_json::json!({
            "struct_name": parsed.struct_name(),
            "fields": fields,
            "query": &parsed,
            "accessor_paths": accessor_paths,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Unable to serialize the inspection report: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
