use crate::commands::find_query_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libtfgen::file_reader::read_content;
use libtfgen::generate_data_source;
use libtfgen::DataSourceEmitter;
use libtfgen::GeneratedDataSource;
use libtfgen::QueryParserConfig;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for query \
             documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value="internal/provider",
        help="Directory that generated `<query>_data_source.go` files are \
             written to. Created if it doesn't exist.",
        long,
        short='o',
    )]
    output_dir: PathBuf,

    #[arg(
        help="Print the generated sources instead of writing them to \
             --output-dir.",
        long,
    )]
    stdout: bool,

    #[arg(
        default_value_t=QueryParserConfig::DEFAULT_WRAPPER_DEPTH,
        help="Number of separators that the outermost wrapper blocks (e.g. \
             `edges` and `node`) contribute to each flattened field name.",
        long,
    )]
    wrapper_depth: usize,

    #[arg(
        default_value="gql",
        help="Paths to one or more query documents or directories \
             containing query documents.",
        name="FILE_OR_DIR_PATHS",
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl GenerateCmd {
    fn generate_one(
        &self,
        file_path: &Path,
        config: &QueryParserConfig,
        emitter: &DataSourceEmitter,
    ) -> anyhow::Result<GeneratedDataSource> {
        let document = read_content(file_path)?;
        let generated = generate_data_source(&document, config, emitter)?;
        log::debug!(
            "Generated `{}` from {file_path:#?}.",
            generated.file_name,
        );
        Ok(generated)
    }

    async fn write_output(
        &self,
        generated: &GeneratedDataSource,
    ) -> anyhow::Result<PathBuf> {
        let output_path = self.output_dir.join(&generated.file_name);
        tokio::fs::write(&output_path, &generated.source)
            .await
            .with_context(|| format!("failed to write {output_path:#?}"))?;
        log::info!("Content written to {output_path:#?}.");
        Ok(output_path)
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let emitter = match DataSourceEmitter::new() {
            Ok(emitter) => emitter,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };
        let config = QueryParserConfig {
            wrapper_depth: self.wrapper_depth,
        };

        let query_files =
            find_query_files(&self.file_or_dir_paths, &self.graphql_file_exts);
        let mut failures: Vec<String> =
            query_files.walk_errors
                .iter()
                .map(|e| format!("{e}"))
                .collect();

        if !self.stdout && !query_files.file_paths.is_empty()
            && let Err(e) = tokio::fs::create_dir_all(&self.output_dir).await {
            return CommandResult::stderr(format_args!(
                "{} Unable to create output directory {:#?}: {e}",
                output_utils::RED_X,
                self.output_dir,
            ));
        }

        // Each document is independent: a failure is reported and the rest of
        // the batch still runs.
        let mut outputs = vec![];
        let mut generated_by: HashMap<String, &Path> = HashMap::new();
        for file_path in &query_files.file_paths {
            let result = self.generate_one(file_path, &config, &emitter)
                .and_then(|generated| {
                    match generated_by.get(&generated.file_name) {
                        Some(first_path) => Err(anyhow::anyhow!(
                            "`{}` was already generated from {first_path:#?}",
                            generated.file_name,
                        )),
                        None => Ok(generated),
                    }
                });
            let result = match result {
                Ok(generated) => {
                    generated_by.insert(generated.file_name.clone(), file_path);
                    if self.stdout {
                        Ok(generated.source)
                    } else {
                        self.write_output(&generated)
                            .await
                            .map(|output_path| format!("{output_path:#?}"))
                    }
                },
                Err(e) => Err(e),
            };
            match result {
                Ok(output) => outputs.push(output),
                Err(e) => {
                    log::error!("Skipping {file_path:#?}: {e:#}");
                    failures.push(format!("{file_path:#?}: {e:#}"));
                },
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} of {} query documents could not be generated:\n{}",
                output_utils::RED_X,
                failures.len(),
                query_files.file_paths.len() + query_files.walk_errors.len(),
                failures.iter()
                    .map(|failure| format!("  * {failure}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        if self.stdout {
            return CommandResult::stdout(format_args!("{}", outputs.join("\n")));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All data sources generated successfully:\n",
                "  * Generated {} files in {:#?}.\n",
                "  * Skipped {} files with other extensions.",
            ),
            output_utils::GREEN_CHECK,
            outputs.len(),
            self.output_dir,
            query_files.num_skipped_entries,
        ))
    }
}
