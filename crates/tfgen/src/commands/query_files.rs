use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Query documents discovered under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct QueryFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_entries: usize,
    pub walk_errors: Vec<walkdir::Error>,
}

/// Finds all query documents recursively located at or under each of
/// `file_or_dir_paths` whose extension is one of `file_exts`.
///
/// A single file path argument is accepted even if its extension doesn't
/// match.
pub(crate) fn find_query_files(
    file_or_dir_paths: &[PathBuf],
    file_exts: &[String],
) -> QueryFiles {
    // Normalize the set of file extensions to filter with
    let file_exts: HashSet<String> =
        file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_owned())
            .collect();

    log::debug!("Scanning {} input paths...", file_or_dir_paths.len());
    let mut found = QueryFiles::default();
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }

                    log::trace!("Found file at {path:#?}.");
                    if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                        && file_exts.contains(&*ext) {
                        found.file_paths.push(canonicalize(path));
                    } else {
                        found.num_skipped_entries += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.walk_errors.push(e);
                },
            }
        }
    }

    if found.file_paths.is_empty()
        && file_or_dir_paths.len() == 1
        && let Some(first_arg_path) = file_or_dir_paths.first()
        && first_arg_path.is_file() {
        let first_arg_path = canonicalize(first_arg_path);
        log::warn!(
            "Proceeding with {first_arg_path:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped_entries = found.num_skipped_entries.saturating_sub(1);
        found.file_paths.push(first_arg_path);
    }

    log::debug!("Found {} query documents.", found.file_paths.len());
    found
}

fn canonicalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
