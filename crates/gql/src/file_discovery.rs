use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const DEFAULT_GRAPHQL_FILE_EXTS: [&str; 3] = ["graphql", "graphqls", "gql"];

/// The files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Recursively finds every file at or under `paths` whose extension is in
/// `exts`.
///
/// A lone file argument is kept even if its extension doesn't match, since
/// the user named it explicitly.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    exts: &[String],
) -> anyhow::Result<DiscoveredFiles> {
    let exts: HashSet<&str> =
        exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = DiscoveredFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = entry.map_err(|e| {
                anyhow::anyhow!("Failed to read files at/under {}: {e}", path.display())
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if has_ext(entry_path, &exts) {
                log::trace!("Found file at {entry_path:#?}.");
                found.file_paths.push(std::fs::canonicalize(entry_path)?);
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        let canonicalized = std::fs::canonicalize(first_arg_path)?;
        log::warn!(
            "Proceeding with {canonicalized:#?} even though it doesn't match \
            any of the GraphQL file extensions ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.file_paths.push(canonicalized);
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    Ok(found)
}

fn has_ext(path: &Path, exts: &HashSet<&str>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| exts.contains(&*ext))
}

/// Builds a schema from every GraphQL file at or under `schema_paths`. Each
/// file is loaded on its own so errors keep their file path.
pub(crate) fn load_schema(
    schema_paths: &[PathBuf],
    exts: &[String],
) -> anyhow::Result<(libgql::schema::Schema, usize)> {
    let found = find_graphql_files(schema_paths, exts)?;
    if found.file_paths.is_empty() {
        anyhow::bail!("No schema files found.");
    }
    let mut defs = libgql::schema::SchemaDefinitions::new()?;
    for file_path in &found.file_paths {
        let src = std::fs::read_to_string(file_path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file_path.display()))?;
        defs.load_str(Some(file_path.as_path()), &src)?;
    }
    Ok((defs.build()?, found.file_paths.len()))
}
