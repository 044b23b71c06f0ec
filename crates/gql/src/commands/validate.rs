use crate::Cli;
use crate::command_result::GREEN_CHECK;
use crate::command_result::RED_X;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::file_discovery;
use libgql::operation::Document;
use libgql::operation::DocumentBuildError;
use libgql::schema::Schema;
use libgql::validation::ValidationOptions;
use libgql::validation::Validator;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=file_discovery::DEFAULT_GRAPHQL_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Stop reporting validation errors for a document after this \
             many.",
        long,
    )]
    max_validation_errors: Option<usize>,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL documents or directories \
             containing documents which need to be validated against the \
             schema.",
        name="DOCUMENT_PATHS",
    )]
    document_paths: Vec<PathBuf>,
}

/// What happened to one document.
enum DocumentOutcome {
    Valid { num_operations: usize },
    Invalid(String),
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (schema, num_schema_files) =
            match file_discovery::load_schema(&self.schema, &self.graphql_file_exts) {
                Ok(loaded) => loaded,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Errors validating schema: {e:#}",
                    RED_X,
                )),
            };
        log::debug!("Built schema with {} types.", schema.types().len());

        let documents = if self.document_paths.is_empty() {
            file_discovery::DiscoveredFiles::default()
        } else {
            match file_discovery::find_graphql_files(
                &self.document_paths,
                &self.graphql_file_exts,
            ) {
                Ok(found) => found,
                Err(e) => return CommandResult::from_error(e),
            }
        };

        let validator = Validator::with_options(ValidationOptions {
            max_errors: self.max_validation_errors,
            ..ValidationOptions::default()
        });
        let mut failures: Vec<String> = vec![];
        let mut num_operations = 0;
        for file_path in &documents.file_paths {
            match validate_document(&validator, &schema, file_path) {
                Ok(DocumentOutcome::Valid { num_operations: n }) => num_operations += n,
                Ok(DocumentOutcome::Invalid(report)) => failures.push(report),
                Err(e) => failures.push(format!("{}: {e:#}", file_path.display())),
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} of {} documents failed validation:\n\n{}",
                RED_X,
                failures.len(),
                documents.file_paths.len(),
                failures.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} schema files.\n",
                "  * Analyzed {} documents.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Validated {} operations.",
            ),
            GREEN_CHECK,
            num_schema_files,
            documents.file_paths.len(),
            documents.num_skipped,
            schema.types().values().filter(|ty| !ty.is_builtin()).count(),
            schema.directives().values().filter(|dir| !dir.is_builtin()).count(),
            num_operations,
        ))
    }
}

fn validate_document(
    validator: &Validator,
    schema: &Schema,
    file_path: &Path,
) -> anyhow::Result<DocumentOutcome> {
    let source = std::fs::read_to_string(file_path)?;
    let document = match Document::parse(&source, Some(file_path)) {
        Ok(document) => document,
        Err(DocumentBuildError::Parse(parse_err)) => return Ok(DocumentOutcome::Invalid(
            parse_err.format_detailed(Some(&source)),
        )),
        Err(e) => return Ok(DocumentOutcome::Invalid(
            format!("{}: {e}", file_path.display()),
        )),
    };

    let errors = validator.validate(&document, schema);
    log::debug!("{} validation errors in {file_path:#?}.", errors.len());
    if errors.is_empty() {
        return Ok(DocumentOutcome::Valid {
            num_operations: document.operations().len(),
        });
    }
    let rendered: Vec<String> = errors.iter().map(|err| err.render(&source)).collect();
    Ok(DocumentOutcome::Invalid(format!(
        "{}:\n{}",
        file_path.display(),
        rendered.join("\n"),
    )))
}
