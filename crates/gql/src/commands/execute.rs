use crate::Cli;
use crate::command_result::RED_X;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::file_discovery;
use anyhow::Context;
use libgql::execution::ExecutionRequest;
use libgql::operation::Document;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[arg(
        help="Path to the GraphQL document containing the operation to run.",
        long,
    )]
    document: PathBuf,

    #[arg(
        help="Name of the operation to run. Required when the document \
             contains more than one.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Path to a JSON file whose contents become the root value. \
             Defaults to `{}`.",
        long,
    )]
    root_value: Option<PathBuf>,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Variable values as a JSON object.",
        long,
    )]
    variables: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.execute().await {
            Ok(result) => result,
            Err(e) => CommandResult::from_error(e),
        }
    }
}

impl ExecuteCmd {
    async fn execute(&self) -> anyhow::Result<CommandResult> {
        let exts = file_discovery::DEFAULT_GRAPHQL_FILE_EXTS.map(String::from);
        let (schema, _) = file_discovery::load_schema(&self.schema, &exts)
            .context("Failed to build the schema")?;

        let source = std::fs::read_to_string(&self.document)
            .with_context(|| format!("Failed to read {}", self.document.display()))?;
        let document = Document::parse(&source, Some(self.document.as_path()))
            .with_context(|| format!("Failed to parse {}", self.document.display()))?;

        let errors = libgql::validate(&document, &schema);
        if !errors.is_empty() {
            let rendered: Vec<String> = errors.iter().map(|err| err.render(&source)).collect();
            return Ok(CommandResult::stderr(format_args!(
                "{} The document failed validation:\n{}",
                RED_X,
                rendered.join("\n"),
            )));
        }

        let variables: JsonMap<String, JsonValue> = match &self.variables {
            Some(raw) => serde_json::from_str(raw)
                .context("`--variables` must be a JSON object")?,
            None => JsonMap::new(),
        };
        let root_value: JsonValue = match &self.root_value {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("{} is not valid JSON", path.display()))?
            },
            None => JsonValue::Object(JsonMap::new()),
        };

        let mut request = ExecutionRequest::new(Arc::new(schema), Arc::new(document))
            .with_root_value(root_value)
            .with_variables(variables);
        if let Some(operation_name) = &self.operation_name {
            request = request.with_operation_name(operation_name.as_str());
        }

        match libgql::execute(request).await {
            Ok(response) => {
                let body = serde_json::to_string_pretty(&response)?;
                if response.is_ok() {
                    Ok(CommandResult::stdout(format_args!("{body}")))
                } else {
                    log::debug!("Execution finished with {} errors.", response.errors.len());
                    Ok(CommandResult::stdout_failure(format_args!("{body}")))
                }
            },
            Err(request_err) => {
                let body = serde_json::to_string_pretty(
                    &serde_json::json!({ "errors": request_err.errors() }),
                )?;
                Ok(CommandResult::stdout_failure(format_args!("{body}")))
            },
        }
    }
}
