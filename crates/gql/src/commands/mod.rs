mod execute;
mod validate;

use crate::Cli;
use crate::CommandResult;
use execute::ExecuteCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gql")]
pub(crate) enum CommandEnum {
    /// Execute one operation against a JSON root value.
    Execute(Box<ExecuteCmd>),

    /// Build a schema and validate documents against it.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Execute(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
