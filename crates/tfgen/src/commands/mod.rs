mod generate;
mod inspect;
mod query_files;

pub(crate) use query_files::find_query_files;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use inspect::InspectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "tfgen")]
pub(crate) enum CommandEnum {
    /// Generate one Terraform data source per query document.
    Generate(Box<GenerateCmd>),

    /// Print the parsed fields and accessor paths of one query document.
    Inspect(Box<InspectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Inspect(cmd) => cmd.run(cli).await,
        }
    }
}
