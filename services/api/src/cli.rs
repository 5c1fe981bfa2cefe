use crate::commands::{
    run_faq_browse, run_faq_search, run_leads, run_providers, FaqBrowseArgs, FaqSearchArgs,
    LeadArgs, ProviderArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use estate_hub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Estate Hub",
    about = "Serve and query the marketplace provider, FAQ, and partner lead catalogs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List service providers by category, text, and sort order
    Providers(ProviderArgs),
    /// Browse or search the FAQ knowledge base as a given role
    Faq {
        #[command(subcommand)]
        command: FaqCommand,
    },
    /// List partner leads and the pipeline summary
    Leads(LeadArgs),
}

#[derive(Subcommand, Debug)]
enum FaqCommand {
    /// Rank entries by keyword relevance
    Search(FaqSearchArgs),
    /// Print the categories and entries visible to a role
    Browse(FaqBrowseArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Providers(args) => run_providers(args),
        Command::Faq {
            command: FaqCommand::Search(args),
        } => run_faq_search(args),
        Command::Faq {
            command: FaqCommand::Browse(args),
        } => run_faq_browse(args),
        Command::Leads(args) => run_leads(args),
    }
}
