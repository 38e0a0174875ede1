use crate::commands::{
    run_address_check, run_eligibility_check, run_zip_lookup, AddressArgs, EligibilityArgs,
    ZipArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use insurance_market::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Insurance Marketplace Intake",
    about = "Serve and exercise applicant intake validation from the command line",
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
    /// Look up city, state, and county for a ZIP code
    Zip(ZipArgs),
    /// Validate a mailing address against the verification provider
    Address(AddressArgs),
    /// Evaluate an eligibility questionnaire document offline
    Eligibility(EligibilityArgs),
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
        Command::Zip(args) => run_zip_lookup(args).await,
        Command::Address(args) => run_address_check(args).await,
        Command::Eligibility(args) => run_eligibility_check(args),
    }
}
