use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use cbpro_recurring_buy::cli::Cli;
use cbpro_recurring_buy::workflow::Outcome;
use cbpro_recurring_buy::{logging, CoinbaseProClient, Credentials, Result, SettlementPolicy};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let _guard = match logging::init(cli.debug, &cli.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("cbpro-recurring-buy: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(&cli).await {
        Ok(outcome) => {
            info!("Done: {}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(kind = e.kind(), "{}", e);
            eprintln!("cbpro-recurring-buy: {}", e.summary());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<Outcome> {
    let action = cli.action()?;
    let credentials = Credentials::load(cli.credentials.as_deref())?;
    let client = CoinbaseProClient::new(credentials, cli.environment())?;
    info!("Using Coinbase Pro {} API", client.environment());

    action.run(&client, &SettlementPolicy::default()).await
}
