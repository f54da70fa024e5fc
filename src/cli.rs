//! Command-line interface definitions.
//!
//! The parsed flags are turned into an immutable [`Action`] before any
//! exchange call is made.

use clap::{ArgGroup, Parser};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::logging::DEFAULT_LOG_FILE;
use crate::models::{Currency, Environment, FundingMethod, ProductId};
use crate::workflow::{Action, BuyRequest, DepositRequest};
use crate::{Error, Result};

/// Deposit fiat into Coinbase Pro, or market-buy a pair with it.
///
/// Example: cbpro-recurring-buy --amount=100 --buy --cryptocurrency=BTC-USD
#[derive(Parser, Debug)]
#[command(name = "cbpro-recurring-buy")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("action").required(true).args(["deposit", "buy"])))]
pub struct Cli {
    /// Amount to deposit or buy (in fiat)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub amount: u64,

    /// Fiat currency to use
    #[arg(long = "fiat_currency", default_value = "USD")]
    pub fiat_currency: Currency,

    /// Pair to buy, e.g. BTC-USD (only fiat-quoted pairs)
    #[arg(long)]
    pub cryptocurrency: Option<ProductId>,

    /// Payment method to deposit from
    #[arg(long = "funding_method", value_enum)]
    pub funding_method: Option<FundingMethod>,

    /// Deposit the amount into the trading wallet
    #[arg(long, requires = "funding_method")]
    pub deposit: bool,

    /// Buy the pair, spending the amount
    #[arg(long, requires = "cryptocurrency")]
    pub buy: bool,

    /// Log debug output to stdout instead of the log file
    #[arg(long)]
    pub debug: bool,

    /// Use the Coinbase Pro sandbox
    #[arg(long)]
    pub sandbox: bool,

    /// TOML file with api_key, api_secret and api_passphrase
    /// (defaults to the CBPRO_API_* environment variables)
    #[arg(long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Log file used when --debug is not given
    #[arg(long = "log_file", value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Cli {
    /// The action requested on the command line.
    pub fn action(&self) -> Result<Action> {
        let amount = Decimal::from(self.amount);
        let currency = self.fiat_currency.clone();

        if self.deposit {
            let funding_method = self.funding_method.ok_or_else(|| {
                Error::Configuration("--deposit requires --funding_method".to_string())
            })?;
            return Ok(Action::Deposit(DepositRequest::new(
                amount,
                currency,
                funding_method,
            )?));
        }

        if self.buy {
            let product_id = self.cryptocurrency.clone().ok_or_else(|| {
                Error::Configuration("--buy requires --cryptocurrency".to_string())
            })?;
            return Ok(Action::Buy(BuyRequest::new(product_id, amount, currency)?));
        }

        Err(Error::Configuration(
            "one of --deposit or --buy is required".to_string(),
        ))
    }

    /// The API environment to talk to.
    pub fn environment(&self) -> Environment {
        if self.sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("cbpro-recurring-buy").chain(args.iter().copied()))
    }

    #[test]
    fn test_buy_action() {
        let cli = parse(&["--amount=100", "--buy", "--cryptocurrency=BTC-USD"]).unwrap();
        let action = cli.action().unwrap();
        assert_eq!(
            action,
            Action::Buy(BuyRequest {
                product_id: ProductId::new("BTC-USD").unwrap(),
                amount: dec!(100),
                currency: Currency::new("USD").unwrap(),
            })
        );
        assert_eq!(cli.environment(), Environment::Production);
        assert_eq!(cli.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_deposit_action() {
        let cli = parse(&[
            "--amount",
            "50",
            "--deposit",
            "--funding_method",
            "ach_bank_account",
            "--fiat_currency",
            "eur",
            "--sandbox",
        ])
        .unwrap();

        match cli.action().unwrap() {
            Action::Deposit(request) => {
                assert_eq!(request.amount, dec!(50));
                assert_eq!(request.currency.as_str(), "EUR");
                assert_eq!(request.funding_method, FundingMethod::AchBankAccount);
            }
            other => panic!("Expected deposit, got {:?}", other),
        }
        assert_eq!(cli.environment(), Environment::Sandbox);
    }

    #[test]
    fn test_log_file_flag() {
        let cli = parse(&[
            "--amount=10",
            "--buy",
            "--cryptocurrency=BTC-USD",
            "--log_file=/tmp/cbpro/buy.log",
        ])
        .unwrap();
        assert_eq!(cli.log_file, PathBuf::from("/tmp/cbpro/buy.log"));

        assert!(parse(&[
            "--amount=10",
            "--buy",
            "--cryptocurrency=BTC-USD",
            "--log-file=buy.log",
        ])
        .is_err());
    }

    #[test]
    fn test_exactly_one_action_required() {
        assert!(parse(&["--amount=10"]).is_err());
        assert!(parse(&[
            "--amount=10",
            "--buy",
            "--deposit",
            "--cryptocurrency=BTC-USD",
            "--funding_method=ach_bank_account",
        ])
        .is_err());
    }

    #[test]
    fn test_flag_requirements() {
        assert!(parse(&["--amount=10", "--deposit"]).is_err());
        assert!(parse(&["--amount=10", "--buy"]).is_err());
        assert!(parse(&["--amount=0", "--buy", "--cryptocurrency=BTC-USD"]).is_err());
        assert!(parse(&["--amount=10", "--buy", "--cryptocurrency=BTCUSD"]).is_err());
        assert!(parse(&[
            "--amount=10",
            "--deposit",
            "--funding_method=credit_card"
        ])
        .is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
