use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payflow::application::service::PaymentService;
use payflow::config::Config;
use payflow::domain::payment::create_payment;
use payflow::domain::policy::{BoundedPolicy, DefaultPolicy, PolicyBox, ValidatePayment};
use payflow::interfaces::csv::payment_reader::PaymentReader;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (kind,amount). Runs the built-in
    /// demonstration sequence when omitted.
    input: Option<PathBuf>,

    /// Upper amount limit (optional). If provided, payments are validated
    /// with the bounded policy instead of the default one.
    #[arg(long)]
    limit: Option<Decimal>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(false)
        .init();

    let config = Config::default();
    info!(environment = %config.environment(), "payflow starting");

    match cli.input {
        Some(input) => {
            // Pick the validation policy for the whole batch
            let policy: PolicyBox = match cli.limit {
                Some(limit) => Box::new(BoundedPolicy::new(limit)),
                None => Box::new(DefaultPolicy),
            };
            run_batch(input, PaymentService::new(policy))
        }
        None => run_demo(),
    }
}

fn run_batch<V: ValidatePayment>(input: PathBuf, service: PaymentService<V>) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    let mut accepted = 0usize;
    let mut rejected = 0usize;
    for payment in reader.payments() {
        match payment {
            Ok(payment) => {
                if service.execute(&payment) {
                    accepted += 1;
                } else {
                    rejected += 1;
                }
            }
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
            }
        }
    }

    info!(accepted, rejected, "batch complete");
    Ok(())
}

/// The fixed demonstration sequence: one service bound to the default
/// policy, one to the stock bounded policy, and two payments submitted to
/// each. A factory error here propagates out of `main`.
fn run_demo() -> Result<()> {
    let lenient = PaymentService::new(DefaultPolicy);
    let bounded = PaymentService::new(BoundedPolicy::default());

    let payments = vec![
        create_payment("CARD", dec!(100)).into_diagnostic()?,
        create_payment("CRYPTO", dec!(500)).into_diagnostic()?,
        create_payment("CARD", dec!(-10)).into_diagnostic()?,
        create_payment("CRYPTO", dec!(15000)).into_diagnostic()?,
    ];

    lenient.execute(&payments[0]);
    lenient.execute(&payments[2]);

    bounded.execute(&payments[1]);
    bounded.execute(&payments[3]);

    Ok(())
}
