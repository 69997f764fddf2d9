//! KAYICOM CLI - Main entry point

use clap::{Parser, Subcommand};
use kayicom_core::Currency;
use kayicom_rpc::{commands, AppContext};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kayicom")]
#[command(about = "KAYICOM - wallet fee and commission calculator", long_about = None)]
struct Cli {
    /// Settings snapshot (JSON with `agent`, `withdrawals`, `app_config`)
    #[arg(short, long, default_value = "./settings.json")]
    settings: PathBuf,

    /// Fee engine config overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat unparsable amounts as 0, like the wallet forms do
    #[arg(long)]
    lenient: bool,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Agent commission and expected HTG for a USD deposit
    Commission {
        /// Deposit amount in USD
        amount: String,
    },

    /// Virtual card top-up fee
    CardFee {
        /// Top-up amount
        amount: String,
    },

    /// International minutes top-up fee
    MinutesFee {
        /// Top-up amount
        amount: String,
    },

    /// Virtual card order fee (HTG)
    CardOrderFee,

    /// Withdrawal fee and net payout
    Withdraw {
        /// Withdrawal amount
        amount: String,
        /// Payout method (zelle, moncash, ...), matched exactly
        method: String,
    },

    /// Convert between HTG and USD
    Convert {
        amount: String,
        from: Currency,
        /// Target currency (defaults to the other wallet currency)
        to: Option<Currency>,
    },

    /// Compare HTG collected by an agent against the USD credited
    VerifyDeposit {
        /// USD credited to the client
        amount_usd: String,
        /// HTG the agent collected
        received_htg: String,
        /// Rate the agent used (defaults to the agent settings rate)
        #[arg(long)]
        rate: Option<Decimal>,
    },

    /// Check every configured tier list for overlaps and gaps
    Lint,
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable with --json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli.settings, cli.config.as_deref()).await?;
    let dp = ctx.config.display_dp;
    let parse = |raw: &str| commands::parse_amount(raw, cli.lenient);

    match cli.command {
        Commands::Commission { amount } => {
            let report = commands::commission(&ctx, parse(&amount)?).await?;
            if cli.json {
                return print_json(&report);
            }
            println!("Deposit:      {} USD", report.amount_usd);
            println!("Commission:   {} USD", report.commission.round_dp(dp));
            match &report.matched_tier {
                Some(tier) => {
                    let unit = if tier.is_percentage { "%" } else { " USD" };
                    if tier.is_unbounded() {
                        println!(
                            "Tier:         {} and above ({}{})",
                            tier.min_amount, tier.value, unit
                        );
                    } else {
                        println!(
                            "Tier:         {} - {} ({}{})",
                            tier.min_amount, tier.max_amount, tier.value, unit
                        );
                    }
                }
                None => println!("Tier:         none"),
            }
            println!(
                "Expected HTG: {} (rate {})",
                report.expected_htg.round_dp(dp),
                report.rate_used
            );
        }

        Commands::CardFee { amount } => {
            let report = commands::card_fee(&ctx, parse(&amount)?).await?;
            if cli.json {
                return print_json(&report);
            }
            println!(
                "✅ Card top-up {}: fee {}, total {}",
                report.amount,
                report.fee.round_dp(dp),
                report.total.round_dp(dp)
            );
        }

        Commands::MinutesFee { amount } => {
            let report = commands::minutes_fee(&ctx, parse(&amount)?).await?;
            if cli.json {
                return print_json(&report);
            }
            println!(
                "✅ Minutes top-up {}: fee {}, total {}",
                report.amount,
                report.fee.round_dp(dp),
                report.total.round_dp(dp)
            );
        }

        Commands::CardOrderFee => {
            let fee = commands::card_order_fee(&ctx).await;
            if cli.json {
                return print_json(&fee);
            }
            println!("Card order fee: {} HTG", fee);
        }

        Commands::Withdraw { amount, method } => {
            let quote = commands::withdraw(&ctx, parse(&amount)?, &method).await?;
            if cli.json {
                return print_json(&quote);
            }
            println!(
                "✅ Withdraw {} via {}: fee {}, net {}",
                quote.amount,
                method,
                quote.fee.round_dp(dp),
                quote.net_amount.round_dp(dp)
            );
        }

        Commands::Convert { amount, from, to } => {
            let to = to.unwrap_or_else(|| from.counterpart());
            let report = commands::convert(&ctx, parse(&amount)?, from, to).await?;
            if cli.json {
                return print_json(&report);
            }
            println!(
                "{} {} ≈ {} {}",
                report.amount,
                report.from,
                report.converted.round_dp(dp),
                report.to
            );
        }

        Commands::VerifyDeposit {
            amount_usd,
            received_htg,
            rate,
        } => {
            let check =
                commands::verify_deposit(&ctx, parse(&amount_usd)?, parse(&received_htg)?, rate)
                    .await?;
            if cli.json {
                return print_json(&check);
            }
            println!("Expected HTG: {}", check.expected_htg.round_dp(dp));
            println!("Received HTG: {}", check.received_htg);
            if check.is_exact() {
                println!("✅ Amounts match");
            } else if check.is_short() {
                println!("❌ Short by {} HTG", (-check.difference).round_dp(dp));
            } else {
                println!("❌ Over by {} HTG", check.difference.round_dp(dp));
            }
        }

        Commands::Lint => {
            let reports = commands::lint(&ctx).await;
            if cli.json {
                return print_json(&reports);
            }
            for report in reports {
                if report.issues.is_empty() {
                    println!("✅ {} ({} tiers)", report.list, report.tiers);
                    continue;
                }
                println!("❌ {} ({} tiers)", report.list, report.tiers);
                for issue in &report.issues {
                    println!("   {}", issue);
                }
            }
        }
    }

    Ok(())
}
