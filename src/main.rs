//! Quote Desk CLI
//!
//! Command-line access to the quote, illustration, income and scoring calculators

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quote_desk::intake::{validate_intake, RuleSet};
use quote_desk::quote::{PolicyQuoteRequest, PolicyType};
use quote_desk::{Assumptions, QuoteDesk};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quote_desk", version, about = "Quotes, illustrations and lead scoring")]
struct Cli {
    /// Directory holding services.csv, carriers.csv and priority_rules.csv
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a service at a complexity tier
    Quote {
        service_id: String,
        #[arg(default_value = "low")]
        tier: String,
    },
    /// Illustrate IUL cash value over 30 years
    Iul {
        #[arg(long)]
        age: u32,
        #[arg(long)]
        monthly_premium: f64,
        #[arg(long, default_value_t = 0.0)]
        lump_sum: f64,
        /// Write every illustrated year to a CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Monthly income from an annuity
    Annuity {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// ACA marketplace subsidy estimate
    Aca {
        #[arg(long)]
        income: f64,
        #[arg(long, default_value_t = 1)]
        family_size: u32,
        #[arg(long)]
        plan_cost: f64,
    },
    /// Score intake answers given as key=value pairs
    Score {
        /// Rule preset: intake_form or hitl_review (defaults to the loaded rules)
        #[arg(long)]
        preset: Option<String>,
        /// Also check required intake fields
        #[arg(long)]
        validate: bool,
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Quote a policy type across the carrier panel
    PolicyQuote {
        /// termLife, wholeLife, universalLife, indexedUniversalLife, immediateAnnuity, fixedIndexAnnuity
        policy_type: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        health: Option<String>,
        #[arg(long)]
        coverage: Option<f64>,
        #[arg(long)]
        term: Option<u32>,
        #[arg(long)]
        investment: Option<f64>,
        #[arg(long)]
        frequency: Option<String>,
    },
    /// Recommend a service package from keyword answers
    Recommend { answers: Vec<String> },
}

fn parse_fields(pairs: &[String]) -> Result<HashMap<String, String>> {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .with_context(|| format!("expected key=value, got '{}'", pair))?;
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_csv_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default_pricing(),
    };

    match cli.command {
        Command::Quote { service_id, tier } => {
            let desk = QuoteDesk::with_assumptions(assumptions);
            let quote = desk.calculate_quote(&service_id, &tier)?;
            if cli.json {
                print_json(&quote)?;
            } else {
                println!("{} ({}): {:.2} {}", quote.service_name, quote.tier, quote.estimated_total, quote.currency);
            }
        }

        Command::Iul {
            age,
            monthly_premium,
            lump_sum,
            output,
        } => {
            let desk = QuoteDesk::with_assumptions(assumptions);
            let result = desk.project_iul(age, monthly_premium, lump_sum)?;
            let summary = result.summary();

            if let Some(path) = &output {
                let mut writer = csv::Writer::from_path(path)
                    .with_context(|| format!("creating {}", path.display()))?;
                for row in &result.rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }

            if cli.json {
                print_json(&result)?;
            } else {
                println!("IUL Illustration (issue age {}, face {:.2})", age, result.death_benefit_base);
                println!(
                    "{:>4} {:>4} {:>12} {:>8} {:>12} {:>14} {:>14}",
                    "Year",
                    "Age",
                    "Premiums",
                    "Credit",
                    "COI",
                    "Cash Value",
                    "Death Benefit"
                );
                println!("{}", "-".repeat(76));
                for row in &result.rows {
                    println!(
                        "{:>4} {:>4} {:>12.2} {:>7.2}% {:>12.2} {:>14.2} {:>14.2}",
                        row.year,
                        row.age,
                        row.cumulative_premium,
                        row.credited_rate * 100.0,
                        row.cost_of_insurance,
                        row.cash_value,
                        row.death_benefit,
                    );
                }
                println!("\nSummary:");
                println!("  Total Premiums:      ${:.2}", summary.total_premiums);
                println!("  Final Cash Value:    ${:.2}", summary.final_cash_value);
                println!("  Final Death Benefit: ${:.2}", summary.final_death_benefit);
                if let Some(irr) = result.cash_value_irr() {
                    println!("  Cash Value IRR:      {:.4}%", irr * 100.0);
                }
                if summary.negative_coi_years > 0 {
                    println!("  Note: cost of insurance negative in {} years", summary.negative_coi_years);
                }
                if let Some(path) = &output {
                    println!("\nFull illustration written to: {}", path.display());
                }
            }
        }

        Command::Annuity { principal, rate, years } => {
            let desk = QuoteDesk::with_assumptions(assumptions);
            let schedule = desk.annuity_schedule(principal, rate, years)?;
            if cli.json {
                print_json(&schedule)?;
            } else {
                println!("Monthly income: ${:.2}", schedule.monthly_income);
                println!("Total income:   ${:.2}", schedule.total_income);
                println!("Total interest: ${:.2}", schedule.total_interest);
            }
        }

        Command::Aca {
            income,
            family_size,
            plan_cost,
        } => {
            let desk = QuoteDesk::with_assumptions(assumptions);
            let estimate = desk.estimate_aca_subsidy(income, family_size, plan_cost)?;
            if cli.json {
                print_json(&estimate)?;
            } else {
                println!("Federal poverty line: ${:.2}", estimate.federal_poverty_line);
                println!("Income / FPL:         {:.2}", estimate.poverty_ratio);
                println!("Eligible:             {}", estimate.eligible);
                println!("Monthly subsidy:      ${:.2}", estimate.subsidy);
            }
        }

        Command::Score {
            preset,
            validate,
            fields,
        } => {
            let fields = parse_fields(&fields)?;
            if validate {
                validate_intake(&fields)?;
            }

            let mut assumptions = assumptions;
            if let Some(name) = preset {
                assumptions.priority =
                    RuleSet::preset(&name).with_context(|| format!("unknown rule preset '{}'", name))?;
            }
            let desk = QuoteDesk::with_assumptions(assumptions);
            let score = desk.score_priority(&fields);
            if cli.json {
                print_json(&score)?;
            } else {
                println!("{} (score {})", score.tier, score.score);
                for rule in &score.matched_rules {
                    println!("  + {}", rule);
                }
            }
        }

        Command::PolicyQuote {
            policy_type,
            age,
            health,
            coverage,
            term,
            investment,
            frequency,
        } => {
            let desk = QuoteDesk::with_assumptions(assumptions);
            let policy_type = PolicyType::parse(&policy_type)?;
            let request = PolicyQuoteRequest {
                age,
                health,
                coverage_amount: coverage,
                term_length: term,
                investment_amount: investment,
                payment_frequency: frequency,
            };
            let set = desk.quote_policy(policy_type, &request)?;
            if cli.json {
                print_json(&set)?;
            } else {
                println!("{} ({})", set.policy_type, policy_type.description());
                for quote in &set.quotes {
                    println!(
                        "  {:<18} {:>10.2}/mo {:>12.2}/yr  rating {:.1}",
                        quote.carrier_name,
                        quote.monthly_premium,
                        quote.annual_premium,
                        quote.rating
                    );
                }
            }
        }

        Command::Recommend { answers } => {
            let desk = QuoteDesk::with_assumptions(assumptions);
            let recommendation = desk.recommend_package(&answers);
            if cli.json {
                print_json(&recommendation)?;
            } else {
                println!("{}: {}", recommendation.package, recommendation.services.join(", "));
            }
        }
    }

    Ok(())
}
