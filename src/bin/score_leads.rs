//! Score every lead in an intake CSV
//!
//! Usage: score_leads <leads.csv> [output.csv] [--hitl] [--validate]
//!
//! Column headers are intake form field names (serviceType, investmentCapital, ...).
//! Set QUOTE_DESK_ASSUMPTIONS to load rules from a directory other than the defaults.

use anyhow::{bail, Context, Result};
use quote_desk::intake::{validate_intake, RuleSet};
use quote_desk::{Assumptions, Error, QuoteDesk};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
struct ScoredLead {
    row: usize,
    tier: String,
    score: u32,
    matched_rules: String,
    missing_fields: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let use_hitl = args.iter().any(|a| a == "--hitl");
    let validate = args.iter().any(|a| a == "--validate");
    let paths: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let input = match paths.first() {
        Some(path) => path.as_str(),
        None => bail!("usage: score_leads <leads.csv> [output.csv] [--hitl] [--validate]"),
    };
    let output = paths.get(1).map(|p| p.as_str()).unwrap_or("scored_leads.csv");

    let start = Instant::now();

    let mut assumptions = match env::var("QUOTE_DESK_ASSUMPTIONS") {
        Ok(dir) => Assumptions::from_csv_path(Path::new(&dir))?,
        Err(_) => Assumptions::default_pricing(),
    };
    if use_hitl {
        assumptions.priority = RuleSet::hitl_review();
    }
    let desk = QuoteDesk::with_assumptions(assumptions);

    let mut reader = csv::Reader::from_path(input).with_context(|| format!("opening {}", input))?;
    let mut leads: Vec<HashMap<String, String>> = Vec::new();
    for record in reader.deserialize() {
        leads.push(record?);
    }
    println!("Loaded {} leads in {:?}", leads.len(), start.elapsed());

    let scores = desk.score_batch(&leads);

    let mut writer = csv::Writer::from_path(output).with_context(|| format!("creating {}", output))?;
    let mut tier_counts: HashMap<String, usize> = HashMap::new();
    for (idx, (lead, score)) in leads.iter().zip(&scores).enumerate() {
        let missing_fields = if validate {
            match validate_intake(lead) {
                Ok(()) => String::new(),
                Err(Error::MissingFields(missing)) => missing.join(";"),
                Err(other) => return Err(other.into()),
            }
        } else {
            String::new()
        };

        *tier_counts.entry(score.tier.to_string()).or_default() += 1;
        writer.serialize(ScoredLead {
            row: idx + 1,
            tier: score.tier.to_string(),
            score: score.score,
            matched_rules: score.matched_rules.join(";"),
            missing_fields,
        })?;
    }
    writer.flush()?;

    println!("Output written to {}", output);
    println!("\nTier Summary:");
    for tier in ["HIGH", "MEDIUM", "LOW"] {
        println!("  {:<6} {}", tier, tier_counts.get(tier).copied().unwrap_or(0));
    }
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
