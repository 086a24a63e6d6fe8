use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use clarity_core::{
    Budget, BudgetPeriod, Category, DailyPreset, Transaction, TransactionType, budget_status,
    daily_advice, dashboard_intelligence, summarize,
};
use clarity_ingest::{parse_statement_csv, to_transactions};

mod config;
mod store;

use config::Config;
use store::Ledger;

#[derive(Parser, Debug)]
#[command(name = "clarity", version, about = "Clarity personal finance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a transaction (category may be auto-resolved from the description)
    Add {
        /// income | expense
        #[arg(long = "type")]
        kind: String,

        #[arg(long)]
        amount: f64,

        /// One of the fixed categories; use Other to let keywords decide
        #[arg(long, default_value = "Other")]
        category: String,

        /// YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// List transactions, optionally filtered
    List {
        #[arg(long)]
        category: Option<String>,

        /// income | expense
        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,
    },

    /// Budget commands
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },

    /// Daily preset commands
    Preset {
        #[command(subcommand)]
        command: PresetCommand,
    },

    /// Print totals, the 6-month trend, category health, and the confidence score
    Dashboard,

    /// Deterministic money advice for one day
    Advice {
        /// YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        date: Option<String>,
    },

    /// Import a bank statement CSV (Date,Description,Amount)
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum BudgetCommand {
    /// Create or replace the budget
    Set {
        #[arg(long)]
        amount: f64,

        /// now | week | month
        #[arg(long)]
        period: String,
    },

    /// Show spend against the budget window
    Status,

    /// Remove the budget
    Clear,
}

#[derive(Subcommand, Debug)]
enum PresetCommand {
    /// Save a reusable daily entry
    Add {
        #[arg(long)]
        name: String,

        /// income | expense
        #[arg(long = "type")]
        kind: String,

        #[arg(long)]
        amount: f64,

        #[arg(long, default_value = "Other")]
        category: String,
    },

    /// List presets
    List,

    /// Apply a preset as a transaction for a day
    Apply {
        #[arg(long)]
        name: String,

        /// YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a preset by name
    Remove {
        #[arg(long)]
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let today = Utc::now().date_naive();

    match cli.command {
        Command::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => add(&cfg, today, &kind, amount, &category, date.as_deref(), &description),
        Command::List {
            category,
            kind,
            start,
            end,
        } => list(
            &cfg,
            category.as_deref(),
            kind.as_deref(),
            start.as_deref(),
            end.as_deref(),
        ),
        Command::Budget { command } => match command {
            BudgetCommand::Set { amount, period } => budget_set(&cfg, today, amount, &period),
            BudgetCommand::Status => budget_show(&cfg, today),
            BudgetCommand::Clear => budget_clear(),
        },
        Command::Preset { command } => match command {
            PresetCommand::Add {
                name,
                kind,
                amount,
                category,
            } => preset_add(&name, &kind, amount, &category),
            PresetCommand::List => preset_list(&cfg),
            PresetCommand::Apply { name, date } => preset_apply(&cfg, today, &name, date.as_deref()),
            PresetCommand::Remove { name } => preset_remove(&name),
        },
        Command::Dashboard => dashboard(&cfg, today),
        Command::Advice { date } => advice(&cfg, today, date.as_deref()),
        Command::Import { csv } => import(&cfg, &csv),
    }
}

fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date: {s} (expected YYYY-MM-DD)"))
}

fn parse_day_or(s: Option<&str>, fallback: NaiveDate) -> Result<NaiveDate> {
    match s {
        Some(s) => parse_day(s),
        None => Ok(fallback),
    }
}

fn money(cfg: &Config, amount: f64) -> String {
    format!("{}{:.2}", cfg.display.currency, amount)
}

fn add(
    cfg: &Config,
    today: NaiveDate,
    kind: &str,
    amount: f64,
    category: &str,
    date: Option<&str>,
    description: &str,
) -> Result<()> {
    // Reject bad input at the edge; the core assumes valid enums.
    let kind: TransactionType = kind.parse()?;
    let selected: Category = category.parse()?;
    if amount <= 0.0 {
        bail!("amount must be greater than 0");
    }
    let date = parse_day_or(date, today)?;

    let txn = Transaction::new(kind, amount, selected, date, description);
    println!(
        "Recorded {} {} on {} as {} ({})",
        txn.kind,
        money(cfg, txn.amount),
        txn.date,
        txn.category,
        txn.categorization_reason
    );

    let mut ledger = Ledger::load()?;
    ledger.transactions.push(txn);
    ledger.save()?;
    Ok(())
}

fn list(
    cfg: &Config,
    category: Option<&str>,
    kind: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<()> {
    let category: Option<Category> = category.map(str::parse).transpose()?;
    let kind: Option<TransactionType> = kind.map(str::parse).transpose()?;
    let start = start.map(parse_day).transpose()?;
    let end = end.map(parse_day).transpose()?;

    let ledger = Ledger::load()?;
    let mut rows: Vec<&Transaction> = ledger
        .transactions
        .iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .filter(|t| kind.is_none_or(|k| t.kind == k))
        .filter(|t| start.is_none_or(|s| t.date >= s))
        .filter(|t| end.is_none_or(|e| t.date <= e))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    for t in &rows {
        let mut line = format!(
            "{}  {:<7}  {:>10}  {:<14}  {}",
            t.date,
            t.kind.as_str(),
            money(cfg, t.amount),
            t.category.as_str(),
            t.description
        );
        if cfg.display.show_reasons {
            line.push_str(&format!("  [{}]", t.categorization_reason));
        }
        println!("{line}");
    }
    println!("{} transaction(s)", rows.len());
    Ok(())
}

fn budget_set(cfg: &Config, today: NaiveDate, amount: f64, period: &str) -> Result<()> {
    let period: BudgetPeriod = period.parse()?;
    let budget = Budget::new(amount, period, today)?;

    let mut ledger = Ledger::load()?;
    ledger.budget = Some(budget.clone());
    ledger.save()?;

    let status = budget_status(&budget, &ledger.transactions, today);
    print_budget_status(cfg, &status);
    Ok(())
}

fn budget_show(cfg: &Config, today: NaiveDate) -> Result<()> {
    let ledger = Ledger::load()?;
    match &ledger.budget {
        Some(budget) => {
            let status = budget_status(budget, &ledger.transactions, today);
            print_budget_status(cfg, &status);
        }
        None => println!("No budget set (try: clarity budget set --amount 500 --period month)"),
    }
    Ok(())
}

fn budget_clear() -> Result<()> {
    let mut ledger = Ledger::load()?;
    ledger.budget = None;
    ledger.save()?;
    println!("Budget cleared");
    Ok(())
}

fn print_budget_status(cfg: &Config, status: &clarity_core::BudgetStatus) {
    println!(
        "Budget {} per {} | window {} .. {}",
        money(cfg, status.amount),
        status.period,
        status.start_date,
        status.end_date
    );
    println!(
        "Spent {} | remaining {} | utilization {:.1}%",
        money(cfg, status.spent),
        money(cfg, status.remaining),
        status.utilization_pct
    );
}

fn preset_add(name: &str, kind: &str, amount: f64, category: &str) -> Result<()> {
    let kind: TransactionType = kind.parse()?;
    let category: Category = category.parse()?;
    if name.trim().is_empty() {
        bail!("preset name must not be empty");
    }
    if amount <= 0.0 {
        bail!("amount must be greater than 0");
    }

    let mut ledger = Ledger::load()?;
    if ledger.presets.iter().any(|p| p.name == name) {
        bail!("preset already exists: {name}");
    }
    ledger.presets.push(DailyPreset {
        name: name.trim().to_string(),
        kind,
        amount,
        category,
        description: String::new(),
        active: true,
    });
    ledger.save()?;
    println!("Saved preset {name}");
    Ok(())
}

fn preset_list(cfg: &Config) -> Result<()> {
    let ledger = Ledger::load()?;
    if ledger.presets.is_empty() {
        println!("No presets saved");
        return Ok(());
    }
    for p in &ledger.presets {
        println!(
            "{:<20}  {:<7}  {:>10}  {}{}",
            p.name,
            p.kind.as_str(),
            money(cfg, p.amount),
            p.category,
            if p.active { "" } else { "  (inactive)" }
        );
    }
    Ok(())
}

fn preset_apply(cfg: &Config, today: NaiveDate, name: &str, date: Option<&str>) -> Result<()> {
    let date = parse_day_or(date, today)?;
    let mut ledger = Ledger::load()?;
    let Some(preset) = ledger.presets.iter().find(|p| p.name == name && p.active) else {
        bail!("active preset not found: {name}");
    };

    let txn = preset.materialize(date);
    println!(
        "Applied {} for {} on {} ({})",
        name,
        money(cfg, txn.amount),
        txn.date,
        txn.category
    );
    ledger.transactions.push(txn);
    ledger.save()?;
    Ok(())
}

fn preset_remove(name: &str) -> Result<()> {
    let mut ledger = Ledger::load()?;
    let before = ledger.presets.len();
    ledger.presets.retain(|p| p.name != name);
    if ledger.presets.len() == before {
        bail!("preset not found: {name}");
    }
    ledger.save()?;
    println!("Removed preset {name}");
    Ok(())
}

fn dashboard(cfg: &Config, today: NaiveDate) -> Result<()> {
    let ledger = Ledger::load()?;

    let summary = summarize(&ledger.transactions, None, None);
    println!(
        "Income {} | expense {} | balance {}",
        money(cfg, summary.total_income),
        money(cfg, summary.total_expense),
        money(cfg, summary.balance)
    );

    let view = dashboard_intelligence(&ledger.transactions, today);
    println!("\n{}\n", view.explain_summary);

    println!("Monthly trend:");
    for point in &view.monthly_trend {
        println!(
            "  {:<9} income {:>10}  expense {:>10}",
            point.month,
            money(cfg, point.income),
            money(cfg, point.expense)
        );
    }

    if !view.category_health.is_empty() {
        println!("\nCategory health:");
        for h in &view.category_health {
            println!(
                "  {:<14} {:?}  current {:>10}  trailing avg {:>10}",
                h.category.to_string(),
                h.status,
                money(cfg, h.current),
                money(cfg, h.trailing_avg)
            );
        }
    }

    println!("\nData completeness: {}%", view.confidence_score);
    for note in &view.confidence_notes {
        println!("  - {note}");
    }

    if let Some(budget) = &ledger.budget {
        println!();
        print_budget_status(cfg, &budget_status(budget, &ledger.transactions, today));
    }
    Ok(())
}

fn advice(cfg: &Config, today: NaiveDate, date: Option<&str>) -> Result<()> {
    let date = parse_day_or(date, today)?;
    let ledger = Ledger::load()?;
    let advice = daily_advice(&ledger.transactions, date);

    println!(
        "Money flow: income {} | expense {} | balance {}",
        money(cfg, advice.income),
        money(cfg, advice.expense),
        money(cfg, advice.balance)
    );
    println!("{}\n", advice.brief_summary);
    println!("What to do:");
    for item in &advice.do_list {
        println!("  - {item}");
    }
    println!("What not to do:");
    for item in &advice.avoid_list {
        println!("  - {item}");
    }
    Ok(())
}

fn import(cfg: &Config, csv: &PathBuf) -> Result<()> {
    if !csv.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv.display());
    }

    let rows = parse_statement_csv(csv).with_context(|| format!("parsing {}", csv.display()))?;
    let txns = to_transactions(&rows);

    let auto = txns
        .iter()
        .filter(|t| t.categorization_reason.starts_with("Matched keyword"))
        .count();
    println!(
        "Parsed {} rows from {}; importing {} transactions ({} auto-categorized)",
        rows.len(),
        csv.display(),
        txns.len(),
        auto
    );
    for t in &txns {
        println!(
            "  {}  {:<7}  {:>10}  {:<14}  {}",
            t.date,
            t.kind.as_str(),
            money(cfg, t.amount),
            t.category.as_str(),
            t.description
        );
    }

    let mut ledger = Ledger::load()?;
    ledger.transactions.extend(txns);
    ledger.save()?;
    Ok(())
}
