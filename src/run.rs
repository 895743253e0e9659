use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::categorize::Categorizer;
use crate::db::Database;
use crate::models::{Budget, Goal, Transaction};

pub(crate) fn as_cli(args: &[String], db: &Database) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], db),
        "list" | "ls" => cli_list(db),
        "budget" => cli_budget(&args[2..], db),
        "budgets" => cli_budgets(db),
        "goal" => cli_goal(&args[2..], db),
        "goals" => cli_goals(db),
        "reset" => cli_reset(db),
        "export" => cli_export(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("Fintrack — local-only personal finance tracker");
    println!();
    println!("Usage: fintrack <command>");
    println!();
    println!("Commands:");
    println!("  add <amount> <description>    Record a transaction");
    println!("    --date <date>               Transaction date (default: today)");
    println!("    --category <name>           Category (default: inferred from description)");
    println!("  list                          List all transactions");
    println!("  budget <category> <amount>    Record a budget ceiling for a category");
    println!("  budgets                       List all budgets");
    println!("  goal <name> <target>          Record a savings goal");
    println!("  goals                         List all goals");
    println!("  reset                         Delete all recorded data");
    println!("  export [path]                 Export transactions to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_add(args: &[String], db: &Database) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!(
            "Usage: fintrack add <amount> <description> [--date <date>] [--category <name>]"
        );
    }

    let amount = Decimal::from_str(&args[0])
        .with_context(|| format!("Invalid amount: {}", args[0]))?;
    let description = args[1].clone();

    let date = args
        .windows(2)
        .find(|w| w[0] == "--date")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    // An absent or empty --category both mean "infer it".
    let category = args
        .windows(2)
        .find(|w| w[0] == "--category")
        .map(|w| w[1].clone())
        .unwrap_or_default();

    let mut txn = Transaction::new(date, amount, description, category);
    Categorizer::default().apply(&mut txn);
    let id = db.insert_transaction(&txn)?;
    println!("Added transaction #{id} ({})", txn.category);
    Ok(())
}

fn cli_list(db: &Database) -> Result<()> {
    let txns = db.get_transactions()?;
    if txns.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    println!(
        "{:<5} {:<12} {:>12} {:<28} Category",
        "ID", "Date", "Amount", "Description"
    );
    println!("{}", "─".repeat(78));
    for txn in &txns {
        println!(
            "{:<5} {:<12} {:>12.2} {:<28} {}",
            txn.id.unwrap_or(0),
            txn.date,
            txn.amount,
            txn.description,
            txn.category,
        );
    }
    let income: Decimal = txns.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
    let spent: Decimal = txns
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.abs_amount())
        .sum();
    println!();
    println!(
        "{} transactions (income {income:.2}, spent {spent:.2})",
        txns.len()
    );
    Ok(())
}

fn cli_budget(args: &[String], db: &Database) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: fintrack budget <category> <amount>");
    }
    let amount = Decimal::from_str(&args[1])
        .with_context(|| format!("Invalid amount: {}", args[1]))?;
    let budget = Budget::new(args[0].clone(), amount);
    let id = db.insert_budget(&budget)?;
    println!("Added budget #{id} for {}", budget.category);
    Ok(())
}

fn cli_budgets(db: &Database) -> Result<()> {
    let budgets = db.get_budgets()?;
    if budgets.is_empty() {
        println!("No budgets");
        return Ok(());
    }

    println!("{:<5} {:<24} Amount", "ID", "Category");
    println!("{}", "─".repeat(42));
    for budget in &budgets {
        println!(
            "{:<5} {:<24} {:.2}",
            budget.id.unwrap_or(0),
            budget.category,
            budget.amount,
        );
    }
    Ok(())
}

fn cli_goal(args: &[String], db: &Database) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: fintrack goal <name> <target>");
    }
    let target = Decimal::from_str(&args[1])
        .with_context(|| format!("Invalid target: {}", args[1]))?;
    let goal = Goal::new(args[0].clone(), target);
    let id = db.insert_goal(&goal)?;
    println!("Added goal #{id}: {}", goal.name);
    Ok(())
}

fn cli_goals(db: &Database) -> Result<()> {
    let goals = db.get_goals()?;
    if goals.is_empty() {
        println!("No goals");
        return Ok(());
    }

    println!("{:<5} {:<24} Target", "ID", "Name");
    println!("{}", "─".repeat(42));
    for goal in &goals {
        println!(
            "{:<5} {:<24} {:.2}",
            goal.id.unwrap_or(0),
            goal.name,
            goal.target,
        );
    }
    Ok(())
}

fn cli_reset(db: &Database) -> Result<()> {
    db.reset_all()?;
    println!("All data reset");
    Ok(())
}

fn cli_export(args: &[String], db: &Database) -> Result<()> {
    let path = args
        .first()
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/fintrack-export.csv")
        });

    let count = db.export_to_csv(Path::new(&path))?;
    if count == 0 {
        println!("No transactions; wrote header-only file to {path}");
    } else {
        println!("Exported {count} transactions to {path}");
    }
    Ok(())
}

fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
