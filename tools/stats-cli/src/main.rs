//! Table Ledger Stats CLI
//!
//! Operator tool over a ledger snapshot file: win-probability predictions
//! for a seated pool, team-wide ranking tables, and config scaffolding.
//! The engines themselves are pure library calls; this binary only loads
//! data and renders results.

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;

use ledger_core::{LedgerSnapshot, PlayerId, TeamHistory, TeamId};
use prediction_engine::{PredictionConfig, Reliability, SessionPredictor};
use ranking_engine::{compute_metrics, rank_all, MetricKind, RankingConfig, TeamAverages};

#[derive(Parser)]
#[command(name = "stats-cli")]
#[command(about = "Table Ledger stats - session predictions and team rankings")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Win probabilities for a pool of seated players
    Predict {
        /// Path to the ledger snapshot JSON
        #[arg(short, long)]
        ledger: String,

        /// Team to evaluate
        #[arg(short, long)]
        team: TeamId,

        /// Restrict history to one calendar year
        #[arg(short, long)]
        year: Option<i32>,

        /// Reference date for recency weighting (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Players seated at the table (defaults to everyone with history)
        #[arg(short, long, value_delimiter = ',')]
        players: Vec<PlayerId>,

        /// Optional prediction config TOML
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Team-wide metric rankings and averages
    Rankings {
        /// Path to the ledger snapshot JSON
        #[arg(short, long)]
        ledger: String,

        /// Team to evaluate
        #[arg(short, long)]
        team: TeamId,

        /// Restrict history to one calendar year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Write the default prediction config to a TOML file
    InitConfig {
        /// Destination path
        #[arg(short, long, default_value = "prediction.toml")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Predict { ledger, team, year, as_of, players, config } => {
            run_predict(&ledger, team, year, as_of, players, config.as_deref())
        }
        Commands::Rankings { ledger, team, year } => run_rankings(&ledger, team, year),
        Commands::InitConfig { path } => {
            PredictionConfig::default()
                .save_to_file(&path)
                .context("Failed to write config")?;
            println!("Wrote default prediction config to {}", path.bold());
            Ok(())
        }
    }
}

fn load_history(
    ledger: &str,
    team: TeamId,
    year: Option<i32>,
) -> anyhow::Result<TeamHistory> {
    let snapshot = LedgerSnapshot::load(ledger)
        .with_context(|| format!("Failed to load ledger snapshot from {ledger}"))?;
    Ok(TeamHistory::build(team, &snapshot.sessions, &snapshot.entries, year))
}

fn run_predict(
    ledger: &str,
    team: TeamId,
    year: Option<i32>,
    as_of: Option<NaiveDate>,
    players: Vec<PlayerId>,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let history = load_history(ledger, team, year)?;
    let config = match config_path {
        Some(path) => PredictionConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => PredictionConfig::default(),
    };

    let now: DateTime<Utc> = match as_of {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    };

    let pool: Vec<PlayerId> =
        if players.is_empty() { history.players().collect() } else { players };
    if pool.is_empty() {
        println!("{}", "No players with history for this team.".yellow());
        return Ok(());
    }

    let predictions = SessionPredictor::new(config).predict(&history, &pool, now);

    println!(
        "{}",
        format!("Session prediction for team {team} ({} players)", predictions.len()).bold()
    );
    println!(
        "{:<10} {:>8} {:>12} {:>12} {:>7}  {}",
        "player", "win %", "adj mean", "pred sigma", "games", "reliability"
    );
    for p in &predictions {
        let win = format!("{:.1}", p.win_probability);
        let win = if p.win_probability >= 50.0 { win.green() } else { win.red() };
        let reliability = match p.reliability {
            Reliability::High => p.reliability.label().green(),
            Reliability::Moderate => p.reliability.label().yellow(),
            Reliability::Low => p.reliability.label().red(),
        };
        println!(
            "{:<10} {:>8} {:>12.2} {:>12.2} {:>7}  {}",
            p.player_id, win, p.adjusted_mean, p.predictive_sigma, p.n_games, reliability
        );
    }
    Ok(())
}

fn run_rankings(ledger: &str, team: TeamId, year: Option<i32>) -> anyhow::Result<()> {
    let history = load_history(ledger, team, year)?;
    let metrics = compute_metrics(&history, &RankingConfig::default());
    if metrics.is_empty() {
        println!("{}", "No ranking-eligible players for this team.".yellow());
        return Ok(());
    }

    let view = rank_all(&metrics);
    let averages = TeamAverages::from_metrics(&metrics);

    println!("{}", format!("Rankings for team {team} ({} eligible)", metrics.len()).bold());
    for (player, per_metric) in &view {
        println!("{}", format!("player {player}").bold());
        for kind in MetricKind::all() {
            let Some(ranked) = per_metric.get(kind) else { continue };
            let tier = match ranked.tier.as_str() {
                "High" => ranked.tier.green(),
                "Average" => ranked.tier.yellow(),
                _ => ranked.tier.red(),
            };
            println!(
                "  {:<18} {:>12.2}  rank {:>2}/{:<2}  {}",
                kind.label(),
                ranked.value,
                ranked.rank,
                ranked.cohort_size,
                tier
            );
        }
    }

    println!("{}", "team averages".bold());
    println!("  {:<18} {:>12.2}", "avg_profit", averages.avg_profit);
    println!("  {:<18} {:>12.2}", "avg_buy_in", averages.avg_buy_in);
    println!("  {:<18} {:>12.2}", "std_dev", averages.std_dev);
    println!("  {:<18} {:>12.2}", "roi_pct", averages.roi_pct);
    println!("  {:<18} {:>12.2}", "win_pct", averages.win_pct);
    println!("  {:<18} {:>12.2}", "hourly_winrate", averages.hourly_winrate);
    Ok(())
}
