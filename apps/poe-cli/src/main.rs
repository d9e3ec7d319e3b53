use clap::{Parser, Subcommand};
use poe_chain::{
    CableSituation, DeviceStatus, PSE_PRESETS, PairMode, Stage, cable_catalog, device_status,
    summarize_chain,
};
use poe_project::{LoadedChain, ProjectError, load_chain, to_yaml_string};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "poe-cli")]
#[command(
    about = "POE cascade calculator - power flow through daisy-chained devices",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported cable types
    CableTypes,
    /// List cable situations and their loss multipliers
    Situations,
    /// List standard PSE output levels
    Presets,
    /// Validate a chain file
    Validate {
        /// Path to the chain YAML or JSON file
        chain_path: PathBuf,
    },
    /// Propagate power through a chain and print every stage
    Run {
        /// Path to the chain YAML or JSON file
        chain_path: PathBuf,
        /// Override the switch PSE output in watts
        #[arg(long)]
        switch_w: Option<f64>,
        /// Run every segment on a single pair
        #[arg(long)]
        one_pair: bool,
        /// Override the cable situation (cool, typical, warm, worst)
        #[arg(long)]
        situation: Option<String>,
        /// Print stages as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print an example chain file
    Template,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing; stderr keeps `run --json` output parseable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CableTypes => {
            cmd_cable_types();
            Ok(())
        }
        Commands::Situations => {
            cmd_situations();
            Ok(())
        }
        Commands::Presets => {
            cmd_presets();
            Ok(())
        }
        Commands::Validate { chain_path } => cmd_validate(&chain_path),
        Commands::Run {
            chain_path,
            switch_w,
            one_pair,
            situation,
            json,
        } => cmd_run(&chain_path, switch_w, one_pair, situation, json),
        Commands::Template => cmd_template(),
    }
}

fn cmd_cable_types() {
    println!("Cable types:");
    for spec in cable_catalog() {
        println!(
            "  {:<6} {:<12} {:.4} ohm/m",
            spec.key, spec.display_name, spec.resistance_per_meter_ohm
        );
    }
}

fn cmd_situations() {
    println!("Cable situations:");
    for situation in CableSituation::ALL {
        let (reference, (lo, hi)) = situation.reference_loss_w();
        println!(
            "  {:<8} x{:.3}  ({:.1} W at 100 m / 90 W, observed {:.0}-{:.0} W)",
            situation.key(),
            situation.loss_multiplier(),
            reference,
            lo,
            hi
        );
    }
}

fn cmd_presets() {
    println!("PSE output presets:");
    for preset in PSE_PRESETS {
        println!("  {:>5.1} W  {}", preset.output_w, preset.standard);
    }
}

fn cmd_validate(chain_path: &Path) -> CliResult<()> {
    println!("Validating chain: {}", chain_path.display());
    let loaded = load_chain(chain_path)?;
    for warning in &loaded.report.warnings {
        println!("  ! {warning}");
    }
    println!(
        "✓ Chain '{}' is valid ({} devices)",
        loaded.file.name,
        loaded.file.links.len()
    );
    Ok(())
}

fn cmd_run(
    chain_path: &Path,
    switch_w: Option<f64>,
    one_pair: bool,
    situation: Option<String>,
    json: bool,
) -> CliResult<()> {
    let LoadedChain { mut file, report } = load_chain(chain_path)?;
    for warning in &report.warnings {
        tracing::warn!("{warning}");
    }

    if let Some(watts) = switch_w {
        if !(watts.is_finite() && watts > 0.0) {
            return Err(CliError::InvalidOption(format!(
                "--switch-w must be a positive number of watts, got {watts}"
            )));
        }
        file.switch_output_w = watts;
    }
    if one_pair {
        file.pair_mode = PairMode::OnePair;
    }
    if let Some(key) = situation {
        if CableSituation::from_key(&key).is_none() {
            tracing::warn!(situation = %key, "unrecognized cable situation; loss is not scaled");
        }
        file.cable_situation = key;
    }

    tracing::info!(
        chain = %file.name,
        switch_w = file.switch_output_w,
        devices = file.links.len(),
        "propagating"
    );
    let stages = file.propagate();

    if json {
        println!("{}", serde_json::to_string_pretty(&stages)?);
        return Ok(());
    }

    let config = file.config();
    println!("Chain: {}", file.name);
    println!(
        "  Switch {:.2} W, {}, {} situation",
        file.switch_output_w,
        if config.pair_mode.is_two_pair() {
            "2-pair"
        } else {
            "1-pair"
        },
        config.cable_situation
    );
    println!();
    print_stage_table(&stages);
    println!();
    println!("{}", summarize_chain(&stages).message());
    Ok(())
}

fn fmt_w(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

fn print_stage_table(stages: &[Stage]) {
    println!(
        "{:<14} {:>9} {:>9} {:>9} {:>9} {:>6} {:>9}  {}",
        "Stage", "In (W)", "Loss (W)", "After (W)", "Draw (W)", "Eff", "Out (W)", "Margin"
    );
    for stage in stages {
        let eff = stage
            .efficiency_percent
            .map(|e| format!("{e}%"))
            .unwrap_or_else(|| "-".to_string());
        let status = if stage.is_source() {
            ""
        } else {
            match device_status(stage) {
                DeviceStatus::Powered => "",
                DeviceStatus::Underpowered => " ✗",
            }
        };
        println!(
            "{:<14} {:>9} {:>9} {:>9} {:>9} {:>6} {:>9.2}  {}{}",
            stage.label,
            fmt_w(stage.power_in_w),
            fmt_w(stage.cable_loss_w),
            fmt_w(stage.power_after_cable_w),
            fmt_w(stage.device_draw_w),
            eff,
            stage.output_w,
            stage
                .margin_note
                .map(|note| note.message())
                .unwrap_or("-"),
            status
        );
    }
}

fn cmd_template() -> CliResult<()> {
    print!("{}", to_yaml_string(&poe_project::ChainFile::example())?);
    Ok(())
}
