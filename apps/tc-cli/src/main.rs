use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tc_core::{Real, TcError, ensure_finite, ensure_positive};
use tc_reference::{ThermocoupleCatalogEntry, ThermocoupleRegistry, catalog_entry};
use tc_thermocouple::{Leg, Quantity, ThermocoupleError, ThermocoupleModel};
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Thermocouple(#[from] ThermocoupleError),

    #[error(transparent)]
    Core(#[from] TcError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "tc")]
#[command(about = "Thermocouple conversions - ITS-90 reference functions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List thermocouple types and the quantities each supports
    Types {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Thermoelectric voltage at a temperature (reference junction at 0 °C)
    #[command(allow_negative_numbers = true)]
    Emf {
        /// Type letter (B, E, J, K, N, R, S, T)
        code: String,
        /// Measuring junction temperature in °C
        temp_c: Real,
    },
    /// Temperature for a measured voltage
    #[command(allow_negative_numbers = true)]
    Temp {
        /// Type letter
        code: String,
        /// Measured voltage in volts
        volts: Real,
        /// Reference junction temperature in °C (defaults to 0 °C)
        #[arg(long)]
        reference: Option<Real>,
    },
    /// Seebeck coefficient in µV/K
    #[command(allow_negative_numbers = true)]
    Seebeck {
        /// Type letter
        code: String,
        /// Temperature in °C
        temp_c: Real,
    },
    /// Temperature derivative of the Seebeck coefficient
    #[command(allow_negative_numbers = true)]
    Dsdt {
        /// Type letter
        code: String,
        /// Temperature in °C
        temp_c: Real,
    },
    /// Voltage and Seebeck coefficient of one thermoelement versus platinum
    #[command(allow_negative_numbers = true)]
    Leg {
        /// Type letter
        code: String,
        /// positive or negative
        leg: Leg,
        /// Temperature in °C
        temp_c: Real,
    },
    /// Tabulate EMF and Seebeck coefficient over a temperature range as CSV
    #[command(allow_negative_numbers = true)]
    Sweep {
        /// Type letter
        code: String,
        /// First temperature in °C
        #[arg(long)]
        from: Real,
        /// Last temperature in °C (inclusive when on the step grid)
        #[arg(long)]
        to: Real,
        /// Temperature step in °C
        #[arg(long)]
        step: Real,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> CliResult<()> {
    let registry = ThermocoupleRegistry::standard()?;

    match command {
        Commands::Types { json } => cmd_types(&registry, json),
        Commands::Emf { code, temp_c } => cmd_emf(registry.get(&code)?, temp_c),
        Commands::Temp {
            code,
            volts,
            reference,
        } => cmd_temp(registry.get(&code)?, volts, reference),
        Commands::Seebeck { code, temp_c } => cmd_seebeck(registry.get(&code)?, temp_c),
        Commands::Dsdt { code, temp_c } => cmd_dsdt(registry.get(&code)?, temp_c),
        Commands::Leg { code, leg, temp_c } => cmd_leg(registry.get(&code)?, leg, temp_c),
        Commands::Sweep {
            code,
            from,
            to,
            step,
            output,
        } => cmd_sweep(registry.get(&code)?, from, to, step, output.as_deref()),
    }
}

#[derive(Serialize)]
struct TypeSummary<'a> {
    #[serde(flatten)]
    entry: &'a ThermocoupleCatalogEntry,
    capabilities: Vec<&'static str>,
}

fn cmd_types(registry: &ThermocoupleRegistry, json: bool) -> CliResult<()> {
    let summaries: Vec<TypeSummary<'_>> = registry
        .iter()
        .filter_map(|model| {
            catalog_entry(model.code()).map(|entry| TypeSummary {
                entry,
                capabilities: model.capabilities().iter().map(Quantity::label).collect(),
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        let entry = summary.entry;
        println!(
            "  {} - {} / {} ({} to {} °C)",
            entry.display_name,
            entry.positive_leg,
            entry.negative_leg,
            entry.range_c.0,
            entry.range_c.1
        );
        println!("      {}", summary.capabilities.join(", "));
    }
    Ok(())
}

fn cmd_emf(model: &ThermocoupleModel, temp_c: Real) -> CliResult<()> {
    let volts = model.temperature_to_voltage(temp_c)?;
    println!(
        "Type {} at {} °C: {:.9} V ({:.6} mV)",
        model.name(),
        temp_c,
        volts,
        volts * 1.0e3
    );
    Ok(())
}

fn cmd_temp(model: &ThermocoupleModel, volts: Real, reference: Option<Real>) -> CliResult<()> {
    let temp_c = match reference {
        Some(ref_c) => model.voltage_to_temperature_with_reference(volts, ref_c)?,
        None => model.voltage_to_temperature(volts)?,
    };
    match reference {
        Some(ref_c) => println!(
            "Type {} at {} V (reference {} °C): {:.4} °C",
            model.name(),
            volts,
            ref_c,
            temp_c
        ),
        None => println!("Type {} at {} V: {:.4} °C", model.name(), volts, temp_c),
    }
    Ok(())
}

fn cmd_seebeck(model: &ThermocoupleModel, temp_c: Real) -> CliResult<()> {
    let seebeck = model.temperature_to_seebeck(temp_c)?;
    println!(
        "Type {} at {} °C: {:.6} {}",
        model.name(),
        temp_c,
        seebeck,
        Quantity::Seebeck.output_unit()
    );
    Ok(())
}

fn cmd_dsdt(model: &ThermocoupleModel, temp_c: Real) -> CliResult<()> {
    let dsdt = model.temperature_to_dsdt(temp_c)?;
    println!(
        "Type {} at {} °C: {:.9} {}",
        model.name(),
        temp_c,
        dsdt,
        Quantity::DSeebeck.output_unit()
    );
    Ok(())
}

fn cmd_leg(model: &ThermocoupleModel, leg: Leg, temp_c: Real) -> CliResult<()> {
    let volts = model.temperature_to_leg_voltage(leg, temp_c)?;
    let seebeck = model.temperature_to_leg_seebeck(leg, temp_c)?;
    println!("Type {} {} leg at {} °C:", model.name(), leg, temp_c);
    println!("  EMF:     {:.9} V", volts);
    println!(
        "  Seebeck: {:.6} {}",
        seebeck,
        Quantity::LegSeebeck(leg).output_unit()
    );
    Ok(())
}

fn cmd_sweep(
    model: &ThermocoupleModel,
    from: Real,
    to: Real,
    step: Real,
    output: Option<&Path>,
) -> CliResult<()> {
    let csv = sweep_csv(model, from, to, step)?;

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Wrote sweep for Type {} to {}", model.name(), path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

/// Largest number of rows a single sweep may produce.
const MAX_SWEEP_ROWS: usize = 100_000;

fn sweep_temperatures(from: Real, to: Real, step: Real) -> CliResult<Vec<Real>> {
    let from = ensure_finite(from, "--from")?;
    let to = ensure_finite(to, "--to")?;
    let step = ensure_positive(step, "--step")?;
    if from > to {
        return Err(TcError::InvalidArg {
            what: format!("--from ({from}) is above --to ({to})"),
        }
        .into());
    }

    // Small slack so that `to` is kept when it lies on the grid.
    let intervals = ((to - from) / step + 1e-9).floor();
    if !(intervals < MAX_SWEEP_ROWS as Real) {
        return Err(TcError::InvalidArg {
            what: format!("sweep from {from} to {to} by {step} exceeds {MAX_SWEEP_ROWS} rows"),
        }
        .into());
    }
    let count = intervals as usize + 1;
    Ok((0..count).map(|i| from + i as Real * step).collect())
}

fn sweep_csv(model: &ThermocoupleModel, from: Real, to: Real, step: Real) -> CliResult<String> {
    let temps = sweep_temperatures(from, to, step)?;
    tracing::debug!(code = model.name(), rows = temps.len(), "sweep");

    let mut csv = String::from("temperature_c,voltage_v,seebeck_uv_per_k\n");
    for t in temps {
        let volts = model.temperature_to_voltage(t)?;
        let seebeck = match model.temperature_to_seebeck(t) {
            Ok(s) => s.to_string(),
            Err(ThermocoupleError::Unsupported { .. }) => String::new(),
            Err(e) => return Err(e.into()),
        };
        csv.push_str(&format!("{},{},{}\n", t, volts, seebeck));
    }
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_thermocouple::{Segment, TypeCode};

    const LINE: &[Segment] = &[Segment::new(0.0, 100.0, &[0.0, 40.0])];
    const INVERSE: &[Segment] = &[Segment::new(0.0, 4000.0, &[0.0, 0.025])];

    #[test]
    fn sweep_includes_end_point_on_grid() {
        let temps = sweep_temperatures(0.0, 1.0, 0.1).unwrap();
        assert_eq!(temps.len(), 11);
        assert!((temps[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sweep_rejects_bad_step() {
        assert!(sweep_temperatures(0.0, 10.0, 0.0).is_err());
        assert!(sweep_temperatures(0.0, 10.0, -1.0).is_err());
        assert!(sweep_temperatures(10.0, 0.0, 1.0).is_err());
        assert!(matches!(
            sweep_temperatures(0.0, f64::INFINITY, 1.0),
            Err(CliError::Core(TcError::NonFinite { what: "--to", .. }))
        ));
    }

    #[test]
    fn sweep_caps_row_count() {
        for (to, step) in [(1.0e6, 1.0e-300), (f64::MAX, 1.0), (1.0e6, 1.0)] {
            let err = sweep_temperatures(-270.0, to, step).unwrap_err();
            assert!(matches!(err, CliError::Core(TcError::InvalidArg { .. })), "{err}");
        }
        let temps = sweep_temperatures(0.0, (MAX_SWEEP_ROWS - 1) as Real, 1.0).unwrap();
        assert_eq!(temps.len(), MAX_SWEEP_ROWS);
    }

    #[test]
    fn sweep_leaves_seebeck_empty_when_unsupported() {
        let model = ThermocoupleModel::builder(TypeCode::T, LINE, INVERSE)
            .build()
            .unwrap();
        let csv = sweep_csv(&model, 0.0, 50.0, 25.0).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "temperature_c,voltage_v,seebeck_uv_per_k");
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("25,0.001,"));
        assert!(lines[2].ends_with(','));
    }

    #[test]
    fn sweep_aborts_out_of_range() {
        let model = ThermocoupleModel::builder(TypeCode::T, LINE, INVERSE)
            .build()
            .unwrap();
        let err = sweep_csv(&model, 90.0, 110.0, 10.0).unwrap_err();
        assert!(matches!(
            err,
            CliError::Thermocouple(ThermocoupleError::OutOfRange { .. })
        ));
    }

    #[test]
    fn sweep_fills_seebeck_for_reference_type() {
        let registry = ThermocoupleRegistry::standard().unwrap();
        let k = registry.get("K").unwrap();
        let csv = sweep_csv(k, 0.0, 100.0, 50.0).unwrap();
        for line in csv.lines().skip(1) {
            let fields: Vec<_> = line.split(',').collect();
            assert_eq!(fields.len(), 3);
            assert!(fields[2].parse::<f64>().is_ok());
        }
    }

    #[test]
    fn cli_parses_negative_temperatures() {
        let cli = Cli::try_parse_from(["tc", "emf", "k", "-100"]).unwrap();
        assert!(matches!(cli.command, Commands::Emf { temp_c, .. } if temp_c == -100.0));

        let cli = Cli::try_parse_from([
            "tc", "sweep", "T", "--from", "-200", "--to", "0", "--step", "50",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Sweep { from, .. } if from == -200.0));
    }

    #[test]
    fn cli_parses_leg_direction() {
        let cli = Cli::try_parse_from(["tc", "leg", "J", "negative", "100"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Leg {
                leg: Leg::Negative,
                ..
            }
        ));
    }
}
