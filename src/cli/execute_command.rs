use crate::cli::{Cli, Commands, LayoutArgs, OutputFormat};
use crate::layout_calculator::{BlockLayoutParameters, SweepParameters, compute, sweep};
use crate::utils::format_bits;
use serde_json::{Value, json};
use std::error::Error;
use std::io::{self, Write};

/// Executes the parsed CLI command and writes its output to stdout.
///
/// Output is rendered in full before anything is written, so a failing
/// command never leaves partial output behind. Errors are returned to the
/// caller, which reports them on stderr and exits non-zero.
///
/// # References
/// - [`Commands`](crate::cli::Commands): Defines the available CLI commands.
/// - [`compute`](crate::layout_calculator::compute): The underlying calculator.
pub fn execute_command(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let output = match &cli.command {
        None => render_layout(&LayoutArgs::default(), None, OutputFormat::Text)?,

        Some(Commands::Calc {
            layout,
            total_slots,
            format,
        }) => render_layout(layout, *total_slots, *format)?,

        Some(Commands::Sweep {
            buckets_per_block,
            slots_per_bucket,
            fixed,
            format,
        }) => render_sweep(
            &fixed.sweep_parameters(buckets_per_block, slots_per_bucket),
            *format,
        )?,
    };

    let stdout = io::stdout();
    let mut stdout_handle = stdout.lock();
    stdout_handle.write_all(output.as_bytes())?;
    stdout_handle.flush()?;

    Ok(())
}

/// Renders the layout for `args`, optionally followed by the block count and
/// storage a filter with `total_slots` logical slots needs.
pub fn render_layout(
    args: &LayoutArgs,
    total_slots: Option<u64>,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let layout = compute(&BlockLayoutParameters::from(args))?;

    let sizing = match total_slots {
        Some(total_slots) => Some((
            layout.blocks_required(total_slots),
            layout.storage_bits(total_slots)?,
        )),
        None => None,
    };

    match format {
        OutputFormat::Text => {
            let mut out = String::new();

            for (key, value) in layout.fields() {
                out.push_str(&format!("{}: {}\n", key, value));
            }

            if let Some((blocks_required, storage_bits)) = sizing {
                out.push_str(&format!("blocks_required: {}\n", blocks_required));
                out.push_str(&format!("storage_bits: {}\n", storage_bits));
                out.push_str(&format!("storage_size: {}\n", format_bits(storage_bits)));
            }

            Ok(out)
        }

        OutputFormat::Json => {
            let mut value = serde_json::to_value(layout)?;

            if let (Some(object), Some((blocks_required, storage_bits))) =
                (value.as_object_mut(), sizing)
            {
                object.insert("blocks_required".into(), json!(blocks_required));
                object.insert("storage_bits".into(), json!(storage_bits));
            }

            Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
        }
    }
}

/// Renders one row per sweep combination. Combinations that cannot form a
/// block are listed with their error instead of aborting the sweep.
pub fn render_sweep(
    sweep_params: &SweepParameters,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let rows = sweep(sweep_params);

    match format {
        OutputFormat::Text => {
            let mut out = format!(
                "{:>17} {:>16} {:>22} {:>26} {:>22} {:>22}\n",
                "buckets_per_block",
                "slots_per_bucket",
                "fullness_counter_width",
                "max_fingerprints_per_block",
                "available_bits_for_ota",
                "slot_compression_ratio",
            );

            for row in &rows {
                let prefix = format!(
                    "{:>17} {:>16}",
                    row.parameters.buckets_per_block, row.parameters.slots_per_bucket
                );

                match &row.outcome {
                    Ok(layout) => out.push_str(&format!(
                        "{} {:>22} {:>26} {:>22} {:>22}\n",
                        prefix,
                        layout.fullness_counter_width,
                        format!("{:?}", layout.max_fingerprints_per_block),
                        format!("{:?}", layout.available_bits_for_ota),
                        format!("{:?}", layout.slot_compression_ratio),
                    )),
                    Err(err) => out.push_str(&format!("{} error: {}\n", prefix, err)),
                }
            }

            Ok(out)
        }

        OutputFormat::Json => {
            let values = rows
                .iter()
                .map(|row| match &row.outcome {
                    Ok(layout) => serde_json::to_value(layout),
                    Err(err) => Ok(json!({
                        "parameters": row.parameters,
                        "error": err.to_string(),
                    })),
                })
                .collect::<Result<Vec<Value>, _>>()?;

            Ok(format!("{}\n", serde_json::to_string_pretty(&values)?))
        }
    }
}
