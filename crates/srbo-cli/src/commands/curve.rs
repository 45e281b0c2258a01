use crate::cli::CurveArgs;
use crate::config::builder::build_config;
use crate::config::defaults::DefaultsConfig;
use crate::error::Result;
use srbogrid::core::io::table::write_records_to_path;
use srbogrid::workflows::generate::BondOrderGrid;
use tracing::info;

pub fn run(args: CurveArgs) -> Result<()> {
    let app_config = build_config(&args.system)?;
    let grid = BondOrderGrid::new(app_config.params, &app_config.grid_config)?;

    let samples = args
        .samples
        .unwrap_or(DefaultsConfig::default().curve_samples);
    let mut records = grid.potential_curve(samples)?;
    records.extend(grid.grid_overlay());

    info!(
        "Writing {} curve sample(s) and {} grid point(s) to {:?}",
        samples,
        grid.npoints(),
        &args.output
    );
    write_records_to_path(&records, &args.output)?;
    println!(
        "✓ Reference curve written to: {}",
        args.output.display()
    );

    Ok(())
}
