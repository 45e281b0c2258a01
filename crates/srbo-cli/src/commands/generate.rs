use crate::cli::GenerateArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use srbogrid::core::io::table::write_records_to_path;
use srbogrid::workflows::generate::BondOrderGrid;
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args.system)?;

    info!("Invoking the grid generation workflow...");
    let grid = BondOrderGrid::new(app_config.params, &app_config.grid_config)?;

    if !args.no_summary {
        print!("{}", grid.summary());
    }

    if let Some(output) = &args.output {
        info!("Writing {} grid point(s) to {:?}", grid.npoints(), output);
        write_records_to_path(&grid.records(), output)?;
        println!(
            "✓ Grid with {} point(s) written to: {}",
            grid.npoints(),
            output.display()
        );
    }

    Ok(())
}
