use tracing::info;

use logoprep::core::params::ProcessingParams;
use logoprep::types::TargetSize;
use logoprep::{Error, process_file_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_target_size(size: &str) -> Result<TargetSize, AppError> {
    size.parse::<TargetSize>().map_err(|e| match e {
        Error::ZeroSize { .. } => AppError::ZeroSize {
            size: size.to_string(),
        },
        _ => AppError::InvalidSize {
            size: size.to_string(),
        },
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let size = parse_target_size(&args.size)?;
    let output = args.output.unwrap_or_else(|| args.input.clone());

    let params = ProcessingParams {
        size,
        radius: args.radius,
        format: args.format,
    };

    process_file_to_path(&args.input, &output, &params)?;
    info!("Successfully processed: {:?} -> {:?}\n", args.input, output);

    Ok(())
}
