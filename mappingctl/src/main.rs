use clap::Parser;

use filemap::conf::EnvConfigSettings;
use filemap::error::Result;

use process::{process_mapping_configs, process_schema_file};

mod process;

#[derive(Parser)]
struct CliArgs {
    /// Directory searched recursively for YAML mapping declarations
    #[clap(short='m', long, default_value = None)]
    mapping_configs: Option<std::path::PathBuf>,
    /// Avro schema or container file whose columns are resolved directly
    #[clap(short='s', long, default_value = None)]
    schema: Option<std::path::PathBuf>,
    /// yaml or json, overrides MAPPINGCTL_OUTPUT
    #[clap(short='o', long, default_value = None)]
    output: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = CliArgs::parse();
    let mut conf = EnvConfigSettings::init()?;
    if let Some(output) = args.output {
        conf.output = output.try_into()?;
    }

    if let Some(p) = args.schema {
        println!("{}", process_schema_file(&p, conf.output)?);
    }

    if let Some(p) = args.mapping_configs {
        for rendered in process_mapping_configs(p, &conf)? {
            println!("{rendered}");
        }
    }

    Ok(())
}
