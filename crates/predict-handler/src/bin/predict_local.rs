use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};

use predict_handler::config::{load_handler_config, HandlerConfig};
use predict_handler::handler::handle_invocation;
use predict_handler::logging;

fn main() -> Result<()> {
    logging::init();

    let matches = Command::new("predict-local")
        .version(clap::crate_version!())
        .about("Run the prediction handler once and print the response envelope")
        .arg(
            Arg::new("model_path")
                .short('m')
                .long("model")
                .help(
                    "Path to the model artifact (*.json). \
                     Overrides the config file and PREDICT_MODEL_PATH.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON handler configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the response JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[predict-local] Using config: {:?}", config_path);
            load_handler_config(config_path)?
        }
        None => HandlerConfig::from_env(),
    };
    if let Some(model_path) = matches.get_one::<PathBuf>("model_path") {
        config.model_path = model_path.clone();
    }

    let response = match handle_invocation(&config) {
        Ok(response) => response,
        Err(e) => {
            log::error!("Invocation failed: {:#}", e);
            std::process::exit(1)
        }
    };

    let output = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);
    Ok(())
}
