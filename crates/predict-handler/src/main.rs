use lambda_runtime::{run, service_fn, Error};

use predict_handler::handler::function_handler;
use predict_handler::logging;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    log::info!("[predict-handler] Starting Lambda runtime");

    run(service_fn(function_handler)).await
}
