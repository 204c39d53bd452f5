mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use riskdesk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
