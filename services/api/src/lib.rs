mod cli;
mod infra;
mod report;
mod routes;
mod server;

use design_catalog::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
