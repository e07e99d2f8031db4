mod cli;
mod infra;
mod render;
mod routes;
mod server;
mod wizard;

use interview_ready::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
