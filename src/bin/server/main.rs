#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! REST API for the booking application

use std::sync::Arc;

use anyhow::Result;
use booking_api::{
    domain::bookings::BookingServiceImpl,
    infrastructure::{
        database::postgres::{DatabaseConnectionDetails, PostgresDatabase},
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{HttpServer, HttpServerConfig},
        jobs::{EmailWorker, MailerJobQueue},
    },
};
use clap::Parser;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The database connection details
    #[clap(flatten)]
    pub db: DatabaseConnectionDetails,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let postgres = Arc::new(PostgresDatabase::new(&args.db.connection_string).await?);
    postgres.migrate().await?;

    let (queue, jobs) = MailerJobQueue::new();

    tokio::spawn(EmailWorker::new(SMTPMailer::new(args.smtp), jobs).run());

    let bookings = BookingServiceImpl::new(postgres, Arc::new(queue));

    HttpServer::new(bookings, args.server).await?.run().await
}
