//! PDF Stamper server
//!
//! Serves a fixed PDF template, stamped per-request with a name and roll
//! number, over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdf_stamper::server::{serve, AppState};

/// PDF Stamper - stamp names and roll numbers onto a PDF template
#[derive(Parser)]
#[command(name = "pdf-stamper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "PDF_STAMPER_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Path to the source PDF template
    #[arg(long, env = "PDF_STAMPER_TEMPLATE", default_value = "private.pdf")]
    template: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !cli.template.exists() {
        anyhow::bail!("template not found: {}", cli.template.display());
    }

    let state = AppState {
        template: cli.template,
    };

    serve(cli.bind, state).await.context("server failed")?;

    Ok(())
}
