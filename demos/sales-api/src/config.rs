use std::net::SocketAddr;

use clap::Parser;

/// Command-line and environment configuration for the API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "sales-api", about = "Serve generated sales datasets over HTTP")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "SALES_API_ADDR", default_value = "0.0.0.0:5000")]
    pub addr: SocketAddr,

    /// Largest dataset a single generate request may ask for
    #[arg(long, env = "SALES_API_MAX_RECORDS", default_value_t = 100_000)]
    pub max_records: usize,

    /// Sessions kept in memory before the oldest is evicted
    #[arg(long, env = "SALES_API_MAX_SESSIONS", default_value_t = 1024)]
    pub max_sessions: usize,
}
