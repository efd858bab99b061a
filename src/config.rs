//! Server configuration

use crate::engine::DEFAULT_INTEREST_RATE;
use clap::Parser;
use std::net::SocketAddr;

/// HTTP server settings; every flag can also come from the environment
#[derive(Debug, Clone, Parser)]
#[command(name = "mortgage_server", version, about = "Mortgage calculator HTTP API")]
pub struct ServerConfig {
    /// IP address to bind
    #[arg(long, env = "MORTGAGE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Annual interest rate (percent) the engine starts with
    #[arg(long, env = "MORTGAGE_INITIAL_RATE", default_value_t = DEFAULT_INTEREST_RATE)]
    pub initial_rate: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            initial_rate: DEFAULT_INTEREST_RATE,
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr: SocketAddr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}
