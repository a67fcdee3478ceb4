//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::Parser;

/// Bridge Pingdom uptime-check history to Grafana annotations and metrics.
#[derive(Parser, Debug)]
#[command(name = "pingwatch")]
#[command(about = "Grafana SimpleJSON and Prometheus bridge for Pingdom uptime checks")]
pub struct Args {
    /// Address to serve the SimpleJSON and metrics endpoints on
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Pingdom API base URL
    #[arg(long, default_value = "https://api.pingdom.com/api/2.1")]
    pub api_url: String,

    /// Pingdom account email
    #[arg(long, env = "EMAIL", hide_env_values = true)]
    pub email: String,

    /// Pingdom account password
    #[arg(long, env = "PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Pingdom application key
    #[arg(long, env = "APIKEY", hide_env_values = true)]
    pub api_key: String,

    /// Provider request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from([
            "pingwatch",
            "--email",
            "ops@example.com",
            "--password",
            "hunter2",
            "--api-key",
            "app-key",
        ]);

        assert_eq!(args.listen.to_string(), "0.0.0.0:8080");
        assert_eq!(args.api_url, "https://api.pingdom.com/api/2.1");
        assert_eq!(args.timeout_secs, 10);
    }

    #[test]
    fn test_custom_listen_addr() {
        let args = Args::parse_from([
            "pingwatch",
            "--listen",
            "127.0.0.1:9090",
            "--email",
            "a@b.c",
            "--password",
            "p",
            "--api-key",
            "k",
        ]);

        assert_eq!(args.listen.to_string(), "127.0.0.1:9090");
    }
}
