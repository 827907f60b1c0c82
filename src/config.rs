use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::aggregate::TOP_EMITTER_LIMIT;

pub const DEFAULT_DATA_PATH: &str = "co2_gdp_merged.csv";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve the global CO₂ emissions and GDP dashboard")]
pub struct Config {
    /// Merged CO₂/GDP CSV file
    #[arg(short, long, env = "CO2_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Address to listen on
    #[arg(long, env = "DASHBOARD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(short, long, env = "DASHBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of countries in the top emitters chart
    #[arg(
        long,
        env = "DASHBOARD_TOP",
        default_value_t = TOP_EMITTER_LIMIT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub top: usize,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 4] = ["CO2_DATA_PATH", "DASHBOARD_HOST", "DASHBOARD_PORT", "DASHBOARD_TOP"];

    #[test]
    fn defaults_listen_on_all_interfaces() {
        // Defaults only apply when the environment leaves them alone
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
        let config = Config::try_parse_from(["co2_dashboard"]).unwrap();

        assert_eq!(config.data, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.top, 10);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "co2_dashboard",
            "--data",
            "data/merged.csv",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--top",
            "5",
        ])
        .unwrap();

        assert_eq!(config.data, PathBuf::from("data/merged.csv"));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.top, 5);
    }

    #[test]
    fn zero_top_is_rejected() {
        assert!(Config::try_parse_from(["co2_dashboard", "--top", "0"]).is_err());
    }
}
