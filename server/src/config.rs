use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

pub const DEFAULT_PORT: u16 = 5000;

/// Where the HTTP server listens.
///
/// Every field can come from a command-line flag or from the environment
/// (including a `.env` file loaded before parsing).
#[derive(Debug, Clone, Parser)]
#[command(name = "fargate-app")]
#[command(about = "Hello world HTTP service with a mounted blueprint")]
pub struct ServerConfig {
    #[arg(
        long,
        env = "APP_HOST",
        default_value_t = DEFAULT_HOST,
        help = "Interface to bind"
    )]
    pub host: IpAddr,

    #[arg(
        long,
        env = "APP_PORT",
        default_value_t = DEFAULT_PORT,
        help = "Port to bind (0 picks a free one)"
    )]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr { SocketAddr::new(self.host, self.port) }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.socket_addr(), "127.0.0.1:5000".parse().unwrap());
    }

    #[test]
    fn test_parse_without_arguments_matches_default() {
        let config = ServerConfig::try_parse_from(["fargate-app"]).unwrap();

        assert_eq!(config.socket_addr(), ServerConfig::default().socket_addr());
    }

    #[test]
    fn test_fields_are_bound_to_environment() {
        let command = ServerConfig::command();

        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };

        assert_eq!(env_of("host").as_deref(), Some("APP_HOST"));
        assert_eq!(env_of("port").as_deref(), Some("APP_PORT"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "fargate-app",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_ipv6_host() {
        let config =
            ServerConfig::try_parse_from(["fargate-app", "--host", "::1"])
                .unwrap();

        assert!(config.host.is_ipv6());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result =
            ServerConfig::try_parse_from(["fargate-app", "--port", "70000"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "fargate-app",
            "--host",
            "not-an-ip",
        ]);

        assert!(result.is_err());
    }
}
