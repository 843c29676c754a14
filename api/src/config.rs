use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::lastfm::LASTFM_API_URL;

#[derive(Parser, Debug, Clone)]
#[command(name = "gowon-lastfm")]
#[command(about = "show last listened tracks on last.fm", long_about = None)]
pub struct Config {
    /// last.fm api key
    #[arg(short = 'k', long, env = "GOWON_LASTFM_API_KEY")]
    pub api_key: String,

    /// Path to the kv db holding nick to user mappings
    #[arg(short = 'K', long, env = "GOWON_LASTFM_KV_PATH", default_value = "kv.db")]
    pub kv_path: PathBuf,

    /// Address the module listens on
    #[arg(short, long, env = "GOWON_LASTFM_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,

    /// last.fm api endpoint
    #[arg(long, env = "GOWON_LASTFM_API_URL", default_value = LASTFM_API_URL)]
    pub api_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["gowon-lastfm", "-k", "secret"]).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.kv_path, PathBuf::from("kv.db"));
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.api_url, LASTFM_API_URL);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "gowon-lastfm",
            "--api-key",
            "secret",
            "-K",
            "/var/lib/lastfm.db",
            "--addr",
            "127.0.0.1:9000",
            "--api-url",
            "http://localhost:1234/2.0/",
        ])
        .unwrap();
        assert_eq!(config.kv_path, PathBuf::from("/var/lib/lastfm.db"));
        assert_eq!(config.addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.api_url, "http://localhost:1234/2.0/");
    }
}
