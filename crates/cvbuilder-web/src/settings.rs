use std::net::SocketAddr;

use cvbuilder_core::config_file::ConfigFile;
use cvbuilder_ingest::DEFAULT_MAX_UPLOAD_BYTES;

pub const DEFAULT_ADDR: &str = "0.0.0.0:5001";

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl ServerSettings {
    /// Resolve settings: env vars > config file > defaults.
    ///
    /// `env` looks up a variable by name; pass `|k| std::env::var(k).ok()`
    /// outside tests.
    pub fn resolve(
        file: &ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let addr = env("CVBUILDER_ADDR")
            .or_else(|| file.server.as_ref().and_then(|s| s.addr.clone()))
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address {addr:?}: {e}"))?;

        let max_upload_mb = match env("CVBUILDER_MAX_UPLOAD_MB") {
            Some(v) => Some(v.trim().parse::<usize>().map_err(|_| {
                anyhow::anyhow!("CVBUILDER_MAX_UPLOAD_MB must be a whole number, got {v:?}")
            })?),
            None => file
                .upload
                .as_ref()
                .and_then(|u| u.max_size_mb)
                .map(|mb| mb as usize),
        };
        let max_upload_bytes = match max_upload_mb {
            Some(mb) => mb
                .checked_mul(1024 * 1024)
                .ok_or_else(|| anyhow::anyhow!("upload limit of {mb}MB is too large"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            addr,
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvbuilder_core::config_file::{ServerConfig, UploadConfig};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults() {
        let s = ServerSettings::resolve(&ConfigFile::default(), no_env).unwrap();
        assert_eq!(s.addr, "0.0.0.0:5001".parse().unwrap());
        assert_eq!(s.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn config_file_over_defaults() {
        let file = ConfigFile {
            server: Some(ServerConfig {
                addr: Some("127.0.0.1:8080".into()),
            }),
            upload: Some(UploadConfig {
                max_size_mb: Some(10),
            }),
            ..Default::default()
        };
        let s = ServerSettings::resolve(&file, no_env).unwrap();
        assert_eq!(s.addr.port(), 8080);
        assert_eq!(s.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn env_over_config_file() {
        let file = ConfigFile {
            server: Some(ServerConfig {
                addr: Some("127.0.0.1:8080".into()),
            }),
            ..Default::default()
        };
        let env = |k: &str| match k {
            "CVBUILDER_ADDR" => Some("127.0.0.1:9000".to_string()),
            "CVBUILDER_MAX_UPLOAD_MB" => Some("2".to_string()),
            _ => None,
        };
        let s = ServerSettings::resolve(&file, env).unwrap();
        assert_eq!(s.addr.port(), 9000);
        assert_eq!(s.max_upload_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn bad_values_are_errors() {
        let env = |k: &str| (k == "CVBUILDER_ADDR").then(|| "not-an-addr".to_string());
        assert!(ServerSettings::resolve(&ConfigFile::default(), env).is_err());

        let env = |k: &str| (k == "CVBUILDER_MAX_UPLOAD_MB").then(|| "five".to_string());
        assert!(ServerSettings::resolve(&ConfigFile::default(), env).is_err());

        let env =
            |k: &str| (k == "CVBUILDER_MAX_UPLOAD_MB").then(|| "17592186044416".to_string());
        let err = ServerSettings::resolve(&ConfigFile::default(), env).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
