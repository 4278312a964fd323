//! Server Configuration
//!
//! Parsed from command-line arguments with a plain flag loop:
//! `--bind <addr:port>` is required; everything else has a default.
//! Grants seed the in-memory access table as `<user>:<collection>:<modes>`
//! where modes is any combination of `r` and `w`.

use std::net::SocketAddr;

use anyhow::Result;

/// Default cap on submission bodies: 8 MB.
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 8_388_608;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub user: String,
    pub collection_id: String,
    pub can_read: bool,
    pub can_write: bool,
}

impl Grant {
    pub fn parse(spec: &str) -> Result<Grant> {
        let parts: Vec<&str> = spec.split(':').collect();
        if parts.len() != 3 {
            anyhow::bail!("invalid grant {:?}: expected <user>:<collection>:<modes>", spec);
        }

        let (user, collection_id, modes) = (parts[0], parts[1], parts[2]);
        if user.is_empty() || collection_id.is_empty() {
            anyhow::bail!("invalid grant {:?}: empty user or collection", spec);
        }
        if !modes.chars().all(|c| c == 'r' || c == 'w') {
            anyhow::bail!("invalid grant {:?}: modes must be 'r' and/or 'w'", spec);
        }

        Ok(Grant {
            user: user.to_string(),
            collection_id: collection_id.to_string(),
            can_read: modes.contains('r'),
            can_write: modes.contains('w'),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub max_content_length: u64,
    /// Report panics as 404 like the legacy deployment did, instead of 500.
    pub legacy_not_found: bool,
    pub grants: Vec<Grant>,
}

impl ServerConfig {
    pub fn from_args(args: &[String]) -> Result<ServerConfig> {
        let mut bind: Option<SocketAddr> = None;
        let mut max_content_length = DEFAULT_MAX_CONTENT_LENGTH;
        let mut legacy_not_found = false;
        let mut grants = Vec::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--bind requires a value"))?;
                    bind = Some(value.parse()?);
                    i += 2;
                }
                "--max-content-length" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--max-content-length requires a value"))?;
                    max_content_length = value.parse()?;
                    i += 2;
                }
                "--legacy-not-found" => {
                    legacy_not_found = true;
                    i += 1;
                }
                "--grant" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--grant requires a value"))?;
                    grants.push(Grant::parse(value)?);
                    i += 2;
                }
                other => {
                    anyhow::bail!("unknown argument {:?}", other);
                }
            }
        }

        let bind = bind.ok_or_else(|| anyhow::anyhow!("--bind is required"))?;

        Ok(ServerConfig {
            bind,
            max_content_length,
            legacy_not_found,
            grants,
        })
    }
}
