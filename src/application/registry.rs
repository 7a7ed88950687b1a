// Capability negotiation between an embedding host and the connectors
use crate::domain::error::MtError;
use crate::domain::model::Backend;
use crate::infrastructure::config::Config;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const REQUIRED_HOST_VERSION: &str = "5.8.0";

/// `major.minor.patch` with an optional `_update` suffix, e.g. `5.8.0_2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostVersion {
    parts: [u32; 3],
    update: u32,
}

impl FromStr for HostVersion {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || MtError::Config(format!("Unsupported host version: {}", s));
        let (version, update) = match s.trim().split_once('_') {
            Some((v, u)) => (v, u.parse::<u32>().map_err(|_| unsupported())?),
            None => (s.trim(), 0),
        };

        let mut parts = [0u32; 3];
        let mut count = 0;
        for (i, piece) in version.split('.').enumerate() {
            if i >= 3 {
                return Err(unsupported());
            }
            parts[i] = piece.parse().map_err(|_| unsupported())?;
            count += 1;
        }
        if count == 0 {
            return Err(unsupported());
        }
        Ok(Self { parts, update })
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}_{}",
            self.parts[0], self.parts[1], self.parts[2], self.update
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectorInfo {
    pub backend: Backend,
    pub name: &'static str,
    pub configurable: bool,
    pub enabled: bool,
}

/// Connectors usable by a host of the given version.
///
/// Older hosts get a configuration error naming the required version.
pub fn negotiate(host_version: &str, config: &Config) -> Result<Vec<ConnectorInfo>, MtError> {
    let host: HostVersion = host_version.parse()?;
    let required: HostVersion = REQUIRED_HOST_VERSION.parse()?;

    if host.cmp(&required) == Ordering::Less {
        return Err(MtError::Config(format!(
            "Connectors cannot be loaded because host version {} is lower than required version {}",
            host, required
        )));
    }

    Ok(Backend::ALL
        .iter()
        .map(|&backend| ConnectorInfo {
            backend,
            name: backend.display_name(),
            configurable: true,
            enabled: config.is_enabled(backend),
        })
        .collect())
}
