// Runtime configuration read from the environment.
//
// Variables
// - DOCS_PROGRESS_ADDR             bind address, default 0.0.0.0:8080
// - DOCS_PROGRESS_STORE_DIR        directory of the file store, default .docs-progress
// - DOCS_PROGRESS_TOTAL_SECTIONS   number of sections on the page, required, >= 1
// - DOCS_PROGRESS_CHANNEL_CAPACITY visibility queue size, default 64, 1..=65536

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "DOCS_PROGRESS_ADDR";
pub const STORE_DIR_VAR: &str = "DOCS_PROGRESS_STORE_DIR";
pub const TOTAL_SECTIONS_VAR: &str = "DOCS_PROGRESS_TOTAL_SECTIONS";
pub const CHANNEL_CAPACITY_VAR: &str = "DOCS_PROGRESS_CHANNEL_CAPACITY";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STORE_DIR: &str = ".docs-progress";
const DEFAULT_CHANNEL_CAPACITY: usize = 64;
const MAX_CHANNEL_CAPACITY: usize = 65_536;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub store_dir: PathBuf,
    pub total_sections: usize,
    pub channel_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_raw = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.parse().map_err(|_| ConfigError::Invalid {
            name: ADDR_VAR,
            value: addr_raw.clone(),
        })?;

        let store_dir = lookup(STORE_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));

        let total_sections = lookup(TOTAL_SECTIONS_VAR)
            .ok_or(ConfigError::Missing(TOTAL_SECTIONS_VAR))
            .and_then(|raw| positive(TOTAL_SECTIONS_VAR, raw))?;

        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            Some(raw) => match positive(CHANNEL_CAPACITY_VAR, raw.clone())? {
                capacity if capacity <= MAX_CHANNEL_CAPACITY => capacity,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: CHANNEL_CAPACITY_VAR,
                        value: raw,
                    });
                }
            },
            None => DEFAULT_CHANNEL_CAPACITY,
        };

        Ok(Self {
            addr,
            store_dir,
            total_sections,
            channel_capacity,
        })
    }
}

fn positive(name: &'static str, raw: String) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid { name, value: raw }),
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[rstest]
    fn it_should_apply_defaults() {
        let config = Config::from_lookup(lookup(&[(TOTAL_SECTIONS_VAR, "12")])).unwrap();
        assert_eq!(
            config,
            Config {
                addr: "0.0.0.0:8080".parse().unwrap(),
                store_dir: PathBuf::from(".docs-progress"),
                total_sections: 12,
                channel_capacity: 64,
            }
        );
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (ADDR_VAR, "127.0.0.1:9000"),
            (STORE_DIR_VAR, "/var/lib/docs-progress"),
            (TOTAL_SECTIONS_VAR, " 7 "),
            (CHANNEL_CAPACITY_VAR, "16"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.store_dir, PathBuf::from("/var/lib/docs-progress"));
        assert_eq!(config.total_sections, 7);
        assert_eq!(config.channel_capacity, 16);
    }

    #[rstest]
    fn it_should_accept_the_largest_channel_capacity() {
        let config = Config::from_lookup(lookup(&[
            (TOTAL_SECTIONS_VAR, "3"),
            (CHANNEL_CAPACITY_VAR, "65536"),
        ]))
        .unwrap();
        assert_eq!(config.channel_capacity, 65_536);
        let _ = crate::shared::infrastructure::viewport_observer::channel::visibility_channel(
            config.channel_capacity,
        );
    }

    #[rstest]
    fn it_should_require_the_section_count() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(TOTAL_SECTIONS_VAR))
        );
    }

    #[rstest]
    #[case(TOTAL_SECTIONS_VAR, "0")]
    #[case(TOTAL_SECTIONS_VAR, "-3")]
    #[case(TOTAL_SECTIONS_VAR, "many")]
    #[case(CHANNEL_CAPACITY_VAR, "0")]
    #[case(CHANNEL_CAPACITY_VAR, "65537")]
    #[case(CHANNEL_CAPACITY_VAR, "18446744073709551615")]
    #[case(ADDR_VAR, "localhost")]
    fn it_should_reject_invalid_values(#[case] name: &'static str, #[case] value: &str) {
        let mut vars = vec![(TOTAL_SECTIONS_VAR, "3")];
        vars.retain(|(k, _)| *k != name);
        vars.push((name, value));
        assert_eq!(
            Config::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid {
                name,
                value: value.to_string()
            })
        );
    }
}
