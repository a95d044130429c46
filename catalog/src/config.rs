// Catalog
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Runtime configuration of the service.

use catalog_core::env::get_optional_var;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Address to bind to when none is configured.
const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Port to listen on when none is configured.
const DEFAULT_PORT: u16 = 3000;

/// Options to start the service.
#[derive(Debug, PartialEq)]
pub struct Config {
    /// IP address to bind the server to.
    pub address: IpAddr,

    /// TCP port to listen on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { address: DEFAULT_ADDRESS, port: DEFAULT_PORT }
    }
}

impl Config {
    /// Initializes the configuration from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use the optional variables `<prefix>_ADDRESS` and `<prefix>_PORT`.
    pub fn from_env(prefix: &str) -> Result<Config, String> {
        Ok(Config {
            address: get_optional_var::<IpAddr>(prefix, "ADDRESS")?.unwrap_or(DEFAULT_ADDRESS),
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(DEFAULT_PORT),
        })
    }

    /// Returns the socket address the server should listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(["CONFIG_TEST_ADDRESS", "CONFIG_TEST_PORT"], || {
            let config = Config::from_env("CONFIG_TEST").unwrap();
            assert_eq!(Config::default(), config);
            assert_eq!("127.0.0.1:3000", config.bind_addr().to_string());
        });
    }

    #[test]
    fn test_from_env_all_present() {
        temp_env::with_vars(
            [("CONFIG_TEST_ADDRESS", Some("0.0.0.0")), ("CONFIG_TEST_PORT", Some("8080"))],
            || {
                let config = Config::from_env("CONFIG_TEST").unwrap();
                assert_eq!(
                    Config { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 8080 },
                    config
                );
            },
        );
    }

    #[test]
    fn test_from_env_ipv6() {
        temp_env::with_vars(
            [("CONFIG_TEST_ADDRESS", Some("::1")), ("CONFIG_TEST_PORT", None::<&str>)],
            || {
                let config = Config::from_env("CONFIG_TEST").unwrap();
                assert_eq!("[::1]:3000", config.bind_addr().to_string());
            },
        );
    }

    #[test]
    fn test_from_env_bad_port() {
        temp_env::with_vars(
            [("CONFIG_TEST_ADDRESS", None), ("CONFIG_TEST_PORT", Some("70000"))],
            || {
                let err = Config::from_env("CONFIG_TEST").unwrap_err();
                assert!(err.contains("CONFIG_TEST_PORT"));
            },
        );
    }

    #[test]
    fn test_from_env_bad_address() {
        temp_env::with_var("CONFIG_TEST_ADDRESS", Some("localhost"), || {
            let err = Config::from_env("CONFIG_TEST").unwrap_err();
            assert!(err.contains("CONFIG_TEST_ADDRESS"));
        });
    }
}
