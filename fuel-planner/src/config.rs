//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::planner::VehicleConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Default catalog refresh interval (24 hours).
const DEFAULT_REFRESH: Duration = Duration::from_secs(24 * 60 * 60);

/// Settings for the HTTP server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Fuel price CSV (`FUEL_STATIONS_PATH`).
    pub stations_path: Option<PathBuf>,

    /// Vehicle range and efficiency (`MAX_RANGE_MILES`, `FUEL_EFFICIENCY_MPU`).
    pub vehicle: VehicleConfig,

    /// How often to re-read the catalog file (`CATALOG_REFRESH_SECS`).
    pub refresh_interval: Duration,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through a key lookup.
    ///
    /// Unset variables take their defaults. Unparseable values are logged
    /// and also fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = parse_or("BIND_ADDR", &lookup, defaults.bind_addr);

        let stations_path = lookup("FUEL_STATIONS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let max_range = parse_or(
            "MAX_RANGE_MILES",
            &lookup,
            defaults.vehicle.max_range_miles(),
        );
        let efficiency = parse_or(
            "FUEL_EFFICIENCY_MPU",
            &lookup,
            defaults.vehicle.fuel_efficiency(),
        );
        let vehicle = VehicleConfig::new(max_range, efficiency).unwrap_or_else(|e| {
            warn!(error = %e, "using default vehicle config");
            defaults.vehicle.clone()
        });

        let refresh_secs = parse_or(
            "CATALOG_REFRESH_SECS",
            &lookup,
            defaults.refresh_interval.as_secs(),
        );
        let refresh_interval = if refresh_secs == 0 {
            warn!("CATALOG_REFRESH_SECS must be positive; using default");
            defaults.refresh_interval
        } else {
            Duration::from_secs(refresh_secs)
        };

        Self {
            bind_addr,
            stations_path,
            vehicle,
            refresh_interval,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            stations_path: None,
            vehicle: VehicleConfig::default(),
            refresh_interval: DEFAULT_REFRESH,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, lookup: impl Fn(&str) -> Option<String>, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparseable environment variable");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert!(config.stations_path.is_none());
        assert_eq!(config.vehicle, VehicleConfig::default());
        assert_eq!(config.refresh_interval, Duration::from_secs(86400));
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("FUEL_STATIONS_PATH", "/data/prices.csv"),
            ("MAX_RANGE_MILES", "400"),
            ("FUEL_EFFICIENCY_MPU", "8"),
            ("CATALOG_REFRESH_SECS", "600"),
        ]);

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.stations_path, Some(PathBuf::from("/data/prices.csv")));
        assert_eq!(config.vehicle.max_range_miles(), 400.0);
        assert_eq!(config.vehicle.fuel_efficiency(), 8.0);
        assert_eq!(config.refresh_interval, Duration::from_secs(600));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("BIND_ADDR", "not an address"),
            ("MAX_RANGE_MILES", "lots"),
            ("CATALOG_REFRESH_SECS", "-5"),
        ]);

        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(config.vehicle.max_range_miles(), 500.0);
        assert_eq!(config.refresh_interval, DEFAULT_REFRESH);
    }

    #[test]
    fn zero_refresh_interval_falls_back() {
        let config = config_from(&[("CATALOG_REFRESH_SECS", "0")]);
        assert_eq!(config.refresh_interval, DEFAULT_REFRESH);
    }

    #[test]
    fn invalid_vehicle_falls_back_to_default() {
        let config = config_from(&[("FUEL_EFFICIENCY_MPU", "0")]);
        assert_eq!(config.vehicle, VehicleConfig::default());
    }

    #[test]
    fn blank_stations_path_is_unset() {
        let config = config_from(&[("FUEL_STATIONS_PATH", "  ")]);
        assert!(config.stations_path.is_none());
    }
}
