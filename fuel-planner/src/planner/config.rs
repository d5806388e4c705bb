//! Vehicle configuration for the fuel planner.

/// Error returned for vehicle parameters that cannot describe a real tank.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid vehicle config: {field} must be a positive finite number, got {value}")]
pub struct InvalidConfig {
    field: &'static str,
    value: f64,
}

/// Range and efficiency of the vehicle being planned for.
///
/// Passed explicitly into every planning call so tests can use small tanks.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleConfig {
    /// Miles the vehicle covers on a full tank.
    max_range_miles: f64,

    /// Miles covered per unit of fuel.
    fuel_efficiency: f64,
}

impl VehicleConfig {
    /// Create a configuration, rejecting non-positive or non-finite values.
    pub fn new(max_range_miles: f64, fuel_efficiency: f64) -> Result<Self, InvalidConfig> {
        check_positive("max_range_miles", max_range_miles)?;
        check_positive("fuel_efficiency", fuel_efficiency)?;

        Ok(Self {
            max_range_miles,
            fuel_efficiency,
        })
    }

    /// Miles on a full tank.
    pub fn max_range_miles(&self) -> f64 {
        self.max_range_miles
    }

    /// Miles per unit of fuel.
    pub fn fuel_efficiency(&self) -> f64 {
        self.fuel_efficiency
    }

    /// Fuel units held by a full tank.
    pub fn tank_capacity_units(&self) -> f64 {
        self.max_range_miles / self.fuel_efficiency
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            max_range_miles: 500.0,
            fuel_efficiency: 10.0, // miles per gallon
        }
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), InvalidConfig> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidConfig { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = VehicleConfig::default();

        assert_eq!(config.max_range_miles(), 500.0);
        assert_eq!(config.fuel_efficiency(), 10.0);
        assert_eq!(config.tank_capacity_units(), 50.0);
    }

    #[test]
    fn custom_config() {
        let config = VehicleConfig::new(120.0, 8.0).unwrap();

        assert_eq!(config.max_range_miles(), 120.0);
        assert_eq!(config.fuel_efficiency(), 8.0);
        assert_eq!(config.tank_capacity_units(), 15.0);
    }

    #[test]
    fn rejects_non_positive() {
        assert!(VehicleConfig::new(0.0, 10.0).is_err());
        assert!(VehicleConfig::new(500.0, 0.0).is_err());
        assert!(VehicleConfig::new(-1.0, 10.0).is_err());
        assert!(VehicleConfig::new(500.0, -10.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(VehicleConfig::new(f64::NAN, 10.0).is_err());
        assert!(VehicleConfig::new(f64::INFINITY, 10.0).is_err());
        assert!(VehicleConfig::new(500.0, f64::NAN).is_err());
    }

    #[test]
    fn error_display() {
        let err = VehicleConfig::new(500.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid vehicle config: fuel_efficiency must be a positive finite number, got 0"
        );
    }
}
