use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::ops::RangeInclusive;

use crate::errors::{GraphError, GraphResult};

pub const REPULSION_RANGE: RangeInclusive<f64> = 500.0..=10_000.0;
pub const SPRING_LENGTH_RANGE: RangeInclusive<f64> = 100.0..=500.0;
pub const DAMPING_RANGE: RangeInclusive<f64> = 0.1..=1.0;
pub const CENTRAL_GRAVITY_RANGE: RangeInclusive<f64> = 0.0..=0.5;

/// Fixed stiffness of the barnesHut springs
pub const SPRING_CONSTANT: f64 = 0.005;

/// User-tunable physics of the network view.
///
/// The values are handed to vis-network unchanged, except repulsion which
/// becomes a negative `gravitationalConstant`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsSettings {
    /// Higher values push nodes further apart
    pub repulsion: f64,
    pub spring_length: f64,
    /// Friction; higher settles faster
    pub damping: f64,
    /// Pull towards the centre of the canvas
    pub central_gravity: f64,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            repulsion: 5000.0,
            spring_length: 300.0,
            damping: 0.95,
            central_gravity: 0.1,
        }
    }
}

impl PhysicsSettings {
    pub fn validate(&self) -> GraphResult<()> {
        check("repulsion", self.repulsion, &REPULSION_RANGE)?;
        check("spring_length", self.spring_length, &SPRING_LENGTH_RANGE)?;
        check("damping", self.damping, &DAMPING_RANGE)?;
        check("central_gravity", self.central_gravity, &CENTRAL_GRAVITY_RANGE)
    }

    /// The barnesHut solver block
    pub fn barnes_hut(&self) -> Value {
        json!({
            "gravitationalConstant": -self.repulsion,
            "centralGravity": self.central_gravity,
            "springLength": self.spring_length,
            "springConstant": SPRING_CONSTANT,
            "damping": self.damping,
            "avoidOverlap": 1.0
        })
    }

    /// Complete vis-network options for the recommendation network
    pub fn network_options(&self) -> Value {
        json!({
            "nodes": {
                "font": { "size": 14, "face": "arial" }
            },
            "edges": {
                "smooth": { "enabled": true, "type": "continuous", "roundness": 0.5 }
            },
            "layout": { "improvedLayout": true },
            "physics": {
                "enabled": true,
                "solver": "barnesHut",
                "barnesHut": self.barnes_hut(),
                "stabilization": {
                    "enabled": true,
                    "iterations": 400,
                    "fit": true,
                    "updateInterval": 10,
                    "onlyDynamicEdges": false
                },
                "adaptiveTimestep": true
            },
            "interaction": {
                "hover": true,
                "tooltipDelay": 100,
                "navigationButtons": true,
                "keyboard": true,
                "zoomView": true,
                "dragView": true,
                "dragNodes": true
            }
        })
    }
}

/// Accept `value` if it is a finite number inside `range`
pub(crate) fn check(name: &str, value: f64, range: &RangeInclusive<f64>) -> GraphResult<()> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(GraphError::InvalidParameter(format!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PhysicsSettings::default().validate().is_ok());
    }

    #[test]
    fn test_boundaries_accepted_and_outside_rejected() {
        let low = PhysicsSettings {
            repulsion: 500.0,
            spring_length: 100.0,
            damping: 0.1,
            central_gravity: 0.0,
        };
        assert!(low.validate().is_ok());

        let too_bouncy = PhysicsSettings { damping: 1.05, ..Default::default() };
        let err = too_bouncy.validate().unwrap_err();
        assert!(err.to_string().contains("damping"));

        let nan = PhysicsSettings { repulsion: f64::NAN, ..Default::default() };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_options_carry_user_values() {
        let physics = PhysicsSettings {
            repulsion: 7500.0,
            spring_length: 250.0,
            damping: 0.5,
            central_gravity: 0.3,
        };
        let options = physics.network_options();
        let solver = &options["physics"]["barnesHut"];

        assert_eq!(solver["gravitationalConstant"], -7500.0);
        assert_eq!(solver["springLength"], 250.0);
        assert_eq!(solver["damping"], 0.5);
        assert_eq!(solver["centralGravity"], 0.3);
        assert_eq!(solver["springConstant"], SPRING_CONSTANT);
        assert_eq!(options["physics"]["stabilization"]["iterations"], 400);
        assert_eq!(options["edges"]["smooth"]["type"], "continuous");
    }
}
