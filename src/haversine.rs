//! Haversine distance estimator for route summaries.
//!
//! Uses great-circle distance between leg coordinates. Ignores the actual
//! rail/air network, which is fine for comparing candidate routes.

use crate::model::Leg;
use crate::traits::DistanceEstimator;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineEstimator;

impl HaversineEstimator {
    /// Calculate haversine distance between two points in kilometers.
    pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl DistanceEstimator for HaversineEstimator {
    fn distance_km(&self, from: &Leg, to: &Leg) -> Option<f64> {
        Some(Self::haversine_km(from.location?, to.location?))
    }
}

/// Estimator for callers without geodata; every distance is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDistance;

impl DistanceEstimator for NoDistance {
    fn distance_km(&self, _from: &Leg, _to: &Leg) -> Option<f64> {
        None
    }
}
