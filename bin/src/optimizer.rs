//! A naive stand-in for the production portfolio optimizer.
//!
//! The engine only requires something implementing the `Optimizer` trait;
//! production deployments wire in a real constrained solver. For the CLI,
//! weights are allocated proportionally to (optionally demeaned) alpha, scaled
//! to the gross-exposure budget, and clamped to the per-position bound. This
//! honors the constraint list approximately, which is good enough to
//! demonstrate the end-to-end flow.

use ronda_traits::{Constraint, Optimizer, OptimizerRequest, Result, RondaError, TargetWeights};

pub(crate) struct ProportionalOptimizer;

impl Optimizer for ProportionalOptimizer {
    fn solve(&self, request: &OptimizerRequest) -> Result<TargetWeights> {
        let mut gross = 1.0;
        let mut cap = f64::INFINITY;
        let mut neutral = false;
        for constraint in &request.constraints {
            match constraint {
                Constraint::MaxGrossExposure(g) => gross = *g,
                Constraint::DollarNeutral => neutral = true,
                Constraint::PositionBounds { min, max } => cap = max.abs().min(min.abs()),
            }
        }

        if request.alpha.is_empty() {
            return Ok(TargetWeights::new());
        }

        let n = request.alpha.len() as f64;
        let mean = request.alpha.iter().map(|(_, v)| v).sum::<f64>() / n;
        let centered: Vec<(&str, f64)> = request
            .alpha
            .iter()
            .map(|(s, v)| (s.as_str(), if neutral { v - mean } else { v }))
            .collect();

        let spread: f64 = centered.iter().map(|(_, v)| v.abs()).sum();
        if spread < 1e-12 {
            return Err(RondaError::Infeasible(
                "alpha carries no spread to allocate".to_string(),
            ));
        }

        let scale = gross / spread;
        let mut weights = TargetWeights::new();
        for (symbol, value) in centered {
            weights.insert(symbol, (value * scale).clamp(-cap, cap));
        }
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ronda_traits::CrossSection;

    fn request(pairs: &[(&str, f64)]) -> OptimizerRequest {
        OptimizerRequest {
            as_of: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            alpha: pairs
                .iter()
                .map(|(s, v)| (s.to_string(), *v))
                .collect::<CrossSection>(),
            constraints: vec![
                Constraint::MaxGrossExposure(1.0),
                Constraint::DollarNeutral,
                Constraint::PositionBounds {
                    min: -0.5,
                    max: 0.5,
                },
            ],
        }
    }

    #[test]
    fn test_weights_are_dollar_neutral_and_within_gross() {
        let weights = ProportionalOptimizer
            .solve(&request(&[("A", 2.0), ("B", 1.0), ("C", -1.0), ("D", -2.0)]))
            .unwrap();

        let net: f64 = weights.iter().map(|(_, w)| w).sum();
        let gross: f64 = weights.iter().map(|(_, w)| w.abs()).sum();
        assert!(net.abs() < 1e-12);
        assert!(gross <= 1.0 + 1e-12);
    }

    #[test]
    fn test_empty_alpha_is_no_trades() {
        let mut req = request(&[]);
        req.alpha = CrossSection::new();
        let weights = ProportionalOptimizer.solve(&req).unwrap();
        assert!(weights.is_empty());
    }

    #[test]
    fn test_flat_alpha_is_infeasible() {
        let result = ProportionalOptimizer.solve(&request(&[("A", 1.0), ("B", 1.0)]));
        assert!(matches!(result, Err(RondaError::Infeasible(_))));
    }
}
