#![allow(dead_code)]

use crate::prospects::models::SignalSet;

/// Decimal places kept by `score`.
const SCORE_PRECISION: i32 = 4;

#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub industry_match: f64,
    pub funding_signal: f64,
    pub hiring_signal: f64,
    pub tech_match: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            industry_match: 0.4,
            funding_signal: 0.3,
            hiring_signal: 0.2,
            tech_match: 0.1,
        }
    }
}

/// Funding sub-signal: recent round, older funding, or nothing known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingSignal {
    None,
    Stale,
    Recent,
}

impl FundingSignal {
    pub fn value(self) -> f64 {
        match self {
            FundingSignal::None => 0.0,
            FundingSignal::Stale => 0.5,
            FundingSignal::Recent => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechMatch {
    None,
    Partial,
    Strong,
}

impl TechMatch {
    pub fn value(self) -> f64 {
        match self {
            TechMatch::None => 0.0,
            TechMatch::Partial => 0.5,
            TechMatch::Strong => 1.0,
        }
    }
}

/// The four judgements the confidence formula combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubSignals {
    pub industry_match: bool,
    pub funding: FundingSignal,
    pub recent_hiring: bool,
    pub tech: TechMatch,
}

impl SubSignals {
    pub fn score(&self) -> f64 {
        score(
            if self.industry_match { 1.0 } else { 0.0 },
            self.funding.value(),
            if self.recent_hiring { 1.0 } else { 0.0 },
            self.tech.value(),
        )
    }
}

/// Confidence: 0.4*industry_match + 0.3*funding_signal + 0.2*hiring_signal + 0.1*tech_match,
/// clamped to [0, 1] and rounded to 4 decimal places.
pub fn score(industry_match: f64, funding_signal: f64, hiring_signal: f64, tech_match: f64) -> f64 {
    compute_confidence(
        industry_match,
        funding_signal,
        hiring_signal,
        tech_match,
        &ScoringWeights::default(),
    )
}

pub fn compute_confidence(
    industry_match: f64,
    funding_signal: f64,
    hiring_signal: f64,
    tech_match: f64,
    weights: &ScoringWeights,
) -> f64 {
    let raw = weights.industry_match * industry_match
        + weights.funding_signal * funding_signal
        + weights.hiring_signal * hiring_signal
        + weights.tech_match * tech_match;
    round_to(raw.clamp(0.0, 1.0), SCORE_PRECISION)
}

/// Range of confidences the formula can produce for a record with these signals.
///
/// `new_funding` and `recent_hiring` are the only sub-signals a record carries;
/// industry and tech judgements, and stale funding, are free within their domains.
pub fn confidence_bounds(signals: &SignalSet) -> (f64, f64) {
    let (funding_min, funding_max) = if signals.new_funding {
        (FundingSignal::Recent, FundingSignal::Recent)
    } else {
        (FundingSignal::None, FundingSignal::Stale)
    };
    let weakest = SubSignals {
        industry_match: false,
        funding: funding_min,
        recent_hiring: signals.recent_hiring,
        tech: TechMatch::None,
    };
    let strongest = SubSignals {
        industry_match: true,
        funding: funding_max,
        recent_hiring: signals.recent_hiring,
        tech: TechMatch::Strong,
    };
    (weakest.score(), strongest.score())
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_all_ones() {
        assert_eq!(score(1.0, 1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_score_all_zeros() {
        assert_eq!(score(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_score_partial() {
        // 0.4*1 + 0.3*0.5 + 0.2*0 + 0.1*0.5 = 0.6
        assert_eq!(score(1.0, 0.5, 0.0, 0.5), 0.6);
    }

    #[test]
    fn test_score_matches_formula_over_discrete_domain() {
        for i in [0.0, 1.0] {
            for f in [0.0, 0.5, 1.0] {
                for h in [0.0, 1.0] {
                    for t in [0.0, 0.5, 1.0] {
                        let expected = 0.4 * i + 0.3 * f + 0.2 * h + 0.1 * t;
                        let got = score(i, f, h, t);
                        assert!(
                            (got - expected).abs() < 1e-4,
                            "score({i}, {f}, {h}, {t}) = {got}, expected {expected}"
                        );
                        assert!((0.0..=1.0).contains(&got));
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_clamped() {
        assert_eq!(score(2.0, 2.0, 2.0, 2.0), 1.0);
        assert_eq!(score(-1.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_score_is_rounded_to_four_places() {
        let s = score(0.0, 0.0, 0.0, 0.123_456);
        assert_eq!(s, 0.0123);
    }

    #[test]
    fn test_sub_signals_score() {
        let signals = SubSignals {
            industry_match: true,
            funding: FundingSignal::Stale,
            recent_hiring: false,
            tech: TechMatch::Partial,
        };
        assert_eq!(signals.score(), 0.6);
    }

    #[test]
    fn test_custom_weights() {
        let w = ScoringWeights {
            industry_match: 1.0,
            funding_signal: 0.0,
            hiring_signal: 0.0,
            tech_match: 0.0,
        };
        assert_eq!(compute_confidence(1.0, 1.0, 1.0, 1.0, &w), 1.0);
        assert_eq!(compute_confidence(0.0, 1.0, 1.0, 1.0, &w), 0.0);
    }

    #[test]
    fn test_bounds_with_both_signals() {
        let (min, max) = confidence_bounds(&SignalSet {
            recent_hiring: true,
            new_funding: true,
        });
        assert_eq!(min, 0.5);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn test_bounds_without_signals() {
        let (min, max) = confidence_bounds(&SignalSet {
            recent_hiring: false,
            new_funding: false,
        });
        assert_eq!(min, 0.0);
        // 0.4 + 0.15 + 0.1
        assert_eq!(max, 0.65);
    }
}
