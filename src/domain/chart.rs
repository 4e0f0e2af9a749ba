//! Chart - Weekly Transaction Totals

use crate::constants::{CHART_MOCK_MIN, CHART_MOCK_SPAN};
use rand::Rng;

/// Day labels, Monday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// Axis values are rounded up to a multiple of this step
const AXIS_STEP: u64 = 10_000;

/// One bar of the weekly chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub total: u64,
}

/// Random weekly totals in `[CHART_MOCK_MIN, CHART_MOCK_MIN + CHART_MOCK_SPAN)`
pub fn mock_weekly_points(rng: &mut impl Rng) -> Vec<ChartPoint> {
    WEEKDAY_LABELS
        .iter()
        .map(|&label| ChartPoint {
            label,
            total: CHART_MOCK_MIN + rng.gen_range(0..CHART_MOCK_SPAN),
        })
        .collect()
}

/// Scaled layout of a bar chart: axis maximum, tick values and bar ratios
#[derive(Debug, Clone, PartialEq)]
pub struct BarScale {
    pub axis_max: u64,
    /// Tick values from top (axis_max) to bottom (0)
    pub ticks: Vec<u64>,
}

impl BarScale {
    /// Build a scale with `tick_count` evenly spaced ticks (at least two)
    pub fn new(points: &[ChartPoint], tick_count: usize) -> Self {
        let max = points.iter().map(|p| p.total).max().unwrap_or(0);
        let axis_max = max.div_ceil(AXIS_STEP).max(1) * AXIS_STEP;
        let intervals = tick_count.max(2) as u64 - 1;

        let ticks = (0..=intervals)
            .rev()
            .map(|i| axis_max * i / intervals)
            .collect();

        Self { axis_max, ticks }
    }

    /// Height of a bar relative to the plot, in `[0, 1]`
    pub fn ratio(&self, value: u64) -> f32 {
        (value as f64 / self.axis_max as f64).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn points(totals: &[u64]) -> Vec<ChartPoint> {
        totals
            .iter()
            .zip(WEEKDAY_LABELS)
            .map(|(total, label)| ChartPoint {
                label,
                total: *total,
            })
            .collect()
    }

    #[test]
    fn test_mock_points_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = mock_weekly_points(&mut rng);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].label, "Lun");
        assert_eq!(points[6].label, "Dom");
        for p in &points {
            assert!(p.total >= CHART_MOCK_MIN);
            assert!(p.total < CHART_MOCK_MIN + CHART_MOCK_SPAN);
        }
    }

    #[test]
    fn test_scale_rounds_up() {
        let scale = BarScale::new(&points(&[12_000, 48_500, 30_000]), 5);
        assert_eq!(scale.axis_max, 50_000);
        assert_eq!(scale.ticks, vec![50_000, 37_500, 25_000, 12_500, 0]);
        assert_eq!(scale.ratio(25_000), 0.5);
    }

    #[test]
    fn test_scale_exact_multiple() {
        let scale = BarScale::new(&points(&[60_000]), 4);
        assert_eq!(scale.axis_max, 60_000);
        assert_eq!(scale.ticks, vec![60_000, 40_000, 20_000, 0]);
        assert_eq!(scale.ratio(60_000), 1.0);
    }

    #[test]
    fn test_scale_empty() {
        let scale = BarScale::new(&[], 5);
        assert_eq!(scale.axis_max, 10_000);
        assert_eq!(scale.ratio(0), 0.0);
    }
}
