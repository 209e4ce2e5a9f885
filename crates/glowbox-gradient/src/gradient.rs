#![forbid(unsafe_code)]

//! Multi-stop color gradients sampled over `[0, 1]`.

use glowbox_style::Rgb;

/// Multi-stop color gradient. Stops are `(position, color)` pairs with
/// positions in `[0, 1]`; construction sorts them by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGradient {
    stops: Vec<(f64, Rgb)>,
}

impl ColorGradient {
    pub fn new(mut stops: Vec<(f64, Rgb)>) -> Self {
        stops.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Self { stops }
    }

    /// Gradient between exactly two colors.
    #[must_use]
    pub fn two_stop(start: Rgb, end: Rgb) -> Self {
        Self::new(vec![(0.0, start), (1.0, end)])
    }

    #[must_use]
    pub fn stops(&self) -> &[(f64, Rgb)] {
        &self.stops
    }

    /// Red through violet.
    #[must_use]
    pub fn rainbow() -> Self {
        Self::new(vec![
            (0.0, Rgb::new(255, 0, 0)),
            (0.17, Rgb::new(255, 127, 0)),
            (0.33, Rgb::new(255, 255, 0)),
            (0.5, Rgb::new(0, 255, 0)),
            (0.67, Rgb::new(0, 127, 255)),
            (0.83, Rgb::new(127, 0, 255)),
            (1.0, Rgb::new(255, 0, 255)),
        ])
    }

    /// Purple through pink and orange to pale yellow.
    #[must_use]
    pub fn sunset() -> Self {
        Self::new(vec![
            (0.0, Rgb::new(80, 20, 120)),
            (0.33, Rgb::new(255, 50, 120)),
            (0.66, Rgb::new(255, 150, 50)),
            (1.0, Rgb::new(255, 255, 150)),
        ])
    }

    /// Deep blue through cyan to seafoam.
    #[must_use]
    pub fn ocean() -> Self {
        Self::new(vec![
            (0.0, Rgb::new(10, 30, 100)),
            (0.5, Rgb::new(30, 180, 220)),
            (1.0, Rgb::new(150, 255, 200)),
        ])
    }

    /// Black through red and orange to near-white.
    #[must_use]
    pub fn fire() -> Self {
        Self::new(vec![
            (0.0, Rgb::new(0, 0, 0)),
            (0.2, Rgb::new(80, 10, 0)),
            (0.4, Rgb::new(200, 50, 0)),
            (0.6, Rgb::new(255, 150, 20)),
            (0.8, Rgb::new(255, 230, 100)),
            (1.0, Rgb::new(255, 255, 220)),
        ])
    }

    /// Dark frost blue to white.
    #[must_use]
    pub fn ice() -> Self {
        Self::new(vec![
            (0.0, Rgb::new(40, 60, 120)),
            (0.4, Rgb::new(100, 160, 220)),
            (0.7, Rgb::new(180, 220, 245)),
            (1.0, Rgb::new(240, 250, 255)),
        ])
    }

    /// Black through dark green to bright green.
    #[must_use]
    pub fn matrix() -> Self {
        Self::new(vec![
            (0.0, Rgb::new(0, 0, 0)),
            (0.5, Rgb::new(0, 100, 20)),
            (1.0, Rgb::new(0, 255, 65)),
        ])
    }

    /// Sample at `t`, clamped to `[0, 1]`. Interpolates linearly between
    /// the bracketing stops; positions at or beyond the ends return the
    /// end stop's exact color.
    #[must_use]
    pub fn sample(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);

        if self.stops.is_empty() {
            return Rgb::new(255, 255, 255);
        }
        if self.stops.len() == 1 {
            return self.stops[0].1;
        }

        let mut prev = &self.stops[0];
        for stop in &self.stops {
            if stop.0 >= t {
                if stop.0 == prev.0 {
                    return stop.1;
                }
                let local_t = (t - prev.0) / (stop.0 - prev.0);
                return prev.1.lerp(stop.1, local_t);
            }
            prev = stop;
        }

        self.stops.last().map_or(Rgb::new(255, 255, 255), |s| s.1)
    }
}
