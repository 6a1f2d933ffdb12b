//! Linear fade-out envelope.
//!
//! Every beep is shaped by a single linear ramp that starts at full gain and
//! falls towards a floor. The floor is never reached: the last sample of an
//! `n`-sample tone sits at `floor + depth / n`, so the tail is soft but the
//! tone never goes silent.

/// Linear fade-out parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeOut {
    /// Gain at the first sample.
    pub start: f64,
    /// Total gain drop across the tone.
    pub depth: f64,
}

impl Default for FadeOut {
    /// 1.0 down towards 0.3.
    fn default() -> Self {
        Self {
            start: 1.0,
            depth: 0.7,
        }
    }
}

impl FadeOut {
    /// Gain for sample `index` of a tone with `total` samples.
    ///
    /// `1.0 - (index / total) * 0.7` with the default parameters.
    #[inline]
    pub fn gain(&self, index: usize, total: usize) -> f64 {
        if total == 0 {
            return self.start;
        }
        self.start - (index as f64 / total as f64) * self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fade() {
        let fade = FadeOut::default();
        assert_eq!(fade.start, 1.0);
        assert!((fade.start - fade.depth - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_first_sample_full_gain() {
        let fade = FadeOut::default();
        assert_eq!(fade.gain(0, 8820), 1.0);
    }

    #[test]
    fn test_last_sample_near_floor() {
        let fade = FadeOut::default();
        let total = 8820;
        let last = fade.gain(total - 1, total);
        assert!(last > 0.3);
        assert!((last - 0.3).abs() <= 0.7 / total as f64 + 1e-12);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let fade = FadeOut::default();
        let total = 6615;
        for i in 1..total {
            assert!(fade.gain(i, total) <= fade.gain(i - 1, total));
            assert!(fade.gain(i, total) > 0.0);
        }
    }

    #[test]
    fn test_small_tone_gains() {
        let fade = FadeOut::default();
        // 1.0, 1 - 0.175, 1 - 0.35, 1 - 0.525
        let expected = [1.0, 0.825, 0.65, 0.475];
        for (i, want) in expected.into_iter().enumerate() {
            assert!((fade.gain(i, 4) - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_custom_fade() {
        let fade = FadeOut {
            start: 0.8,
            depth: 0.8,
        };
        assert!((fade.gain(1, 2) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_tone() {
        assert_eq!(FadeOut::default().gain(0, 0), 1.0);
    }
}
