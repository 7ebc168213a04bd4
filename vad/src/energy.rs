use crate::detector::VadModel;
use crate::error::VadError;
use crate::state::VadState;

/// RMS energy model, usable when no neural model is available.
///
/// The smoothed energy lives in `h[0]` of the detector state, so it is
/// reset along with the detector. The probability is
/// `energy / (energy + threshold)`: 0.5 exactly at the threshold.
#[derive(Debug, Clone, Copy)]
pub struct EnergyModel {
    threshold: f32,
    smoothing: f32,
}

impl EnergyModel {
    pub const DEFAULT_THRESHOLD: f32 = 0.01;

    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(f32::EPSILON),
            smoothing: 0.1,
        }
    }

    /// Weight of the newest chunk in the running energy, in `(0, 1]`.
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing.clamp(f32::EPSILON, 1.0);
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}

impl VadModel for EnergyModel {
    fn infer(
        &mut self,
        input: &[f32],
        _batch: usize,
        samples: usize,
        state: &VadState,
    ) -> Result<(f32, VadState), VadError> {
        let row = &input[..samples.min(input.len())];
        let previous = state.h.first().copied().unwrap_or(0.0);
        let energy = previous * (1.0 - self.smoothing) + rms(row) * self.smoothing;

        let mut next = state.clone();
        if let Some(h) = next.h.first_mut() {
            *h = energy;
        }
        Ok((energy / (energy + self.threshold), next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::VoiceActivityDetector;

    #[test]
    fn silence_and_speech() {
        let mut vad = VoiceActivityDetector::new(EnergyModel::new(0.01));
        assert_eq!(vad.detect_mono(&[0.0; 512], 16000).unwrap(), 0.0);

        let p = vad.detect_mono(&[0.5; 512], 16000).unwrap();
        assert!(p > 0.5, "loud chunk scored {p}");
    }

    #[test]
    fn half_at_threshold() {
        let mut vad = VoiceActivityDetector::new(EnergyModel::new(0.2).with_smoothing(1.0));
        let p = vad.detect_mono(&[0.2; 64], 16000).unwrap();
        assert!((p - 0.5).abs() < 1e-4);
    }

    #[test]
    fn energy_decays_over_silence() {
        let mut vad = VoiceActivityDetector::new(EnergyModel::new(0.01).with_smoothing(0.5));
        let loud = vad.detect_mono(&[0.5; 256], 16000).unwrap();
        let quieter = vad.detect_mono(&[0.0; 256], 16000).unwrap();
        assert!(quieter < loud);
        assert!(quieter > 0.0);

        vad.reset();
        assert_eq!(vad.detect_mono(&[0.0; 256], 16000).unwrap(), 0.0);
    }

    #[test]
    fn empty_chunk() {
        let mut vad = VoiceActivityDetector::new(EnergyModel::default());
        assert_eq!(vad.detect_mono(&[], 16000).unwrap(), 0.0);
    }
}
