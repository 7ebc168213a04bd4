use tracing::trace;

use crate::error::VadError;
use crate::state::VadState;

/// The only sample rate detectors accept.
pub const SAMPLE_RATE: u32 = 16000;

/// A stateful speech-probability model.
///
/// The model reads the previous state and returns the new one; it never
/// keeps state of its own between calls.
pub trait VadModel: Send {
    /// Scores a `[batch, samples]` chunk of 16 kHz mono audio.
    ///
    /// Returns the speech probability of the first row and the next state.
    fn infer(
        &mut self,
        input: &[f32],
        batch: usize,
        samples: usize,
        state: &VadState,
    ) -> Result<(f32, VadState), VadError>;
}

/// Runs a [`VadModel`] over consecutive audio chunks, carrying its state.
///
/// Each call's result depends on every chunk since construction or the
/// last [`VoiceActivityDetector::reset`].
pub struct VoiceActivityDetector<M> {
    model: M,
    state: VadState,
}

impl<M: VadModel> VoiceActivityDetector<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            state: VadState::zeros(),
        }
    }

    /// Speech probability in `[0, 1]` of a chunk with the given shape.
    ///
    /// A one-dimensional shape is treated as a batch of one. Shapes with
    /// more than two dimensions and batches larger than one are rejected,
    /// then the shape must describe exactly `samples`, then the rate must
    /// be [`SAMPLE_RATE`].
    pub fn detect(
        &mut self,
        samples: &[f32],
        shape: &[usize],
        sample_rate: u32,
    ) -> Result<f32, VadError> {
        let (batch, len) = match *shape {
            [len] => (1, len),
            [batch, len] => (batch, len),
            [] => {
                return Err(VadError::ShapeMismatch {
                    shape: vec![],
                    len: samples.len(),
                });
            }
            _ => {
                return Err(VadError::TooManyDims {
                    shape: shape.to_vec(),
                });
            }
        };
        if batch > 1 {
            return Err(VadError::Batching(batch));
        }
        if batch * len != samples.len() {
            return Err(VadError::ShapeMismatch {
                shape: shape.to_vec(),
                len: samples.len(),
            });
        }
        if sample_rate != SAMPLE_RATE {
            return Err(VadError::UnsupportedSampleRate(sample_rate));
        }

        let (probability, state) = self.model.infer(samples, batch, len, &self.state)?;
        if !state.is_well_formed() {
            return Err(VadError::Model(format!(
                "state has {}/{} values, want {}",
                state.h.len(),
                state.c.len(),
                crate::state::STATE_LEN
            )));
        }
        if probability.is_nan() {
            return Err(VadError::Model("probability is NaN".to_string()));
        }
        self.state = state;

        let probability = probability.clamp(0.0, 1.0);
        trace!(samples = len, probability, "vad: detect");
        Ok(probability)
    }

    /// [`VoiceActivityDetector::detect`] for a one-dimensional chunk.
    pub fn detect_mono(&mut self, samples: &[f32], sample_rate: u32) -> Result<f32, VadError> {
        self.detect(samples, &[samples.len()], sample_rate)
    }

    /// Starts a new stream.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn state(&self) -> &VadState {
        &self.state
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}
