use thiserror::Error;

/// Errors returned by voice activity detection.
#[derive(Debug, Error)]
pub enum VadError {
    #[error("too many dimensions for input audio chunk {shape:?}")]
    TooManyDims { shape: Vec<usize> },

    #[error("batched input is not supported: batch size {0}")]
    Batching(usize),

    #[error("shape {shape:?} does not match {len} samples")]
    ShapeMismatch { shape: Vec<usize>, len: usize },

    #[error("unsupported sample rate {0} Hz: only 16000 Hz audio is supported")]
    UnsupportedSampleRate(u32),

    #[error("model error: {0}")]
    Model(String),
}
