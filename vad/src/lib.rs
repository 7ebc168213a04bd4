//! Voice activity detection over 16 kHz mono audio chunks.
//!
//! A [`VoiceActivityDetector`] owns a [`VadModel`] and the recurrent
//! [`VadState`] threaded through it, so results depend on the chunks seen
//! since the last [`VoiceActivityDetector::reset`].
//!
//! Models:
//! - [`EnergyModel`]: RMS energy, no runtime needed
//! - `SileroModel`: the Silero VAD network, behind the `onnx` feature
//!
//! # Example
//!
//! ```rust,ignore
//! use optispeech_vad::{SileroModel, VoiceActivityDetector};
//!
//! let mut vad = VoiceActivityDetector::new(SileroModel::from_file("silero_vad.onnx")?);
//! for chunk in audio.chunks(512) {
//!     let p = vad.detect_mono(chunk, 16000)?;
//! }
//! ```

mod detector;
mod energy;
mod error;
#[cfg(feature = "onnx")]
mod silero;
mod state;

pub use detector::{SAMPLE_RATE, VadModel, VoiceActivityDetector};
pub use energy::EnergyModel;
pub use error::VadError;
#[cfg(feature = "onnx")]
pub use silero::SileroModel;
pub use state::{STATE_LEN, STATE_SHAPE, VadState};
