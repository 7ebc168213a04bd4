use std::path::Path;

use ort::session::Session;
use ort::value::Value;
use tracing::debug;

use crate::detector::VadModel;
use crate::error::VadError;
use crate::state::{STATE_SHAPE, VadState};

fn model_err(what: &str) -> impl FnOnce(ort::Error) -> VadError + '_ {
    move |e| VadError::Model(format!("{what}: {e}"))
}

/// Silero VAD ONNX model.
///
/// Inputs are `input` `[batch, samples]`, `h0` and `c0`; outputs are
/// `output` `[batch, 2, 1]`, `hn` and `cn`. The speech probability is
/// `output[.., 1, 0]`.
pub struct SileroModel {
    session: Session,
}

impl SileroModel {
    /// Loads the model with one intra-op and one inter-op thread.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VadError::Model(format!("model file not found: {}", path.display())));
        }

        let session = Session::builder()
            .map_err(model_err("create session builder"))?
            .with_intra_threads(1)
            .map_err(model_err("set intra threads"))?
            .with_inter_threads(1)
            .map_err(model_err("set inter threads"))?
            .commit_from_file(path)
            .map_err(model_err("load model"))?;
        debug!(path = %path.display(), "vad: loaded silero model");

        Ok(Self { session })
    }
}

fn state_value(data: &[f32]) -> Result<Value, VadError> {
    let array = ndarray::Array3::from_shape_vec(
        (STATE_SHAPE[0], STATE_SHAPE[1], STATE_SHAPE[2]),
        data.to_vec(),
    )
    .map_err(|e| VadError::Model(format!("state array: {e}")))?;
    Ok(Value::from_array(array)
        .map_err(model_err("state tensor"))?
        .into_dyn())
}

impl VadModel for SileroModel {
    fn infer(
        &mut self,
        input: &[f32],
        batch: usize,
        samples: usize,
        state: &VadState,
    ) -> Result<(f32, VadState), VadError> {
        let audio = ndarray::Array2::from_shape_vec((batch, samples), input.to_vec())
            .map_err(|e| VadError::Model(format!("input array: {e}")))?;
        let audio = Value::from_array(audio)
            .map_err(model_err("input tensor"))?
            .into_dyn();
        let h0 = state_value(&state.h)?;
        let c0 = state_value(&state.c)?;

        let outputs = self
            .session
            .run(ort::inputs![
                "input" => audio,
                "h0" => h0,
                "c0" => c0,
            ])
            .map_err(model_err("inference"))?;

        let extract = |name: &str| -> Result<Vec<f32>, VadError> {
            let value = outputs
                .get(name)
                .ok_or_else(|| VadError::Model(format!("missing `{name}` output")))?;
            let (_, data) = value
                .try_extract_tensor::<f32>()
                .map_err(|e| VadError::Model(format!("extract `{name}`: {e}")))?;
            Ok(data.to_vec())
        };

        let output = extract("output")?;
        let probability = output.get(1).copied().ok_or_else(|| {
            VadError::Model(format!("`output` has {} values, want 2", output.len()))
        })?;
        let next = VadState {
            h: extract("hn")?,
            c: extract("cn")?,
        };
        Ok((probability, next))
    }
}
