use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use optispeech_vad::{EnergyModel, SAMPLE_RATE, VadModel, VoiceActivityDetector};
use serde::Serialize;
use tracing::debug;

use super::print_json;
use crate::Cli;

/// Score raw PCM16 little-endian 16 kHz mono audio for voice activity.
#[derive(Args)]
pub struct VadCommand {
    /// Raw PCM16 audio file
    pub input: PathBuf,

    /// Samples per chunk
    #[arg(long, default_value_t = 512)]
    pub chunk: usize,

    /// Silero VAD ONNX model (requires the `onnx` feature)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Energy threshold when no model is given
    #[arg(long, default_value_t = EnergyModel::DEFAULT_THRESHOLD)]
    pub threshold: f32,
}

#[derive(Debug, Serialize, PartialEq)]
struct ChunkScore {
    offset_ms: u64,
    probability: f32,
}

impl VadCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        if self.chunk == 0 {
            anyhow::bail!("--chunk must be positive");
        }
        let bytes = std::fs::read(&self.input)
            .with_context(|| format!("read audio {}", self.input.display()))?;
        let samples = pcm16_to_f32(&bytes);
        debug!(samples = samples.len(), chunk = self.chunk, "vad: scoring");

        let scores = match &self.model {
            Some(path) => score_with_model(path, &samples, self.chunk)?,
            None => score(
                VoiceActivityDetector::new(EnergyModel::new(self.threshold)),
                &samples,
                self.chunk,
            )?,
        };

        if cli.json {
            return print_json(&scores);
        }
        for s in &scores {
            println!("{}\t{:.3}", s.offset_ms, s.probability);
        }
        Ok(())
    }
}

#[cfg(feature = "onnx")]
fn score_with_model(
    path: &std::path::Path,
    samples: &[f32],
    chunk: usize,
) -> anyhow::Result<Vec<ChunkScore>> {
    let model = optispeech_vad::SileroModel::from_file(path)?;
    score(VoiceActivityDetector::new(model), samples, chunk)
}

#[cfg(not(feature = "onnx"))]
fn score_with_model(
    _path: &std::path::Path,
    _samples: &[f32],
    _chunk: usize,
) -> anyhow::Result<Vec<ChunkScore>> {
    anyhow::bail!("--model needs optispeech built with the `onnx` feature")
}

fn score<M: VadModel>(
    mut vad: VoiceActivityDetector<M>,
    samples: &[f32],
    chunk: usize,
) -> anyhow::Result<Vec<ChunkScore>> {
    samples
        .chunks(chunk)
        .enumerate()
        .map(|(i, chunk_samples)| {
            let probability = vad.detect_mono(chunk_samples, SAMPLE_RATE)?;
            Ok(ChunkScore {
                offset_ms: (i * chunk) as u64 * 1000 / SAMPLE_RATE as u64,
                probability,
            })
        })
        .collect()
}

/// Decodes PCM16 little-endian samples to `[-1, 1)`; a trailing odd byte is dropped.
fn pcm16_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]) as f32 / 32768.0)
        .collect()
}
