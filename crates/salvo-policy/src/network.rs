//! Fixed-weight feed-forward network controller.
//!
//! Networks are plain dense layers loaded from JSON. Weights come from
//! whatever training process produced them; nothing here learns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use salvo_core::error::{Result, SalvoError};
use salvo_core::policy::{action_len, observation_len, Policy};

/// Pre-activations are clamped to this magnitude before squashing.
const ACTIVATION_CLAMP: f64 = 60.0;

/// Node activation function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Steepened logistic `1 / (1 + e^(-5z))`, range (0, 1).
    #[default]
    Sigmoid,
    /// `tanh(2.5z)`, range (-1, 1).
    Tanh,
    Relu,
    Identity,
}

impl Activation {
    pub fn apply(self, z: f64) -> f64 {
        match self {
            Activation::Sigmoid => {
                let z = (5.0 * z).clamp(-ACTIVATION_CLAMP, ACTIVATION_CLAMP);
                1.0 / (1.0 + (-z).exp())
            }
            Activation::Tanh => (2.5 * z).clamp(-ACTIVATION_CLAMP, ACTIVATION_CLAMP).tanh(),
            Activation::Relu => z.max(0.0),
            Activation::Identity => z,
        }
    }
}

/// One dense layer: `out[j] = act(bias[j] + sum_i weights[j][i] * in[i])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// One row per output node, one column per input.
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}

impl Layer {
    pub fn inputs(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    pub fn outputs(&self) -> usize {
        self.weights.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| {
                let z = bias + row.iter().zip(input).map(|(w, x)| w * x).sum::<f64>();
                self.activation.apply(z)
            })
            .collect()
    }
}

/// A validated stack of dense layers.
///
/// Deserializing goes through [`FeedForward::new`], so a parsed network
/// always has the shape checks applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFeedForward")]
pub struct FeedForward {
    layers: Vec<Layer>,
}

/// Wire form of [`FeedForward`] before validation.
#[derive(Deserialize)]
struct RawFeedForward {
    layers: Vec<Layer>,
}

impl TryFrom<RawFeedForward> for FeedForward {
    type Error = SalvoError;

    fn try_from(raw: RawFeedForward) -> Result<Self> {
        Self::new(raw.layers)
    }
}

impl FeedForward {
    /// Check shapes and weights, then build the network.
    pub fn new(layers: Vec<Layer>) -> Result<Self> {
        if layers.is_empty() {
            return Err(invalid("network has no layers"));
        }
        for (index, layer) in layers.iter().enumerate() {
            if layer.outputs() == 0 || layer.inputs() == 0 {
                return Err(invalid(format!("layer {index} is empty")));
            }
            if layer.biases.len() != layer.outputs() {
                return Err(invalid(format!(
                    "layer {index} has {} biases for {} nodes",
                    layer.biases.len(),
                    layer.outputs()
                )));
            }
            if layer.weights.iter().any(|row| row.len() != layer.inputs()) {
                return Err(invalid(format!("layer {index} has ragged weight rows")));
            }
            let finite = layer
                .weights
                .iter()
                .flatten()
                .chain(&layer.biases)
                .all(|w| w.is_finite());
            if !finite {
                return Err(invalid(format!("layer {index} has non-finite weights")));
            }
            if index > 0 && layers[index - 1].outputs() != layer.inputs() {
                return Err(invalid(format!(
                    "layer {index} expects {} inputs but layer {} produces {}",
                    layer.inputs(),
                    index - 1,
                    layers[index - 1].outputs()
                )));
            }
        }
        Ok(Self { layers })
    }

    /// Parse and validate a network from JSON (`{ "layers": [...] }`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawFeedForward = serde_json::from_str(json)?;
        Self::new(raw.layers)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_len(&self) -> usize {
        self.layers.first().map_or(0, Layer::inputs)
    }

    pub fn output_len(&self) -> usize {
        self.layers.last().map_or(0, Layer::outputs)
    }

    /// Confirm the network fits a raid of `missile_count` missiles.
    pub fn check_fits(&self, missile_count: usize) -> Result<()> {
        let (inputs, outputs) = (observation_len(missile_count), action_len(missile_count));
        if self.input_len() != inputs || self.output_len() != outputs {
            return Err(invalid(format!(
                "network is {}->{} but {missile_count} missiles need {inputs}->{outputs}",
                self.input_len(),
                self.output_len()
            )));
        }
        Ok(())
    }

    /// Evaluate the network. Returns an empty vector if `input` has the
    /// wrong width.
    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        if input.len() != self.input_len() {
            return Vec::new();
        }
        self.layers
            .iter()
            .fold(input.to_vec(), |activations, layer| layer.forward(&activations))
    }
}

impl Policy for FeedForward {
    fn name(&self) -> &str {
        "feed-forward"
    }

    fn decide(&mut self, observation: &[f64]) -> Vec<f64> {
        self.forward(observation)
    }
}

fn invalid(message: impl Into<String>) -> SalvoError {
    SalvoError::InvalidPolicy(message.into())
}
