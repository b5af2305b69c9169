use serde::{Deserialize, Serialize};

use crate::error::ArtResult;

/// Everything a render needs: image size, network shape and the maximum
/// intensity of each colour channel.
///
/// Fields:
/// - `width`, `height` — output size in pixels
/// - `input`  — width of every network layer
/// - `hidden` — number of `input x input` hidden layers
/// - `max_r`, `max_g`, `max_b` — scale applied to each sigmoid output
///
/// No field is validated. Zero dimensions give an empty image, `hidden = 0`
/// maps straight from the input layer to the output layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtConfig {
    pub width: u32,
    pub height: u32,
    pub input: usize,
    pub hidden: usize,
    pub max_r: f64,
    pub max_g: f64,
    pub max_b: f64,
}

impl ArtConfig {
    /// Number of bytes in the RGBA buffer for this configuration.
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> ArtResult<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> ArtResult<ArtConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for ArtConfig {
    fn default() -> Self {
        ArtConfig {
            width: 256,
            height: 256,
            input: 16,
            hidden: 3,
            max_r: 255.0,
            max_g: 255.0,
            max_b: 255.0,
        }
    }
}
