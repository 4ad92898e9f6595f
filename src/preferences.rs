use enum_map::EnumMap;
use eyre::ensure;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

use crate::puzzle::common::{default_scheme, Color, ColorScheme};
use crate::puzzle::cube::Cube;
use crate::puzzle::scramble::DEFAULT_SCRAMBLE_LENGTH;

const PREFS_PATH: &str = "./preferences.json";

fn scramble_length_default() -> usize {
    DEFAULT_SCRAMBLE_LENGTH
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Solved color of each face.
    #[serde(default = "default_scheme")]
    pub colors: ColorScheme,
    #[serde(default = "scramble_length_default")]
    pub scramble_length: usize,
    /// Fixes the scramble generator when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            colors: default_scheme(),
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
        }
    }
}

impl Preferences {
    pub fn load() -> eyre::Result<Self> {
        Self::load_from(PREFS_PATH)
    }

    /// Reads preferences from `path`, or returns the defaults if there is no
    /// file there.
    pub fn load_from(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Default::default());
        }
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let prefs: Self = serde_json::from_reader(reader)?;
        prefs.validate()?;
        Ok(prefs)
    }

    pub fn from_json(json: &str) -> eyre::Result<Self> {
        let prefs: Self = serde_json::from_str(json)?;
        prefs.validate()?;
        Ok(prefs)
    }

    fn validate(&self) -> eyre::Result<()> {
        let mut faces_per_color = EnumMap::<Color, usize>::default();
        for (_, &color) in self.colors.iter() {
            faces_per_color[color] += 1;
        }
        for (color, &count) in faces_per_color.iter() {
            ensure!(count <= 1, "color {:?} is used on {} faces", color, count);
        }
        Ok(())
    }

    /// Random source for scrambles: seeded if a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// A solved cube in the configured colors.
    pub fn solved_cube(&self) -> Cube {
        Cube::with_scheme(self.colors)
    }

    /// A cube scrambled with the configured length and random source.
    pub fn scrambled_cube(&self) -> Cube {
        let mut cube = self.solved_cube();
        cube.scramble_with(self.scramble_length, &mut self.rng());
        cube
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::common::Face;
    use crate::puzzle::cube::History;

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(Preferences::from_json("{}").unwrap(), Preferences::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let prefs = Preferences::from_json(r#"{"scramble_length": 12, "seed": 5}"#).unwrap();
        assert_eq!(prefs.scramble_length, 12);
        assert_eq!(prefs.seed, Some(5));
        assert_eq!(prefs.colors, default_scheme());
    }

    #[test]
    fn custom_colors() {
        let json = r#"{"colors": {
            "Top": "white", "Bottom": "yellow", "Front": "green",
            "Back": "blue", "Left": "orange", "Right": "red"
        }}"#;
        let prefs = Preferences::from_json(json).unwrap();
        assert_eq!(prefs.colors[Face::Top], Color::White);
        assert_eq!(prefs.solved_cube().face(Face::Front), &[Color::Green; 9]);
    }

    #[test]
    fn rejects_repeated_colors() {
        let json = r#"{"colors": {
            "Top": "white", "Bottom": "white", "Front": "green",
            "Back": "blue", "Left": "orange", "Right": "red"
        }}"#;
        assert!(Preferences::from_json(json).is_err());
    }

    #[test]
    fn rejects_unknown_color() {
        assert!(Preferences::from_json(r#"{"colors": {"Top": "purple"}}"#).is_err());
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let prefs = Preferences {
            seed: Some(99),
            scramble_length: 20,
            ..Default::default()
        };
        let a = prefs.scrambled_cube();
        let b = prefs.scrambled_cube();
        assert_eq!(a.history(History::Scramble).len(), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let prefs = Preferences::load_from("./no/such/preferences.json").unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn serializes_and_reloads() {
        let prefs = Preferences {
            seed: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(Preferences::from_json(&json).unwrap(), prefs);
    }
}
