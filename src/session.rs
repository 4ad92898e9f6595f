use eyre::WrapErr;
use log::debug;

use crate::puzzle::common::ColorScheme;
use crate::puzzle::cube::{Cube, History};
use crate::puzzle::moves::Move;

/// Record of a cube session: the scramble and the moves made since, in
/// standard notation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionLog {
    pub version: String,
    pub scramble: Vec<String>,
    pub solve: Vec<String>,
}

fn notation(moves: &[Move]) -> Vec<String> {
    moves.iter().map(Move::to_string).collect()
}

fn parse_moves(moves: &[String]) -> eyre::Result<Vec<Move>> {
    moves
        .iter()
        .enumerate()
        .map(|(i, mv)| mv.parse::<Move>().wrap_err_with(|| format!("move {} of the log", i)))
        .collect()
}

impl Cube {
    pub fn to_log(&self) -> SessionLog {
        SessionLog {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scramble: notation(self.history(History::Scramble)),
            solve: notation(self.history(History::Solve)),
        }
    }
}

impl SessionLog {
    /// Rebuilds the cube the log was taken from, starting from `scheme`.
    pub fn replay(&self, scheme: ColorScheme) -> eyre::Result<Cube> {
        let scramble = parse_moves(&self.scramble).wrap_err("bad scramble")?;
        let solve = parse_moves(&self.solve).wrap_err("bad solve")?;
        debug!(
            "replaying log v{}: {} scramble and {} solve moves",
            self.version,
            scramble.len(),
            solve.len()
        );

        let mut cube = Cube::with_scheme(scheme);
        cube.apply_moves(scramble, History::Scramble);
        cube.apply_moves(solve, History::Solve);
        Ok(cube)
    }

    pub fn to_json(&self) -> eyre::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> eyre::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::common::default_scheme;
    use crate::puzzle::moves::parse_sequence;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn log_replays_to_the_same_cube() {
        let mut cube = Cube::new();
        cube.scramble_with(30, &mut StdRng::seed_from_u64(1));
        cube.apply_moves(parse_sequence("Uw2 M' b").unwrap(), History::Solve);

        let log = cube.to_log();
        assert_eq!(log.solve, vec!["Uw2", "M'", "Bw"]);
        let json = log.to_json().unwrap();
        let replayed = SessionLog::from_json(&json).unwrap().replay(default_scheme()).unwrap();
        assert_eq!(replayed, cube);
    }

    #[test]
    fn bad_notation_is_reported() {
        let log = SessionLog {
            version: "0.1.0".to_string(),
            scramble: vec!["R".to_string(), "Q".to_string()],
            solve: vec![],
        };
        let err = log.replay(default_scheme()).unwrap_err();
        assert!(format!("{:?}", err).contains("move 1 of the log"));
    }

    #[test]
    fn fresh_cube_logs_nothing() {
        let log = Cube::new().to_log();
        assert!(log.scramble.is_empty());
        assert!(log.solve.is_empty());
        assert_eq!(log.version, env!("CARGO_PKG_VERSION"));
    }
}
