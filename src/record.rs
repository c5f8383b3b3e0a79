//! Serializable game records
//!
//! Finished games can be written out as JSON for later inspection, e.g. from
//! the `watch` command.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{Game, GameOutcome, Player},
};

/// Version of the export format
pub const RECORD_FORMAT_VERSION: u32 = 1;

/// A finished game: who opened, the squares played in order, and the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first_player: Player,
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Capture a finished game; `None` while the game is still in progress.
    pub fn from_game(game: &Game) -> Option<Self> {
        let outcome = game.status().outcome()?;
        Some(Self {
            first_player: game.first_player(),
            moves: game.moves().iter().map(|m| m.position).collect(),
            outcome,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct RecordFile {
    version: u32,
    games: Vec<GameRecord>,
}

/// Write records to `path` as pretty-printed JSON
pub fn write_records(path: &Path, records: &[GameRecord]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    let payload = RecordFile {
        version: RECORD_FORMAT_VERSION,
        games: records.to_vec(),
    };
    serde_json::to_writer_pretty(&mut writer, &payload)?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("flush {}", path.display()), e))
}

/// Read records previously written by [`write_records`]
pub fn read_records(path: &Path) -> Result<Vec<GameRecord>> {
    let file =
        File::open(path).map_err(|e| Error::io(format!("open {}", path.display()), e))?;
    let payload: RecordFile = serde_json::from_reader(BufReader::new(file))?;
    Ok(payload.games)
}
