use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::{Event, WorldData};

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush a finished run to JSONL files in the given output directory —
/// the hand-off format for the presentation layer, which needs the event
/// timeline plus the nation and relation reference data it was run against.
///
/// Creates the output directory if it does not exist. Writes 3 files:
/// - `nations.jsonl` — one Nation per line, in code order
/// - `relations.jsonl` — one bilateral relation row per line
/// - `events.jsonl` — one Event per line, in timeline order
pub fn flush_run_to_jsonl(world: &WorldData, events: &[Event], output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("nations.jsonl"), world.nations.values())?;
    write_jsonl(&output_dir.join("relations.jsonl"), world.relations.rows())?;
    write_jsonl(&output_dir.join("events.jsonl"), events.iter())?;

    Ok(())
}
