//! Record-list documents: a single JSON object whose `"data"` field
//! holds the ordered list of `{x, y}` records.
//!
//! This encoding is write-only; only the parallel-group encoding (see
//! [`crate::read_groups`]) can be read back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::errors::{TabError, TabResult};
use crate::sample::SampleSet;

#[derive(Debug, serde::Serialize)]
struct Record {
    x: f64,
    y: f64,
}

/// Row-oriented view of a [`SampleSet`]'s parallel sequences.
#[derive(Debug)]
struct Rows<'a>(&'a SampleSet);

impl Serialize for Rows<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let Rows(set) = self;
        let mut seq = serializer.serialize_seq(Some(set.len()))?;
        for (x, y) in set.iter() {
            seq.serialize_element(&Record { x, y })?;
        }
        seq.end()
    }
}

#[derive(Debug, serde::Serialize)]
struct Document<'a> {
    data: Rows<'a>,
}

/// Write `set` to `path` as a record-list document, creating the
/// containing directory if absent.
pub fn write_records(set: &SampleSet, path: &Path) -> TabResult<()> {
    crate::ensure_parent_dir(path)?;
    let file = File::create(path).map_err(TabError::FileSystem)?;
    let fmt = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(
        BufWriter::new(file), fmt);
    Document { data: Rows(set) }
        .serialize(&mut ser)
        .map_err(|e| TabError::FileSystem(e.into()))?;
    ser.into_inner().flush().map_err(TabError::FileSystem)?;
    debug!("{} records written to {}", set.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::write_records;
    use crate::sample::SampleSet;

    fn tmp(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("functab-{}-{}", std::process::id(), name))
    }

    #[test]
    fn document_shape() {
        let set = SampleSet::from_parts(vec![0., 0.5], vec![1., 0.25]);
        let path = tmp("records.json");
        write_records(&set, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text,
                   "{\n    \"data\": [\n        {\n            \
                    \"x\": 0.0,\n            \"y\": 1.0\n        },\n        \
                    {\n            \"x\": 0.5,\n            \"y\": 0.25\n        \
                    }\n    ]\n}");
    }

    #[test]
    fn creates_missing_directory_tree() {
        let base = tmp("records-tree");
        let _ = fs::remove_dir_all(&base);
        let path = base.join("a").join("b").join("out.json");
        let set = SampleSet::from_parts(vec![1.], vec![2.]);
        write_records(&set, &path).unwrap();
        assert!(path.is_file());
        fs::remove_dir_all(&base).unwrap();
    }
}
