// File: src/dataset.rs
use crate::core::types::SymptomRecord;
use crate::error::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cell value that stands for "no entry" in the exported sheets.
const NULL_CELL: &str = "null";

/// Loads symptom records from a CSV file laid out as
/// `index, Disease, Symptom_1, Symptom_2, ...` with a header row.
pub fn load_symptom_records(path: &Path) -> Result<Vec<SymptomRecord>> {
    let file = File::open(path)?;
    let records = read_symptom_records(BufReader::new(file))?;
    tracing::info!(path = %path.display(), records = records.len(), "symptom dataset loaded");
    Ok(records)
}

/// Same as [`load_symptom_records`] over any reader. Rows without a disease or
/// without a single usable symptom are skipped.
pub fn read_symptom_records<R: Read>(reader: R) -> Result<Vec<SymptomRecord>> {
    let mut records = Vec::new();
    for_each_row(reader, |line, row| {
        let Some(disease) = cell(row, 1) else {
            tracing::warn!(line, "skipping row without a disease");
            return;
        };
        let symptoms = cells_from(row, 2);
        if symptoms.is_empty() {
            tracing::warn!(line, disease, "skipping row without symptoms");
            return;
        }
        records.push(SymptomRecord {
            disease: disease.to_string(),
            symptoms,
        });
    })?;
    Ok(records)
}

/// Streams the data rows of a headed CSV. Rows the reader cannot decode are
/// logged and skipped; I/O failures abort.
pub(crate) fn for_each_row<R, F>(reader: R, mut visit: F) -> Result<()>
where
    R: Read,
    F: FnMut(u64, &StringRecord),
{
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    for result in csv.records() {
        match result {
            Ok(row) => {
                let line = row.position().map_or(0, |p| p.line());
                visit(line, &row);
            }
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => tracing::warn!(error = %err, "skipping malformed row"),
        }
    }
    Ok(())
}

/// Non-empty, non-null cell at `idx`.
pub(crate) fn cell(row: &StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).filter(|value| is_present(value))
}

/// Every non-empty, non-null cell from `start` onwards.
pub(crate) fn cells_from(row: &StringRecord, start: usize) -> Vec<String> {
    row.iter()
        .skip(start)
        .filter(|value| is_present(value))
        .map(str::to_string)
        .collect()
}

fn is_present(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != NULL_CELL
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
,Disease,Symptom_1,Symptom_2,Symptom_3
0,Fungal infection, itching, skin_rash,nodal_skin_eruptions
1,Migraine,headache,null,\"blurred, distorted vision\"
2,,cough,,
3,Allergy,null,,
4
";

    #[test]
    fn parses_rows_and_skips_incomplete_ones() {
        let records = read_symptom_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            SymptomRecord::new("Fungal infection", ["itching", "skin_rash", "nodal_skin_eruptions"])
        );
        assert_eq!(
            records[1],
            SymptomRecord::new("Migraine", ["headache", "blurred, distorted vision"])
        );
    }

    #[test]
    fn header_only_file_is_empty() {
        let records = read_symptom_records(",Disease,Symptom_1\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let records = load_symptom_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_symptom_records(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, crate::error::TriageError::Io(_)));
    }
}
