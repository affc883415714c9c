// Batch conversion of an amount column in delimited files
use csv::{ReaderBuilder, WriterBuilder};
use shared::FormatSettings;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{EngineError, Result};
use crate::transforms::{transform_by_name, Transform};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Header of the column holding the amounts.
    pub column: String,
    /// Transform names; each one appends a column named after it.
    pub transforms: Vec<String>,
    pub delimiter: u8,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            column: "amount".to_string(),
            transforms: vec!["separate".to_string(), "words".to_string()],
            delimiter: b',',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    /// Rows whose amount cell held no digits.
    pub empty_amounts: usize,
}

pub fn convert_csv<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &BatchOptions,
    settings: &FormatSettings,
) -> Result<BatchSummary> {
    let transforms = options
        .transforms
        .iter()
        .map(|name| transform_by_name(name, settings))
        .collect::<Result<Vec<Box<dyn Transform>>>>()?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(reader);
    let mut wtr = WriterBuilder::new().delimiter(options.delimiter).from_writer(writer);

    let headers = rdr.headers()?.clone();
    let position = headers.iter().position(|h| h == options.column).ok_or_else(|| {
        EngineError::CsvDataFormatError(format!("Missing '{}' column in CSV header", options.column))
    })?;

    let mut out_headers: Vec<&str> = headers.iter().collect();
    out_headers.extend(transforms.iter().map(|t| t.name()));
    wtr.write_record(&out_headers)?;

    let mut summary = BatchSummary::default();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            EngineError::CsvDataFormatError(format!("Error reading CSV record at line {}: {}", idx + 2, e))
        })?;
        let amount = record.get(position).unwrap_or("");
        if !amount.chars().any(|c| crate::transforms::digits::digit_value(c).is_some()) {
            warn!("Line {} has no digits in '{}' column", idx + 2, options.column);
            summary.empty_amounts += 1;
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.extend(transforms.iter().map(|t| t.apply(amount)));
        wtr.write_record(&row)?;
        summary.rows += 1;
    }

    wtr.flush()?;
    Ok(summary)
}

pub fn convert_csv_file(
    input: &Path,
    output: &Path,
    options: &BatchOptions,
    settings: &FormatSettings,
) -> Result<BatchSummary> {
    info!("Converting '{}' into '{}'", input.display(), output.display());
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    let summary = convert_csv(reader, writer, options, settings)?;
    info!("Converted {} rows ({} without an amount)", summary.rows, summary.empty_amounts);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_convert_csv_appends_columns() {
        let input = "item,amount\npaper,1400\nink,۱۲۵\n";
        let mut out = Vec::new();
        let summary =
            convert_csv(input.as_bytes(), &mut out, &BatchOptions::default(), &FormatSettings::default()).unwrap();

        assert_eq!(summary, BatchSummary { rows: 2, empty_amounts: 0 });
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "item,amount,separate,words");
        assert_eq!(lines[1], "paper,1400,۱،۴۰۰,یک هزار و چهارصد");
        assert_eq!(lines[2], "ink,۱۲۵,۱۲۵,صد و بیست و پنج");
    }

    #[test]
    fn test_convert_csv_with_custom_delimiter_and_column() {
        let input = "Mablagh;Desc\n1,234,567;x\n;empty\n";
        let options = BatchOptions {
            column: "Mablagh".to_string(),
            transforms: vec!["raw".to_string()],
            delimiter: b';',
        };
        let mut out = Vec::new();
        let summary = convert_csv(input.as_bytes(), &mut out, &options, &FormatSettings::default()).unwrap();

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.empty_amounts, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Mablagh;Desc;raw\n1,234,567;x;1234567\n"));
    }

    #[test]
    fn test_convert_csv_missing_column() {
        let mut out = Vec::new();
        let result = convert_csv(
            "item,price\npaper,10\n".as_bytes(),
            &mut out,
            &BatchOptions::default(),
            &FormatSettings::default(),
        );
        assert!(result.unwrap_err().to_string().contains("Missing 'amount' column"));
    }

    #[test]
    fn test_convert_csv_unknown_transform() {
        let options = BatchOptions {
            transforms: vec!["roman".to_string()],
            ..BatchOptions::default()
        };
        let mut out = Vec::new();
        let result = convert_csv("amount\n1\n".as_bytes(), &mut out, &options, &FormatSettings::default());
        assert!(matches!(result, Err(EngineError::UnknownTransform(_))));
    }

    #[test]
    fn test_convert_csv_file() {
        let input = create_test_csv("amount\n2000000");
        let output = NamedTempFile::new().unwrap();
        let summary = convert_csv_file(
            input.path(),
            output.path(),
            &BatchOptions::default(),
            &FormatSettings::default(),
        )
        .unwrap();
        assert_eq!(summary.rows, 1);

        let written = std::fs::read_to_string(output.path()).unwrap();
        assert!(written.contains("2000000,۲،۰۰۰،۰۰۰,دو میلیون"));
    }
}
