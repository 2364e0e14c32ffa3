use anyhow::Result;
use price_list_converter::config::ConverterConfig;
use price_list_converter::converter::convert;
use price_list_converter::error::ConverterError;
use price_list_converter::types::PriceRecord;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn converts_fixture_end_to_end() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = ConverterConfig {
        source_path: fixture("price_list.xlsx"),
        output_path: temp_dir.path().join("price_list.json"),
    };

    // Fixture: 5 data rows; one has an unparsable MRP, one has a blank brand.
    let report = convert(&config)?;
    assert_eq!(report.total_rows, 5);
    assert_eq!(report.written_rows, 3);
    assert_eq!(report.dropped_rows, 2);

    let content = fs::read_to_string(&config.output_path)?;
    // Single compact document, the array is the file root
    assert!(content.starts_with('['));
    assert!(!content.contains('\n'));

    let records: Vec<PriceRecord> = serde_json::from_str(&content)?;
    let brands: Vec<&str> = records.iter().map(|r| r.brand.as_str()).collect();
    assert_eq!(brands, vec!["Acme", "Cam", "Drill"]);
    assert_eq!(records[0].mrp, 100.0);
    assert_eq!(records[0].gst_percent, 18.0);
    // " 75.5 " arrives as a string cell and still parses
    assert_eq!(records[2].mrp, 75.5);

    // Exactly the five renamed keys, extra source columns ignored
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)?;
    for value in &values {
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["brand", "gst_percent", "mrp", "part_no", "root_part_no"]
        );
    }

    // The document itself writes the keys in declaration order
    let positions: Vec<usize> =
        ["\"brand\"", "\"part_no\"", "\"root_part_no\"", "\"mrp\"", "\"gst_percent\""]
            .iter()
            .map(|key| content.find(*key).unwrap())
            .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    Ok(())
}

#[test]
fn overwrites_existing_output_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = ConverterConfig {
        source_path: fixture("price_list.xlsx"),
        output_path: temp_dir.path().join("price_list.json"),
    };

    fs::write(&config.output_path, "stale")?;
    convert(&config)?;

    let content = fs::read_to_string(&config.output_path)?;
    assert!(content.starts_with('['));

    Ok(())
}

#[test]
fn missing_source_aborts_without_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = ConverterConfig {
        source_path: temp_dir.path().join("no_such_file.xlsx"),
        output_path: temp_dir.path().join("price_list.json"),
    };

    let err = convert(&config).unwrap_err();
    assert!(matches!(err, ConverterError::SourceRead { .. }));
    assert!(!config.output_path.exists());

    Ok(())
}

#[test]
fn missing_columns_abort_without_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = ConverterConfig {
        source_path: fixture("missing_columns.xlsx"),
        output_path: temp_dir.path().join("price_list.json"),
    };

    let err = convert(&config).unwrap_err();
    match err {
        ConverterError::Schema(missing) => {
            assert_eq!(missing, vec!["Root Part No", "GST%"]);
        }
        other => panic!("expected Schema error, got {other}"),
    }
    assert!(!config.output_path.exists());

    Ok(())
}

#[test]
fn unwritable_output_path_is_a_write_error() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = ConverterConfig {
        source_path: fixture("price_list.xlsx"),
        output_path: temp_dir.path().join("no_such_dir").join("price_list.json"),
    };

    let err = convert(&config).unwrap_err();
    assert!(matches!(err, ConverterError::Write { .. }));

    Ok(())
}
