use super::*;
use crate::moons::MoonsGenerator;
use std::io::Cursor;

fn to_string(dataset: &LabeledDataset) -> Result<String, ScalarGradError> {
    let mut buffer = Vec::new();
    write_csv(dataset, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ScalarGradError::Io(e.to_string()))
}

#[test]
fn test_write_csv_format() -> Result<(), ScalarGradError> {
    let ds = LabeledDataset::new(vec![vec![0.5, -1.0], vec![2.0, 0.25]], vec![1.0, -1.0])?;
    assert_eq!(to_string(&ds)?, "x,y,label\n0.5,-1,1\n2,0.25,-1\n");
    Ok(())
}

#[test]
fn test_write_csv_header_for_other_widths() -> Result<(), ScalarGradError> {
    let ds = LabeledDataset::new(vec![vec![1.0, 2.0, 3.0]], vec![1.0])?;
    assert_eq!(to_string(&ds)?, "x0,x1,x2,label\n1,2,3,1\n");
    Ok(())
}

#[test]
fn test_moons_survive_write_then_read() -> Result<(), ScalarGradError> {
    let ds = MoonsGenerator::default().make_moons(30, 0.1)?;
    let text = to_string(&ds)?;
    let parsed = read_csv(Cursor::new(text))?;
    assert_eq!(parsed, ds);
    Ok(())
}

#[test]
fn test_read_csv_skips_blank_lines() -> Result<(), ScalarGradError> {
    let parsed = read_csv(Cursor::new("x,y,label\n1,2,1\n\n3, 4 ,-1\n"))?;
    assert_eq!(parsed.labels(), &[1.0, -1.0]);
    assert_eq!(parsed.features()[1], vec![3.0, 4.0]);
    Ok(())
}

#[test]
fn test_read_csv_errors() {
    assert_eq!(
        read_csv(Cursor::new("")),
        Err(ScalarGradError::ParseError {
            line: 1,
            message: "missing header".to_string(),
        })
    );
    assert!(matches!(
        read_csv(Cursor::new("x,y,label\n1,2,1\n1,abc,1\n")),
        Err(ScalarGradError::ParseError { line: 3, .. })
    ));
    assert!(matches!(
        read_csv(Cursor::new("x,y,label\n1,2,1\n1,2\n")),
        Err(ScalarGradError::ParseError { line: 3, .. })
    ));
    assert!(matches!(
        read_csv(Cursor::new("x,label\n5\n")),
        Err(ScalarGradError::ParseError { line: 2, .. })
    ));
}

#[test]
fn test_save_and_load_file() -> Result<(), ScalarGradError> {
    let ds = MoonsGenerator::new(1).make_moons(10, 0.05)?;
    let path = std::env::temp_dir().join(format!("scalargrad_moons_{}.csv", std::process::id()));
    save_csv(&ds, &path)?;
    let loaded = load_csv(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded?, ds);
    Ok(())
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_csv("/definitely/not/here/moons.csv");
    assert!(matches!(result, Err(ScalarGradError::Io(_))));
}
