#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use crate::core::grid::SampleGrid;
    use crate::core::word::{F32Word, WordParseError};
    use crate::design::lut::*;
    use crate::design::table::LutTable;

    fn halve(x: f64) -> f64 {
        x / 2.0
    }

    crate::lut_create! {
        name = halve_lut,
        func = halve,
        grid = SampleGrid::new(4, -1),
        file = "halve.hex"
    }

    #[test]
    fn write_hex_layout() {
        let table = LutTable::generate(SampleGrid::new(2, 0), |x| x);
        let mut buf = Vec::new();
        table.write_hex(&mut buf).unwrap();

        assert_eq!(table.grid(), SampleGrid::new(2, 0));
        assert_eq!(table.len(), 3);

        // x = 0, -1, -2
        assert_eq!(buf, b"00000000\nbf800000\nc0000000\n");
        assert_eq!(String::from_utf8(buf).unwrap(), table.to_hex_string());
    }

    #[test]
    fn macro_declares_generator() {
        let dir = tempfile::tempdir().unwrap();
        let report = halve_lut(dir.path()).unwrap();
        println!("{report}");

        assert_eq!(report.entries, 5);
        assert_eq!(report.to_string(), "Generated halve.hex with 5 entries.");

        // x = 0, -0.5, -1, -1.5, -2 halved
        let want: Vec<F32Word> = [0.0f32, -0.25, -0.5, -0.75, -1.0]
            .iter()
            .map(|&v| F32Word::from(v))
            .collect();
        assert_eq!(read_lut_file(&report.path).unwrap(), want);
    }

    #[test]
    fn open_failure_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        // A directory squatting on the file name can't be opened for writing.
        fs::create_dir(dir.path().join("halve.hex")).unwrap();

        let err = halve_lut(dir.path()).unwrap_err();
        println!("{err}");
        assert!(matches!(err, LutError::OutputOpen { .. }));
        assert!(err.to_string().starts_with("failed to open output file"));
        assert!(dir.path().join("halve.hex").is_dir());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_failure_after_open_is_reported() {
        use std::path::Path;

        // /dev/full opens fine and fails every write with ENOSPC.
        let table = LutTable::generate(SampleGrid::new(1024, -7), |x| x.exp());
        let full = Path::new("/dev/full");

        match write_lut_file(&table, full) {
            Err(LutError::OutputWrite { path, source }) => {
                println!("{source}");
                assert_eq!(path, full);
                assert_eq!(source.raw_os_error(), Some(28)); // ENOSPC
            }
            other => panic!("expected OutputWrite, got {other:?}"),
        }
    }

    #[test]
    fn read_reports_line_of_bad_word() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.hex");
        fs::write(&path, "3f800000\n3f80zz00\n").unwrap();

        match read_lut_file(&path) {
            Err(LutError::Parse { line, source, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(source, WordParseError::Digit { digit: 'z', position: 4 });
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        match read_lut_file(&dir.path().join("absent.hex")) {
            Err(LutError::Read { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn report_display_uses_file_name() {
        let report = LutReport {
            path: "some/dir/exp_lut_1over128.hex".into(),
            entries: 1025,
        };
        assert_eq!(
            report.to_string(),
            "Generated exp_lut_1over128.hex with 1025 entries."
        );
    }
}
