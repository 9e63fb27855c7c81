use core::fmt;
use std::path::PathBuf;

/// Outcome of a successful generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LutReport {
    pub path: PathBuf,
    pub entries: usize,
}

/// `Generated <file name> with <n> entries.`
impl fmt::Display for LutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy());
        write!(f, "Generated {} with {} entries.", name, self.entries)
    }
}

/* ------------ Macros ------------ */

/// Declare a generator `pub fn $name(dir: &Path) -> Result<LutReport, LutError>`
/// that evaluates `func` over `grid` and writes `dir/file`.
#[macro_export]
macro_rules! lut_create {
    (
        name = $name:ident,
        func = $f:path,
        grid = $grid:expr,
        file = $file:expr
    ) => {
        pub fn $name(
            dir: &::std::path::Path,
        ) -> ::core::result::Result<$crate::LutReport, $crate::LutError> {
            let _span = ::tracing::debug_span!(
                "lut_create",
                name = stringify!($name),
                func = stringify!($f)
            )
            .entered();

            let grid: $crate::SampleGrid = $grid;
            let table = $crate::LutTable::generate(grid, $f);
            debug_assert_eq!(table.len(), grid.len());

            $crate::write_lut_file(&table, &dir.join($file))
        }
    };
}
