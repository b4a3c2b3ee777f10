use anyhow::Result;
use std::path::{Path, PathBuf};
use workshop_core::export;

/// Write the products CSV to `output`, or stdout when no path is given.
pub fn run(root: &Path, output: Option<&PathBuf>) -> Result<()> {
    let (store, _) = super::open_store(root)?;
    let csv_text = export::products_csv(&store)?;

    match output {
        Some(path) => {
            workshop_core::io::atomic_write(path, csv_text.as_bytes())?;
            println!(
                "Wrote {} product(s) to {}",
                store.products.len(),
                path.display()
            );
        }
        None => print!("{csv_text}"),
    }
    Ok(())
}
