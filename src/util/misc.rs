use std::io::Write;
use std::path::Path;

pub fn write_to_file(file_path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(prefix) = file_path.parent() {
        std::fs::create_dir_all(prefix)?;
    }
    let mut f = std::fs::File::create(file_path)?;
    write!(f, "{}", data)?;
    Ok(())
}
