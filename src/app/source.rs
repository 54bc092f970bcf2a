use std::path::PathBuf;

use tracing::debug;

use super::converter::{BoxError, RecordSource};

// [FileSource]
// ディレクトリの場合は <dir>/<id> を, ファイルの場合はIDに関係なくそのファイルを読み込む
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn resolve(&self, id: &str) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(id)
        } else {
            self.path.clone()
        }
    }
}

impl RecordSource for FileSource {
    fn fetch_raw_record(&self, id: &str) -> Result<Vec<u8>, BoxError> {
        let path = self.resolve(id);
        debug!("read record: {}", path.display());
        std::fs::read(&path).map_err(|e| format!("{}: {}", path.display(), e).into())
    }
}
