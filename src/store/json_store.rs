use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::session::result::ResultRecord;
use crate::store::schema::{self, HISTORY_FILE};
use crate::store::{ResultRepository, StoreError};

/// File-backed repository keeping the whole history in one JSON document.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn history_path(&self) -> PathBuf {
        self.base_dir.join(HISTORY_FILE)
    }
}

impl ResultRepository for JsonStore {
    fn load(&self) -> Vec<ResultRecord> {
        let path = self.history_path();
        match fs::read_to_string(&path) {
            Ok(content) => schema::decode_history(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not read result history");
                Vec::new()
            }
        }
    }

    fn save(&mut self, records: &[ResultRecord]) -> Result<(), StoreError> {
        let path = self.history_path();
        let tmp_path = path.with_extension("tmp");

        let json = schema::encode_history(records)?;
        let written = write_and_sync(&tmp_path, json.as_bytes())
            .and_then(|()| fs::rename(&tmp_path, &path));

        if let Err(err) = written {
            // The target is untouched; only the partial copy needs removing.
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
