//! Line-oriented flat-file store
//!
//! Each logical collection name maps to `<data_dir>/<name>.csv`.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use garage_types::StoreError;
use tempfile::NamedTempFile;

const FILE_EXTENSION: &str = "csv";

type StoreResult<T> = std::result::Result<T, StoreError>;

/// Primitive line operations on named files inside one data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(|e| StoreError::io(&data_dir, e))?;
            log::info!("Created data directory {}", data_dir.display());
        }
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the file backing `name`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", name, FILE_EXTENSION))
    }

    /// Non-empty lines in file order, trimmed. A missing file reads as empty.
    pub fn read_lines(&self, name: &str) -> StoreResult<Vec<String>> {
        let path = self.path_for(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| StoreError::io(&path, e))?;
            let line = line.trim();
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }
        Ok(lines)
    }

    /// Replace the whole content of `name` with `lines`.
    ///
    /// The new content is written to a temporary file in the data directory and
    /// renamed over the target, so readers never observe a half-written file.
    pub fn write_lines<S: AsRef<str>>(&self, name: &str, lines: &[S]) -> StoreResult<()> {
        let path = self.path_for(name);
        let mut tmp =
            NamedTempFile::new_in(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;
        for line in lines {
            writeln!(tmp, "{}", line.as_ref()).map_err(|e| StoreError::io(tmp.path(), e))?;
        }
        tmp.flush().map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| StoreError::io(&path, e.error))?;
        log::debug!("Rewrote {} ({} lines)", path.display(), lines.len());
        Ok(())
    }

    /// Add one line at the end of `name`, creating the file if absent
    pub fn append_line(&self, name: &str, line: &str) -> StoreResult<()> {
        let path = self.path_for(name);
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|e| StoreError::io(&path, e))?;

        let mut record = String::with_capacity(line.len() + 2);
        if !ends_with_newline(&mut file).map_err(|e| StoreError::io(&path, e))? {
            record.push('\n');
        }
        record.push_str(line);
        record.push('\n');

        file.write_all(record.as_bytes())
            .map_err(|e| StoreError::io(&path, e))?;
        log::debug!("Appended to {}", path.display());
        Ok(())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    /// Remove the file backing `name`; false if there was nothing to remove
    pub fn delete(&self, name: &str) -> StoreResult<bool> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

/// True for an empty file or one whose last byte is '\n'
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
