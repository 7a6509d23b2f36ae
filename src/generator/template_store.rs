use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub const BACKUP_SUFFIX: &str = ".backup";

pub fn backup_name(name: &str) -> String {
    format!("{}{}", name, BACKUP_SUFFIX)
}

pub trait TemplateStore {
    type Error: std::error::Error + Sync + Send + 'static;

    fn exists(&self, name: &str) -> bool;
    fn read(&self, name: &str) -> Result<String, Self::Error>;
    fn write(&mut self, name: &str, content: &str) -> Result<(), Self::Error>;
    fn copy(&mut self, from: &str, to: &str) -> Result<(), Self::Error>;
    /// File names in the store, sorted.
    fn list(&self) -> Result<Vec<String>, Self::Error>;

    /// Copies `name` to its backup unless the backup already exists.
    ///
    /// Returns whether a backup was written. A missing primary file is not an
    /// error, there is simply nothing to preserve.
    fn preserve_if_absent(&mut self, name: &str) -> Result<bool, Self::Error> {
        let backup = backup_name(name);
        if self.exists(name) && !self.exists(&backup) {
            self.copy(name, &backup)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to read `{}`", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("unable to write `{}`", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("unable to copy `{}` to `{}`", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error("unable to list `{}`", path.display())]
    List { path: PathBuf, source: io::Error },
}

/// Template directory on disk. The directory must already exist.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    dir: PathBuf,
}

impl FsTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl TemplateStore for FsTemplateStore {
    type Error = StoreError;

    fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    fn read(&self, name: &str) -> Result<String, Self::Error> {
        let path = self.path(name);
        fs::read_to_string(&path).map_err(|source| StoreError::Read { path, source })
    }

    // Staged beside the target, then renamed over it.
    #[tracing::instrument(level = "debug", skip(self, content), fields(len = content.len()))]
    fn write(&mut self, name: &str, content: &str) -> Result<(), Self::Error> {
        let path = self.path(name);
        let staging = self.path(&format!(".{}.tmp", name));
        fs::write(&staging, content).map_err(|source| StoreError::Write {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &path).map_err(|source| {
            let _ = fs::remove_file(&staging);
            StoreError::Write { path, source }
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn copy(&mut self, from: &str, to: &str) -> Result<(), Self::Error> {
        let (from, to) = (self.path(from), self.path(to));
        fs::copy(&from, &to)
            .map(|_| ())
            .map_err(|source| StoreError::Copy { from, to, source })
    }

    fn list(&self) -> Result<Vec<String>, Self::Error> {
        let list_err = |source: io::Error| StoreError::List {
            path: self.dir.clone(),
            source,
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            if entry.file_type().map_err(list_err)?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::{backup_name, FsTemplateStore, StoreError, TemplateStore};

    #[test]
    fn test_backup_name() {
        assert_eq!(backup_name("cobranca-7dias.html"), "cobranca-7dias.html.backup");
    }

    #[test]
    fn test_preserve_if_absent_copies_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FsTemplateStore::new(dir.path());
        store.write("primeira-cobranca.html", "v1").unwrap();

        assert!(store.preserve_if_absent("primeira-cobranca.html").unwrap());
        store.write("primeira-cobranca.html", "v2").unwrap();
        assert!(!store.preserve_if_absent("primeira-cobranca.html").unwrap());
        store.write("primeira-cobranca.html", "v3").unwrap();

        assert_eq!(store.read("primeira-cobranca.html.backup").unwrap(), "v1");
        assert_eq!(store.read("primeira-cobranca.html").unwrap(), "v3");
    }

    #[test]
    fn test_preserve_if_absent_without_primary() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FsTemplateStore::new(dir.path());
        assert!(!store.preserve_if_absent("solicitacao-contato.html").unwrap());
        assert!(!store.exists("solicitacao-contato.html.backup"));
    }

    #[test]
    fn test_list_skips_directories_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        let mut store = FsTemplateStore::new(dir.path());
        store.write("b.html", "b").unwrap();
        store.write("a.html", "a").unwrap();
        assert_eq!(store.list().unwrap(), vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FsTemplateStore::new(dir.path().join("absent"));
        assert!(matches!(
            store.write("a.html", "a"),
            Err(StoreError::Write { .. })
        ));
        assert!(matches!(store.list(), Err(StoreError::List { .. })));
        assert!(matches!(store.read("a.html"), Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_failed_rename_removes_staged_file() {
        let dir = tempfile::tempdir().unwrap();
        let occupied = dir.path().join("cobranca-7dias.html");
        fs::create_dir(&occupied).unwrap();
        fs::write(occupied.join("keep"), "x").unwrap();
        let mut store = FsTemplateStore::new(dir.path());

        assert!(matches!(
            store.write("cobranca-7dias.html", "<html></html>"),
            Err(StoreError::Write { .. })
        ));
        assert!(!dir.path().join(".cobranca-7dias.html.tmp").exists());
        assert_eq!(store.list().unwrap(), Vec::<String>::new());
    }
}
