//! Credential file layout and persistence

use crate::error::{KeyKind, KeygenError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mode for `<name>.auth` (no secret material)
pub const PUBLIC_FILE_MODE: u32 = 0o644;

/// Mode for `<name>_onion.auth_private`
pub const PRIVATE_FILE_MODE: u32 = 0o600;

/// Where the two credential files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPaths {
    pub public: PathBuf,
    pub private: PathBuf,
}

impl CredentialPaths {
    /// Paths for `name` inside `dir`
    ///
    /// An empty `dir` yields bare file names relative to the working directory.
    pub fn new(dir: &Path, name: &str) -> Self {
        Self {
            public: dir.join(format!("{}.auth", name)),
            private: dir.join(format!("{}_onion.auth_private", name)),
        }
    }
}

/// Write the public line, then the private line
///
/// The private file is never attempted when the public write fails.
pub fn persist(paths: &CredentialPaths, public_line: &str, private_line: &str) -> Result<()> {
    write_key_file(&paths.public, public_line, PUBLIC_FILE_MODE, KeyKind::Public)?;
    debug!("Wrote public key file {:?}", paths.public);

    write_key_file(
        &paths.private,
        private_line,
        PRIVATE_FILE_MODE,
        KeyKind::Private,
    )?;
    debug!("Wrote private key file {:?}", paths.private);

    Ok(())
}

/// Create or truncate `path`, fix its mode, then write `contents`
///
/// Permissions are applied before any content lands so an existing file
/// with looser bits never holds the new key.
#[cfg_attr(not(unix), allow(unused_variables))]
fn write_key_file(path: &Path, contents: &str, mode: u32, kind: KeyKind) -> Result<()> {
    let to_error = |source| KeygenError::FileWrite {
        kind,
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options.open(path).map_err(to_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(mode))
            .map_err(to_error)?;
    }

    file.write_all(contents.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_in_working_directory() {
        let paths = CredentialPaths::new(Path::new(""), "svc");
        assert_eq!(paths.public, PathBuf::from("svc.auth"));
        assert_eq!(paths.private, PathBuf::from("svc_onion.auth_private"));
    }

    #[test]
    fn test_paths_in_directory() {
        let paths = CredentialPaths::new(Path::new("/tmp/keys"), "alice");
        assert_eq!(paths.public, PathBuf::from("/tmp/keys/alice.auth"));
        assert_eq!(
            paths.private,
            PathBuf::from("/tmp/keys/alice_onion.auth_private")
        );
    }

    #[test]
    fn test_persist_writes_both_lines() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths::new(dir.path(), "svc");

        persist(&paths, "pub-line", "priv-line").unwrap();

        assert_eq!(fs::read_to_string(&paths.public).unwrap(), "pub-line");
        assert_eq!(fs::read_to_string(&paths.private).unwrap(), "priv-line");
    }

    #[cfg(unix)]
    #[test]
    fn test_persist_sets_modes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths::new(dir.path(), "svc");
        persist(&paths, "a", "b").unwrap();

        let public_mode = fs::metadata(&paths.public).unwrap().permissions().mode();
        let private_mode = fs::metadata(&paths.private).unwrap().permissions().mode();
        assert_eq!(public_mode & 0o777, 0o644);
        assert_eq!(private_mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_tightens_existing_private_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths::new(dir.path(), "svc");
        fs::write(&paths.private, "old contents that are longer").unwrap();
        fs::set_permissions(&paths.private, fs::Permissions::from_mode(0o666)).unwrap();

        persist(&paths, "a", "new").unwrap();

        let meta = fs::metadata(&paths.private).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&paths.private).unwrap(), "new");
    }

    #[test]
    fn test_public_failure_skips_private() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths::new(dir.path(), "svc");
        // A directory in place of the file makes the open fail, even for root
        fs::create_dir(&paths.public).unwrap();

        let err = persist(&paths, "a", "b").unwrap_err();
        match err {
            KeygenError::FileWrite { kind, path, .. } => {
                assert_eq!(kind, KeyKind::Public);
                assert_eq!(path, paths.public);
            },
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!paths.private.exists());
    }

    #[test]
    fn test_private_failure_keeps_public() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CredentialPaths::new(dir.path(), "svc");
        fs::create_dir(&paths.private).unwrap();

        let err = persist(&paths, "a", "b").unwrap_err();
        match err {
            KeygenError::FileWrite { kind, path, .. } => {
                assert_eq!(kind, KeyKind::Private);
                assert_eq!(path, paths.private);
            },
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(fs::read_to_string(&paths.public).unwrap(), "a");
    }
}
