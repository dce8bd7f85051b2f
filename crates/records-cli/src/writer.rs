//! Output sink handling.

use cube_records_core::cli::OutputTarget;
use cube_records_core::{Error, Result};
use tracing::info;

/// Writes the generated source to the chosen target.
///
/// Stdout output goes through `print!` unchanged so the result can be
/// piped straight into a `.d.ts` file; file output replaces the target
/// atomically from the caller's point of view.
///
/// # Errors
///
/// Returns [`Error::WriteFailed`] if the file cannot be written.
pub async fn write_output(target: &OutputTarget, contents: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            print!("{contents}");
            Ok(())
        }
        OutputTarget::File(path) => {
            tokio::fs::write(path, contents)
                .await
                .map_err(|source| Error::WriteFailed {
                    path: path.display().to_string(),
                    source,
                })?;
            info!(path = %path.display(), bytes = contents.len(), "wrote declarations");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.d.ts");
        let target = OutputTarget::File(path.clone());

        write_output(&target, "export {};\n").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export {};\n");
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.d.ts");
        std::fs::write(&path, "stale").unwrap();
        let target = OutputTarget::File(path.clone());

        write_output(&target, "fresh\n").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[tokio::test]
    async fn test_missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cube.d.ts");
        let target = OutputTarget::File(path);

        let err = write_output(&target, "export {};\n").await.unwrap_err();
        assert!(err.is_write_error());
    }

    #[tokio::test]
    async fn test_stdout_target_succeeds() {
        write_output(&OutputTarget::Stdout, "export {};\n")
            .await
            .unwrap();
    }
}
