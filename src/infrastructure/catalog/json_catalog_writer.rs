use std::path::PathBuf;

use error_stack::ResultExt;
use tracing::instrument;

use crate::domain::catalog::{CatalogEntry, CatalogList};
use crate::domain::catalog_writer::{CatalogWriter, CatalogWriterError};
use crate::infrastructure::config::output_config::OutputConfig;

/// Writes each list as `<output_dir>/<list>.json`.
#[derive(Debug)]
pub struct JsonCatalogWriter {
    output_dir: PathBuf,
}

impl JsonCatalogWriter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
        }
    }

    pub fn path_for(&self, list: CatalogList) -> PathBuf {
        self.output_dir.join(list.file_name())
    }
}

/// Pretty JSON array with 2-space indentation and a trailing newline. Non-ASCII text is kept as is.
pub fn to_json_document(entries: &[CatalogEntry]) -> serde_json::Result<String> {
    let mut document = serde_json::to_string_pretty(entries)?;
    document.push('\n');
    Ok(document)
}

impl CatalogWriter for JsonCatalogWriter {
    #[instrument(skip(entries), fields(count = entries.len()))]
    fn write(
        &self,
        list: CatalogList,
        entries: &[CatalogEntry],
    ) -> error_stack::Result<PathBuf, CatalogWriterError> {
        std::fs::create_dir_all(&self.output_dir)
            .change_context(CatalogWriterError::CreateDirError)
            .attach_printable_lazy(|| format!("directory: {}", self.output_dir.display()))?;

        let document =
            to_json_document(entries).change_context(CatalogWriterError::SerializeError(list))?;

        let path = self.path_for(list);
        std::fs::write(&path, document)
            .change_context(CatalogWriterError::WriteError(list))
            .attach_printable_lazy(|| format!("path: {}", path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer_in(dir: &std::path::Path) -> JsonCatalogWriter {
        JsonCatalogWriter::new(&OutputConfig {
            output_dir: dir.to_path_buf(),
        })
    }

    #[test]
    fn test_document_layout() {
        let entries = vec![
            CatalogEntry::new("Books", "Dune", "Villeneuve"),
            CatalogEntry::new("", "Alien", ""),
        ];
        let expected = r#"[
  {
    "category": "Books",
    "director": "Villeneuve",
    "title": "Dune"
  },
  {
    "category": "",
    "director": "",
    "title": "Alien"
  }
]
"#;
        assert_eq!(to_json_document(&entries).unwrap(), expected);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_json_document(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let entries = vec![CatalogEntry::new("Animação", "千と千尋の神隠し", "宮崎駿")];
        let document = to_json_document(&entries).unwrap();
        assert!(document.contains("\"title\": \"千と千尋の神隠し\""));
        assert!(document.contains("\"category\": \"Animação\""));
        assert!(!document.contains("\\u"));
    }

    #[test]
    fn test_document_parses_back() {
        let entries = vec![
            CatalogEntry::new("Noir", "Double Indemnity", "Wilder"),
            CatalogEntry::new("Noir", "Laura", "Preminger"),
        ];
        let document = to_json_document(&entries).unwrap();
        let parsed: Vec<CatalogEntry> = serde_json::from_str(&document).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_write_creates_list_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path());
        let entries = vec![CatalogEntry::new("Western", "Rio Bravo", "Hawks")];

        let path = writer.write(CatalogList::Collection, &entries).unwrap();

        assert_eq!(path, dir.path().join("collection.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json_document(&entries).unwrap());
    }

    #[test]
    fn test_write_replaces_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path());
        std::fs::write(dir.path().join("wantlist.json"), "stale contents").unwrap();

        let path = writer.write(CatalogList::Wantlist, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(&dir.path().join("site").join("data"));

        let path = writer.write(CatalogList::Wantlist, &[]).unwrap();

        assert!(path.ends_with("site/data/wantlist.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let writer = writer_in(&blocker);

        let report = writer.write(CatalogList::Collection, &[]).unwrap_err();

        assert!(matches!(
            report.current_context(),
            CatalogWriterError::CreateDirError
        ));
    }
}
