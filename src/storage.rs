use crate::error::PersistError;
use crate::results::PageRecord;
use std::path::{Path, PathBuf};
use url::Url;

/// Replace characters that are not safe in file names
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', '?', '&', '=', '#', '%', '[', ']', '*'], "_")
}

/// File name for a record: `<domain>_data.json`, with `_<port>` appended to the
/// domain when the URL names a non-default port
pub fn record_file_name(url: &str) -> Result<String, PersistError> {
    let parsed = Url::parse(url).map_err(|_| PersistError::NoDomain(url.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| PersistError::NoDomain(url.to_string()))?;

    let domain = match parsed.port() {
        Some(port) => format!("{}_{}", host, port),
        None => host.to_string(),
    };

    Ok(format!("{}_data.json", sanitize_filename(&domain)))
}

/// Write `record` as indented JSON into `dir`, creating the directory if needed.
///
/// An existing file for the same domain is replaced.
pub fn persist(record: &PageRecord, dir: &Path) -> Result<PathBuf, PersistError> {
    let path = dir.join(record_file_name(&record.url)?);

    let mut json = serde_json::to_string_pretty(record).map_err(|source| {
        PersistError::Serialize {
            path: path.clone(),
            source,
        }
    })?;
    json.push('\n');

    std::fs::create_dir_all(dir).map_err(|source| PersistError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    std::fs::write(&path, json).map_err(|source| PersistError::Io {
        path: path.clone(),
        source,
    })?;

    ::log::info!("Saved {} to {}", record.url, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(url: &str) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            title: "Example Domain".to_string(),
            meta_description: String::new(),
            headings: vec!["Example Domain".to_string()],
            content_snippet: "This domain is for use in illustrative examples.".to_string(),
            links: vec!["https://www.iana.org/domains/example".to_string()],
        }
    }

    #[test]
    fn test_record_file_name() {
        assert_eq!(
            record_file_name("https://example.com").unwrap(),
            "example.com_data.json"
        );
        assert_eq!(
            record_file_name("https://sub.example.com/a/b?c=d").unwrap(),
            "sub.example.com_data.json"
        );
        assert_eq!(
            record_file_name("http://127.0.0.1:8080/").unwrap(),
            "127.0.0.1_8080_data.json"
        );
        assert_eq!(
            record_file_name("http://[::1]:3000/").unwrap(),
            "___1__3000_data.json"
        );
        assert!(matches!(
            record_file_name("data:text/plain,hello"),
            Err(PersistError::NoDomain(_))
        ));
    }

    #[test]
    fn test_persist_creates_directory_and_writes_json() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("scrapped-data");
        let record = sample("https://example.com");

        let path = persist(&record, &dir).unwrap();
        assert_eq!(path, dir.join("example.com_data.json"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"url\": \"https://example.com\""));
        // Indented output
        assert!(contents.contains("\n  \"title\": \"Example Domain\""));

        let parsed: PageRecord = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_persist_key_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = persist(&sample("https://example.com"), tmp.path()).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();

        let positions: Vec<usize> = [
            "\"url\"",
            "\"title\"",
            "\"meta_description\"",
            "\"headings\"",
            "\"content_snippet\"",
            "\"links\"",
        ]
        .iter()
        .map(|key| contents.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_persist_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let first = sample("https://example.com/one");
        let mut second = sample("https://example.com/two");
        second.title = "Replaced".to_string();

        let path_one = persist(&first, tmp.path()).unwrap();
        let path_two = persist(&second, tmp.path()).unwrap();
        assert_eq!(path_one, path_two);

        let parsed: PageRecord =
            serde_json::from_str(&std::fs::read_to_string(&path_two).unwrap()).unwrap();
        assert_eq!(parsed, second);
    }

    #[test]
    fn test_persist_reports_unwritable_location() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let result = persist(&sample("https://example.com"), &blocker);
        assert!(matches!(result, Err(PersistError::Io { .. })));
    }
}
