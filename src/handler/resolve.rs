//! Path resolution module
//!
//! THE CORE of the server: deterministically maps a request path to a
//! file beneath the document root. Extensionless paths ("clean URLs")
//! fall back to their `.html` twin, directories fall back to their
//! `index.html`.
//!
//! Resolution order:
//! 1. Strip exactly one trailing `/` (the root path `/` keeps it).
//! 2. Join the path beneath the document root.
//! 3. If the final path segment has no `.` and the path is not `/`,
//!    prefer `<candidate>.html` when it exists as a regular file.
//! 4. If the candidate is a directory, descend to its `index.html`.
//! 5. The final candidate must be a regular file inside the root.

use std::path::{Path, PathBuf};

use crate::logger;

/// A file that answers a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Filesystem path of the file to serve.
    pub path: PathBuf,
    /// Lowercased extension of the resolved file, if it has one.
    pub extension: Option<String>,
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    File(ResolvedFile),
    NotFound,
}

/// Resolve a request path to a file under `root`.
///
/// `request_path` is the URI path component only (no query or
/// fragment); `root` must be canonical, as produced by
/// [`crate::config::AppState::new`].
pub fn resolve(request_path: &str, root: &Path) -> Resolved {
    // Remove trailing slash except for root
    let path = if request_path != "/" && request_path.ends_with('/') {
        &request_path[..request_path.len() - 1]
    } else {
        request_path
    };

    let mut candidate = root.join(path.trim_start_matches('/'));

    // Clean URL: extensionless non-root paths prefer their .html twin
    if path != "/" && !final_segment_has_extension(path) {
        let twin = html_twin(&candidate);
        if twin.is_file() {
            candidate = twin;
        }
    }

    // Directory index
    if candidate.is_dir() {
        candidate = candidate.join("index.html");
    }

    if !candidate.is_file() {
        return Resolved::NotFound;
    }

    // The final candidate must not escape the document root
    match candidate.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => {}
        Ok(canonical) => {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                request_path,
                canonical.display()
            ));
            return Resolved::NotFound;
        }
        Err(_) => return Resolved::NotFound,
    }

    let extension = candidate
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    Resolved::File(ResolvedFile {
        path: candidate,
        extension,
    })
}

/// Whether the final `/`-separated segment contains a `.`
fn final_segment_has_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|seg| seg.contains('.'))
}

/// The candidate path with `.html` appended to its file name.
fn html_twin(candidate: &Path) -> PathBuf {
    let mut twin = candidate.to_path_buf().into_os_string();
    twin.push(".html");
    PathBuf::from(twin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Create a unique, empty fixture root and return its canonical path.
    fn fixture_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cleanserve-resolve-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.canonicalize().unwrap()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn expect_file(result: Resolved) -> ResolvedFile {
        match result {
            Resolved::File(f) => f,
            Resolved::NotFound => panic!("expected a resolved file"),
        }
    }

    #[test]
    fn clean_url_resolves_to_html_twin() {
        let root = fixture_root("clean-url");
        write(&root, "pages/academics.html", "<h1>Academics</h1>");

        let file = expect_file(resolve("/pages/academics", &root));
        assert_eq!(file.path, root.join("pages/academics.html"));
        assert_eq!(file.extension.as_deref(), Some("html"));
    }

    #[test]
    fn explicit_extension_served_as_is() {
        let root = fixture_root("explicit-ext");
        write(&root, "styles/main.css", "body {}");

        let file = expect_file(resolve("/styles/main.css", &root));
        assert_eq!(file.path, root.join("styles/main.css"));
        assert_eq!(file.extension.as_deref(), Some("css"));
    }

    #[test]
    fn path_with_extension_never_gets_html_guess() {
        let root = fixture_root("no-guess");
        // Only the .html twin exists; the request names the bare path
        write(&root, "style.css.html", "not a stylesheet");

        assert_eq!(resolve("/style.css", &root), Resolved::NotFound);
    }

    #[test]
    fn directory_resolves_to_index_with_and_without_slash() {
        let root = fixture_root("dir-index");
        write(&root, "about/index.html", "<h1>About</h1>");

        let plain = expect_file(resolve("/about", &root));
        let slashed = expect_file(resolve("/about/", &root));
        assert_eq!(plain.path, root.join("about/index.html"));
        assert_eq!(plain, slashed);
    }

    #[test]
    fn root_path_resolves_to_top_level_index() {
        let root = fixture_root("root-index");
        write(&root, "index.html", "<h1>Home</h1>");

        let file = expect_file(resolve("/", &root));
        assert_eq!(file.path, root.join("index.html"));
        assert_eq!(file.extension.as_deref(), Some("html"));
    }

    #[test]
    fn missing_path_is_not_found() {
        let root = fixture_root("missing");
        assert_eq!(resolve("/nonexistent", &root), Resolved::NotFound);
    }

    #[test]
    fn directory_without_index_is_not_found() {
        let root = fixture_root("no-index");
        fs::create_dir_all(root.join("empty")).unwrap();

        assert_eq!(resolve("/empty", &root), Resolved::NotFound);
        assert_eq!(resolve("/empty/", &root), Resolved::NotFound);
    }

    #[test]
    fn html_twin_wins_over_plain_file() {
        let root = fixture_root("twin-wins");
        write(&root, "report", "plain");
        write(&root, "report.html", "<h1>Report</h1>");

        let file = expect_file(resolve("/report", &root));
        assert_eq!(file.path, root.join("report.html"));
    }

    #[test]
    fn extensionless_file_without_twin_is_served() {
        let root = fixture_root("bare-file");
        write(&root, "README", "read me");

        let file = expect_file(resolve("/README", &root));
        assert_eq!(file.path, root.join("README"));
        assert_eq!(file.extension, None);
    }

    #[test]
    fn extension_is_lowercased() {
        let root = fixture_root("ext-case");
        write(&root, "LOGO.PNG", "png bytes");

        let file = expect_file(resolve("/LOGO.PNG", &root));
        assert_eq!(file.extension.as_deref(), Some("png"));
    }

    #[test]
    fn traversal_outside_root_is_blocked() {
        let base = fixture_root("traversal");
        let root = base.join("root");
        fs::create_dir_all(&root).unwrap();
        fs::write(base.join("secret.txt"), "secret").unwrap();
        let root = root.canonicalize().unwrap();

        assert_eq!(resolve("/../secret.txt", &root), Resolved::NotFound);
    }
}
