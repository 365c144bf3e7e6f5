//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Join a base URL and a relative link with exactly one `/` between them.
///
/// An empty base keeps the link relative.
///
/// # Examples
/// ```ignore
/// join_url("", "blog/x/")                          -> "blog/x/"
/// join_url("http://jakevdp.github.io", "blog/x/")  -> "http://jakevdp.github.io/blog/x/"
/// join_url("http://jakevdp.github.io/", "/blog/")  -> "http://jakevdp.github.io/blog/"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← start
/// /home/user/blog/blogconf.toml   ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "blog/2013/"), "blog/2013/");
        assert_eq!(
            join_url("http://jakevdp.github.io", "blog/2013/"),
            "http://jakevdp.github.io/blog/2013/"
        );
        assert_eq!(
            join_url("http://jakevdp.github.io/", "/archives.html"),
            "http://jakevdp.github.io/archives.html"
        );
    }

    #[test]
    fn test_find_config_file_upward() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("content/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("blogconf.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("blogconf.toml")).unwrap();
        assert_eq!(found, temp.path().join("blogconf.toml"));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        assert!(find_config_file(temp.path(), &path).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }
}
