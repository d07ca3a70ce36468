/// Derive the artifact's on-disk file name from the final path segment
/// of its source URL. Query and fragment parts are ignored.
///
/// Returns `None` when the URL ends in a separator and names no file.
pub fn artifact_file_name(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next().unwrap_or("");
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_final_segment() {
        assert_eq!(
            artifact_file_name("https://cdn.example.com/releases/app-2.4.1.apk"),
            Some("app-2.4.1.apk".to_string())
        );
    }

    #[test]
    fn strips_query_and_fragment() {
        assert_eq!(
            artifact_file_name("https://host/dl/pkg.apk?token=abc#frag"),
            Some("pkg.apk".to_string())
        );
    }

    #[test]
    fn trailing_slash_names_no_file() {
        assert_eq!(artifact_file_name("https://host/releases/"), None);
    }
}
