use std::path::Path;

/// Extensions accepted for upload. Everything else is rejected up front.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".jpg", ".jpeg", ".png", ".gif"];

/// Returns the lowercased extension of `filename` including the leading dot,
/// or an empty string when the name has no extension at all.
pub fn extension_of(filename: &str) -> String {
    match Path::new(filename).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{}", ext.to_lowercase()),
        None => String::new(),
    }
}

/// Checks every filename in the batch against the allow-list, in order.
/// Returns the first offending extension, or `None` when all pass.
pub fn first_disallowed_extension<'a>(
    filenames: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    for filename in filenames {
        let ext = extension_of(filename);
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Some(ext);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("report.pdf"), ".pdf");
        assert_eq!(extension_of("PHOTO.JPG"), ".jpg");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("noextension"), "");
        assert_eq!(extension_of(".gitignore"), "");
    }

    #[test]
    fn test_allowed_batch() {
        let names = ["a.pdf", "b.jpeg", "c.PNG", "d.gif", "e.jpg"];
        assert_eq!(first_disallowed_extension(names), None);
    }

    #[test]
    fn test_first_offender_reported() {
        // Earlier allowed files must not mask the offender.
        let names = ["ok.pdf", "bad.txt", "also-bad.exe"];
        assert_eq!(first_disallowed_extension(names), Some(".txt".to_string()));
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert_eq!(first_disallowed_extension(["README"]), Some(String::new()));
    }
}
