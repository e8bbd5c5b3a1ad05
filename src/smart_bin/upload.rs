use std::path::Path;

/// Mirrors the uploader's type filter: only the configured extensions, any case.
pub fn is_accepted_image(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            extensions
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(extension))
        })
        .unwrap_or(false)
}
