//! URL filtering before handing links to the system opener.

use url::Url;

const OPENABLE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Returns the URL when it is absolute and uses a web or mail scheme.
///
/// Placeholders such as `#` or relative paths from the data files yield `None`.
pub fn openable_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let url = Url::parse(raw).ok()?;
    OPENABLE_SCHEMES
        .contains(&url.scheme())
        .then(|| raw.to_string())
}
