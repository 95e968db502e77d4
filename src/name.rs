/// Split a directory entry name into its base name and optional extension.
///
/// The extension is whatever follows the last `.`, as long as it is non-empty
/// and made only of word characters (alphanumerics or `_`). Anything else
/// (no dot, a trailing dot, punctuation after the dot) leaves the whole name as
/// the base. A leading-dot name such as `.gitignore` has an empty base.
///
/// ```
/// use simfold::split_name;
///
/// assert_eq!(split_name("report.txt"), ("report", Some("txt")));
/// assert_eq!(split_name("archive.tar.gz"), ("archive.tar", Some("gz")));
/// assert_eq!(split_name(".gitignore"), ("", Some("gitignore")));
/// assert_eq!(split_name("Makefile"), ("Makefile", None));
/// ```
#[must_use]
pub fn split_name(name: &str) -> (&str, Option<&str>) {
    let Some(dot) = name.rfind('.') else {
        return (name, None);
    };
    let ext = &name[dot + 1..];
    if !ext.is_empty() && ext.chars().all(is_word_char) {
        (&name[..dot], Some(ext))
    } else {
        (name, None)
    }
}

/// The base-name half of [`split_name`].
#[must_use]
pub fn base_name(name: &str) -> &str {
    split_name(name).0
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
