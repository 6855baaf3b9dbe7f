// src/utils.rs

/// Join the non-blank parts with a separator, keeping their relative order.
pub fn join_nonempty<'a, I>(separator: &str, parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Download filename for a generated resume, derived from the full name.
pub fn download_filename(full_name: &str) -> String {
    format!("{}_AI_Resume.pdf", full_name.replace(' ', "_"))
}
