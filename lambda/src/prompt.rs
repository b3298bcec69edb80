/// Longest title or year fragment interpolated into a prompt
pub const MAX_PROMPT_FIELD_LEN: usize = 200;

/// Used when a stored movie has no release year
pub const UNKNOWN_YEAR: &str = "an unknown year";

/// Remove control characters and hard-truncate a value before it goes into a prompt
pub fn sanitize_prompt_field(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .take(MAX_PROMPT_FIELD_LEN)
        .collect()
}

/// Builds the summary request sent to the model for one movie.
///
/// The template is fixed so the same movie always produces the same prompt.
pub fn summary_prompt(title: &str, release_year: Option<&str>) -> String {
    let title = sanitize_prompt_field(title);
    let year = release_year
        .map(sanitize_prompt_field)
        .filter(|y| !y.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string());

    format!("Generate a brief summary for the movie titled {title}, released in {year}.")
}
