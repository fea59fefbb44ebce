//! Splitting generated text into description and motivation.

/// Split generated scene text into a description and a trailing "why here"
/// sentence.
///
/// The model is asked to close with a single motivation sentence, so the
/// last `". "`-delimited piece is taken as `why_here` and the rest rejoined
/// as the description. Text with no `". "` separator at all becomes the
/// whole description, with a synthesized motivation naming the location.
pub fn split_scene_text(text: &str, location_name: &str) -> (String, String) {
    let trimmed = text.trim();
    let sentences: Vec<&str> = trimmed.split(". ").collect();
    if sentences.len() >= 2 {
        let description = format!("{}.", sentences[..sentences.len() - 1].join(". "));
        let mut why_here = sentences[sentences.len() - 1].trim().to_string();
        if !why_here.ends_with('.') {
            why_here.push('.');
        }
        (description, why_here)
    } else {
        (
            trimmed.to_string(),
            format!("You arrive in {location_name}, ready for whatever awaits."),
        )
    }
}
