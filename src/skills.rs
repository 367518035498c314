/// Link to the details page for a skill card.
///
/// The identifier is passed through as written, without escaping.
pub fn skill_details_url(details_page: &str, skill: &str) -> String {
    format!("{details_page}?skill={skill}")
}
