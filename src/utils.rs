/// True when `s` is empty or whitespace only.
pub fn is_empty_string(s: &str) -> bool {
    s.trim().is_empty()
}
