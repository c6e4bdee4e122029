/// Accepts digits with at most one decimal point, anywhere in the text.
/// The empty string is accepted and means "not yet provided".
pub fn is_numeric_text(text: &str) -> bool {
    let mut seen_point = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_point => {
            seen_point = true;
            true
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_text() {
        let test_data = ["", "70", "70.5", "0", ".5", "5.", ".", "007"];

        for (i, text) in test_data.into_iter().enumerate() {
            assert!(is_numeric_text(text), "Test case #{}", i);
        }
    }

    #[test]
    fn rejects_non_numeric_text() {
        let test_data = ["12.3.4", "abc", "7o", "-5", "+5", "1e3", "5 ", " 5", "1,5", "..", "٣"];

        for (i, text) in test_data.into_iter().enumerate() {
            assert!(!is_numeric_text(text), "Test case #{}", i);
        }
    }
}
