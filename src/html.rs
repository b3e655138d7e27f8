//! HTML fragments for forms

/// Hidden input carrying the HTTP method a form stands in for
///
/// Browsers only submit GET and POST, so forms for other verbs post this
/// field along with the request. The method name is uppercased and not
/// otherwise checked.
pub fn method(name: &str) -> String {
    format!(
        r#"<input type="hidden" name="_method" value="{}">"#,
        name.to_ascii_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_uppercases() {
        assert_eq!(
            method("patch"),
            r#"<input type="hidden" name="_method" value="PATCH">"#
        );
        assert_eq!(
            method("Delete"),
            r#"<input type="hidden" name="_method" value="DELETE">"#
        );
    }

    #[test]
    fn test_method_is_not_validated() {
        assert_eq!(method(""), r#"<input type="hidden" name="_method" value="">"#);
        assert!(method("purge-all").contains(r#"value="PURGE-ALL""#));
    }
}
