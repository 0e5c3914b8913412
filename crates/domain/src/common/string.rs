//! String conversion utilities.

/// Extension trait turning blank strings into `None`.
///
/// Optional query parameters are treated as "not supplied" when blank.
///
/// ```
/// use myfun_domain::common::StringExt;
///
/// assert_eq!("Work".to_string().into_option(), Some("Work".to_string()));
/// assert_eq!(String::new().into_option(), None);
/// ```
pub trait StringExt {
    /// Converts this string to `None` if blank, otherwise `Some(self)`.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        if self.trim().is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl StringExt for Option<String> {
    fn into_option(self) -> Option<String> {
        self.and_then(StringExt::into_option)
    }
}
