// src/extract/date.rs

use crate::core::sanitize::to_lower;

pub const DATE_NOT_FOUND: &str = "Date not found";

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Content of the first `( ... )` span if it names a month,
/// else [`DATE_NOT_FOUND`].
pub fn extract_date_token(text: &str) -> String {
    let (Some(open), Some(close)) = (text.find('('), text.find(')')) else {
        return s!(DATE_NOT_FOUND);
    };
    if close <= open {
        return s!(DATE_NOT_FOUND);
    }
    let inner = text[open + 1..close].trim();
    let lc = to_lower(inner);
    if MONTHS.iter().any(|m| lc.contains(m)) {
        s!(inner)
    } else {
        s!(DATE_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_in_parens() {
        assert_eq!(extract_date_token("Version 5.1 (August 26, 2013)"), "August 26, 2013");
        assert_eq!(extract_date_token("v4.97 ( march 13, 2013 ) notes"), "march 13, 2013");
    }

    #[test]
    fn sentinel_otherwise() {
        assert_eq!(extract_date_token("Version 5.1"), DATE_NOT_FOUND);
        assert_eq!(extract_date_token("Version 5.1 (beta)"), DATE_NOT_FOUND);
        assert_eq!(extract_date_token("odd ) order (May 2"), DATE_NOT_FOUND);
        assert_eq!(extract_date_token(""), DATE_NOT_FOUND);
    }
}
