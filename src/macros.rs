// src/macros.rs
//! String shorthands used across the crate.
//!
//! `s!` turns anything `String: From` accepts into an owned `String`;
//! `join!` concatenates string slices into a fresh `String`, e.g. a vendor's
//! token prefix and the extracted token (`join!("v", "5.1")` → `"v5.1"`) or a
//! file stem and its extension.

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate two or more `&str`-like pieces, left to right.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn s_builds_owned_strings() {
        assert_eq!(s!(), "");
        assert_eq!(s!("dbf2002"), "dbf2002");
        let id: &str = "java";
        assert_eq!(s!(id), String::from("java"));
    }

    #[test]
    fn join_concatenates_in_order() {
        let token = String::from("4.97");
        assert_eq!(join!("v", &token), "v4.97");
        assert_eq!(join!("", "8.0"), "8.0");
        assert_eq!(join!("java_versions", ".", "csv",), "java_versions.csv");
    }
}
