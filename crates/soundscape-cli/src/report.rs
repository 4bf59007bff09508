//! Shared console formatting for the report sections.

/// Prints a boxed section heading.
pub(crate) fn heading(title: &str) {
    let width = title.len().max(60);
    println!("{}", "=".repeat(width));
    println!("{title}");
    println!("{}", "=".repeat(width));
}

/// Prints a horizontal rule of the given width.
pub(crate) fn rule(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Formats an optional count-like value, "-" when missing.
pub(crate) fn fmt_opt_u32(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

/// Formats an optional mean-like value to two decimals, "-" when missing.
pub(crate) fn fmt_opt_mean(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}

/// The p-value marker used in compact listings: `*` significant, `ns` not.
pub(crate) fn significance_marker(significant: bool) -> &'static str {
    if significant { "*" } else { "ns" }
}
