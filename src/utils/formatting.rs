//! Formatting utilities used for CLI outputs and generated identifiers.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI escape sequences (for width math and log storage).
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Lowercase kebab slug for generated ids ("Amy Perlman" → "amy-perlman").
/// Non-alphanumeric runs collapse into a single dash.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_dash = true;

    for c in s.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Slug made unique against the already-taken set by a numeric suffix.
pub fn unique_slug(base: &str, taken: &[String]) -> String {
    let slug = slugify(base);
    if !taken.iter().any(|t| t == &slug) {
        return slug;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", slug, n);
        if !taken.iter().any(|t| t == &candidate) {
            return candidate;
        }
        n += 1;
    }
}
