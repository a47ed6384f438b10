//! Shared formatting helpers for the table views.
//!
//! All pure formatting functions (no markup structure, no layout) live here.
//! Backend strings enter templates as [`Escaped`], which runs them through
//! [`escape_html`].

use maud::Render;

/// Escape the five HTML-significant characters.
///
/// Not idempotent: escaping `&amp;` again yields `&amp;amp;`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Backend-supplied text for `html!` templates, escaped with [`escape_html`].
///
/// Unlike maud's default string rendering this also escapes `'`.
pub struct Escaped<'a>(pub &'a str);

impl Render for Escaped<'_> {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&escape_html(self.0));
    }
}

/// Format byte count as human-readable size with binary units.
///
/// `"512 B"`, `"50.0 KiB"`, `"100.3 MiB"`, `"1.5 GiB"`.
/// Negative counts are clamped to zero.
pub fn format_bytes(bytes: i64) -> String {
    let bytes = bytes.max(0) as u64;
    let f = bytes as f64;
    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.1} GiB", f / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", f / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", f / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Format an integer with `,` thousands separators: `1234567` -> `"1,234,567"`.
pub fn format_count(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if v < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
