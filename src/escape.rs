//! Escaping for values interpolated into generated artifacts.
//!
//! Operator answers are free text; every serializer routes them through one
//! of these helpers so a quote or newline cannot change the structure of the
//! seed file or the build script.

/// Render a seed (DCF) field value. Embedded line breaks become continuation
/// lines indented by one space; blank continuation lines are written as ` .`.
pub fn dcf_value(value: &str) -> String {
    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = normalized.trim().split('\n');
    let mut out = lines.next().unwrap_or_default().trim_end().to_string();
    for line in lines {
        let line = line.trim_end();
        out.push_str("\n ");
        if line.trim().is_empty() {
            out.push('.');
        } else {
            out.push_str(line);
        }
    }
    out
}

/// Render a single-quoted R string literal.
pub fn r_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_ascii_control() => out.push_str(&format!("\\x{:02x}", ch as u32)),
            ch => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Render a shell command line with each argument quoted as needed.
pub fn shell_command(args: &[&str]) -> String {
    shell_words::join(args)
}
