//! Code fence wrapping with a best-effort language guess.

/// Ordered substring/shape checks; first match wins. Best effort only, this
/// is not a language detector.
pub fn detect_language(text: &str) -> Option<&'static str> {
    if text.contains("#!/usr/bin/env python") || (text.contains("def ") && text.contains(":\n")) {
        return Some("python");
    }
    if text.contains("import ") && text.contains(" from ") {
        return Some("python");
    }
    if text.contains("console.log") || text.contains("function ") || text.contains("=>") {
        return Some("javascript");
    }
    if text.contains("#include") || text.contains("int main") {
        return Some("c");
    }
    if text.contains("public static void main") {
        return Some("java");
    }
    if text.contains("struct ") && text.contains('{') {
        return Some("swift");
    }
    None
}

/// Wrap text in triple-backtick fences, tagging the opening fence when the
/// language guess succeeds. Tabs become two spaces and the body ends in
/// exactly one newline before the closing fence.
pub fn fence(text: &str) -> String {
    let language = detect_language(text);
    let mut body = text.replace('\t', "  ");
    while body.ends_with('\n') {
        body.pop();
    }
    body.push('\n');
    match language {
        Some(tag) => format!("```{tag}\n{body}```"),
        None => format!("```\n{body}```"),
    }
}
