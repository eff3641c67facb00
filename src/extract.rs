use log::trace;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// Non-greedy: the capture ends at the first `)`, so `Println("a)b")`
// captures `"a`. `.` does not cross a newline.
static RE_PRINTLN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Println\((.*?)\)").unwrap());

/// Scans text for `<call>(...)` occurrences and keeps the double-quoted ones.
pub struct Extractor {
    re: Cow<'static, Regex>,
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor {
            re: Cow::Borrowed(&*RE_PRINTLN),
        }
    }
}

impl Extractor {
    pub fn new(call: &str) -> Self {
        if call == "Println" {
            return Extractor::default();
        }
        let pattern = format!(r"{}\((.*?)\)", regex::escape(call));
        Extractor {
            re: Cow::Owned(Regex::new(&pattern).unwrap()),
        }
    }

    /// Raw text between each call's `(` and the first following `)`.
    pub fn captures<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.re
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        self.captures(text)
            .into_iter()
            .filter_map(|raw| {
                let lit = literal(raw);
                if lit.is_none() {
                    trace!("dropping non-literal argument {:?}", raw);
                }
                lit
            })
            .map(str::to_string)
            .collect()
    }
}

// White_Space plus the ASCII information separators 0x1C..=0x1F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Inner text of a trimmed capture that starts and ends with `"`.
///
/// Exactly one quote is removed from each end and nothing is unescaped.
/// A lone `"` counts as both ends and yields the empty string.
pub fn literal(raw: &str) -> Option<&str> {
    let s = raw.trim_matches(is_space);
    if !(s.starts_with('"') && s.ends_with('"')) {
        return None;
    }
    if s.len() == 1 {
        return Some("");
    }
    Some(&s[1..s.len() - 1])
}

pub fn extract_directives(text: &str) -> Vec<String> {
    Extractor::default().extract(text)
}
