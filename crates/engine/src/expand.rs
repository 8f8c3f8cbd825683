//! Line-oriented placeholder substitution.

use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

use crate::error::GenerateError;
use crate::fragment::{Fragment, INDENT_UNIT};
use crate::keywords::{KeywordMap, Replacement};

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid placeholder regex")
    })
}

enum LineOutcome {
    Unchanged,
    Omitted,
    Replaced(Vec<String>),
}

/// Expands `template` with the values in `keywords`.
///
/// Indentation markers in the template are applied first. Lines holding a
/// token mapped to [`Replacement::Omit`] are dropped. Values that contain
/// further tokens are expanded again, at most `max_depth` levels deep.
/// Trailing whitespace is trimmed and the result always ends with a newline.
pub fn expand(
    template: &str,
    keywords: &KeywordMap,
    max_depth: usize,
) -> Result<String, GenerateError> {
    let lines = Fragment::parse(template).render(INDENT_UNIT);
    let expanded = expand_lines(lines, keywords, 0, max_depth)?;

    for line in &expanded {
        if let Some(caps) = placeholder_re().captures(line) {
            return Err(GenerateError::UnresolvedPlaceholder {
                token: caps[1].to_string(),
            });
        }
    }

    let mut out = String::new();
    for line in expanded {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

fn expand_lines(
    lines: Vec<String>,
    keywords: &KeywordMap,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<String>, GenerateError> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        match substitute(&line, keywords) {
            LineOutcome::Unchanged => out.push(line),
            LineOutcome::Omitted => trace!(line = line.trim(), "Line omitted"),
            LineOutcome::Replaced(produced) => {
                if produced.iter().any(|l| has_known_token(l, keywords)) {
                    if depth >= max_depth {
                        return Err(GenerateError::Cycle { depth: max_depth });
                    }
                    out.extend(expand_lines(produced, keywords, depth + 1, max_depth)?);
                } else {
                    out.extend(produced);
                }
            }
        }
    }
    Ok(out)
}

fn has_known_token(line: &str, keywords: &KeywordMap) -> bool {
    placeholder_re()
        .captures_iter(line)
        .any(|c| keywords.lookup(&c[1]).is_some())
}

fn substitute(line: &str, keywords: &KeywordMap) -> LineOutcome {
    let mut found = Vec::new();
    for caps in placeholder_re().captures_iter(line) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        match keywords.lookup(name.as_str()) {
            Some(Replacement::Omit) => return LineOutcome::Omitted,
            Some(Replacement::Text(fragment)) => found.push((whole.start(), whole.end(), fragment)),
            None => {}
        }
    }
    if found.is_empty() {
        return LineOutcome::Unchanged;
    }

    let base = &line[..line.len() - line.trim_start().len()];
    let mut produced = vec![String::new()];
    let mut last = 0;
    for (start, end, fragment) in found {
        if let Some(current) = produced.last_mut() {
            current.push_str(&line[last..start]);
        }
        let mut rendered = fragment.render(INDENT_UNIT).into_iter();
        if let (Some(first), Some(current)) = (rendered.next(), produced.last_mut()) {
            current.push_str(&first);
        }
        for rest in rendered {
            if rest.is_empty() {
                produced.push(rest);
            } else {
                produced.push(format!("{base}{rest}"));
            }
        }
        last = end;
    }
    if let Some(current) = produced.last_mut() {
        current.push_str(&line[last..]);
    }
    LineOutcome::Replaced(produced)
}

/// Names of all `{{NAME}}` placeholders in `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    placeholder_re()
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}
