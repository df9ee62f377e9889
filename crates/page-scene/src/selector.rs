//! CSS selector subset understood by the in-memory document.
//!
//! Supported: type (`li`), universal (`*`), class (`.btn`), id (`#list`),
//! compounds of those (`a.btn.btn-primary`), the descendant and child (`>`)
//! combinators, and comma-separated groups.

use crate::error::DomError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorCombinator {
    Descendant,
    Child,
}

/// One compound selector, e.g. `li.list-group-item`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SelectorStep {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl SelectorStep {
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(expected) = &self.id {
            if id != Some(expected.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| classes.contains(class))
    }
}

/// A step plus the combinator linking it to the step on its left.
/// The first step of a chain has no combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorPart {
    pub step: SelectorStep,
    pub combinator: Option<SelectorCombinator>,
}

pub(crate) type SelectorChain = Vec<SelectorPart>;

pub(crate) fn parse_selector_groups(selector: &str) -> Result<Vec<SelectorChain>, DomError> {
    let invalid = || DomError::InvalidSelector(selector.to_owned());
    selector
        .split(',')
        .map(|group| parse_chain(group).ok_or_else(invalid))
        .collect()
}

fn parse_chain(group: &str) -> Option<SelectorChain> {
    let spaced = group.replace('>', " > ");
    let mut parts: SelectorChain = Vec::new();
    let mut pending: Option<SelectorCombinator> = None;
    for token in spaced.split_whitespace() {
        if token == ">" {
            // `>` needs a step on its left and cannot follow another `>`
            if parts.is_empty() || pending.is_some() {
                return None;
            }
            pending = Some(SelectorCombinator::Child);
            continue;
        }
        let step = parse_step(token)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending.take().unwrap_or(SelectorCombinator::Descendant))
        };
        parts.push(SelectorPart { step, combinator });
    }
    if parts.is_empty() || pending.is_some() {
        return None;
    }
    Some(parts)
}

fn parse_step(token: &str) -> Option<SelectorStep> {
    let mut step = SelectorStep::default();
    let head_end = token.find(['.', '#']).unwrap_or(token.len());
    let (head, mut rest) = token.split_at(head_end);
    match head {
        "" | "*" => {}
        name if is_identifier(name) => step.tag = Some(name.to_owned()),
        _ => return None,
    }
    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['.', '#']).unwrap_or(body.len());
        let name = &body[..end];
        if !is_identifier(name) {
            return None;
        }
        match marker {
            '.' => step.classes.push(name.to_owned()),
            '#' if step.id.is_none() => step.id = Some(name.to_owned()),
            _ => return None,
        }
        rest = &body[end..];
    }
    Some(step)
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
