//! Tokenizing of the CSS functional color notations, `rgb(...)` and
//! `hsl(...)` with their legacy `rgba`/`hsla` aliases.

use crate::Component;

/// Split `name(a, b, c[, d])` or `name(a b c[ / d])` into its arguments.
/// Returns `None` if the function name is not one of `names`, the
/// parentheses are unbalanced or the argument count is not 3 or 4.
/// Surrounding whitespace is not skipped.
pub(crate) fn function_args<'a>(value: &'a str, names: &[&str]) -> Option<Vec<&'a str>> {
    let open = value.find('(')?;

    let name = value[..open].trim_end();
    if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        return None;
    }

    let inner = value[open + 1..].strip_suffix(')')?;
    if inner.contains(['(', ')']) {
        return None;
    }

    let args: Vec<&str> = if inner.contains(',') {
        inner.split(',').map(str::trim).collect()
    } else {
        space_args(inner)?
    };

    matches!(args.len(), 3 | 4).then_some(args)
}

/// Whitespace separated channels, with alpha either as a 4th token or
/// after a single `/`.
fn space_args(inner: &str) -> Option<Vec<&str>> {
    let (channels, alpha) = match inner.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha)),
        None => (inner, None),
    };

    let mut args: Vec<&str> = channels.split_whitespace().collect();
    if let Some(alpha) = alpha {
        if args.len() != 3 {
            return None;
        }
        // Exactly one token after the slash, and no second slash.
        match alpha.split_whitespace().collect::<Vec<_>>()[..] {
            [token] if !token.contains('/') => args.push(token),
            _ => return None,
        }
    }

    Some(args)
}

/// A plain number.
pub(crate) fn number(token: &str) -> Option<Component> {
    token.parse().ok()
}

/// A number with an optional `%` suffix, which is dropped.
pub(crate) fn percentage(token: &str) -> Option<Component> {
    number(token.strip_suffix('%').unwrap_or(token))
}

/// Alpha as a decimal (`0.5`) or as a percentage (`50%`).
pub(crate) fn alpha(token: &str) -> Option<Component> {
    match token.strip_suffix('%') {
        Some(percent) => number(percent).map(|p| p / 100.0),
        None => number(token),
    }
}
