use itertools::Itertools;

/// Canonicalizes a function signature so that spelling differences in
/// whitespace and const-reference arguments do not change the lookup key.
///
/// ```
/// use type_system::normalize_signature;
///
/// assert_eq!(
///     normalize_signature("setText ( const QString & , int ) const"),
///     "setText(QString,int)const"
/// );
/// assert_eq!(normalize_signature("draw(const char *)"), "draw(const char*)");
/// ```
pub fn normalize_signature(signature: &str) -> String {
    let compact = compact_whitespace(signature);

    let (Some(open), Some(close)) = (compact.find('('), compact.rfind(')')) else {
        return compact;
    };

    if close < open {
        return compact;
    }

    let name = &compact[..open];
    let arguments = split_top_level(&compact[open + 1..close])
        .into_iter()
        .map(strip_const_reference)
        .join(",");
    let suffix = &compact[close + 1..];

    format!("{name}({arguments}){suffix}")
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn compact_whitespace(signature: &str) -> String {
    let mut compact = String::with_capacity(signature.len());
    let mut saw_space = false;

    for c in signature.chars() {
        if c.is_whitespace() {
            saw_space = true;
            continue;
        }

        // Only two adjacent words need a separator, e.g. `unsigned int`
        if saw_space && is_word(c) && compact.chars().next_back().is_some_and(is_word) {
            compact.push(' ');
        }

        compact.push(c);
        saw_space = false;
    }

    compact
}

fn split_top_level(arguments: &str) -> Vec<&str> {
    if arguments.is_empty() {
        return vec![];
    }

    let mut parts = vec![];
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in arguments.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&arguments[start..i]);
                start = i + 1;
            }
            _ => (),
        }
    }

    parts.push(&arguments[start..]);
    parts
}

fn strip_const_reference(argument: &str) -> &str {
    argument
        .strip_prefix("const ")
        .and_then(|rest| rest.strip_suffix('&'))
        .filter(|inner| !inner.contains('*') && !inner.ends_with('&'))
        .unwrap_or(argument)
}
