//! Parsing of drag-and-drop payloads.
//!
//! Drop events deliver every dropped path in one string, laid out as a Tcl
//! list: elements are separated by whitespace, an element containing spaces
//! is wrapped in braces (`{/my docs/a.pdf}`) or double quotes, and a
//! backslash escapes the following character in bare and quoted elements.

use std::path::PathBuf;

/// Split a drop payload into individual paths.
///
/// An unterminated brace or quote group runs to the end of the payload.
pub fn split_drop_list(data: &str) -> Vec<PathBuf> {
    let mut items = Vec::new();
    let mut chars = data.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let Some(first) = chars.next() else { break };
        let mut item = String::new();

        match first {
            '{' => {
                let mut depth = 1;
                for c in chars.by_ref() {
                    match c {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    item.push(c);
                }
            }
            '"' => {
                while let Some(c) = chars.next() {
                    match c {
                        '"' => break,
                        '\\' => item.extend(chars.next()),
                        _ => item.push(c),
                    }
                }
            }
            _ => {
                let mut next = Some(first);
                while let Some(c) = next {
                    if c.is_whitespace() {
                        break;
                    }
                    if c == '\\' {
                        item.extend(chars.next());
                    } else {
                        item.push(c);
                    }
                    next = chars.next();
                }
            }
        }

        if !item.is_empty() {
            items.push(PathBuf::from(item));
        }
    }

    items
}
