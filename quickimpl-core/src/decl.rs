//! Lightweight lookup of Go type declarations.
//!
//! This is not an indexer: it only finds `type <Name> struct|interface`
//! declarations and the line their body closes on, which is what the
//! insertion step needs from a document symbol provider.

use crate::types::{Range, Symbol, SymbolKind};

/// Find struct and interface declarations in Go source.
pub fn find_type_decls(src: &str) -> Vec<Symbol> {
    let lines: Vec<&str> = src.lines().collect();
    let package = package_name(src);
    let mut symbols = Vec::new();
    // nesting inside a `type (` group, `None` outside one
    let mut group_depth: Option<isize> = None;
    let mut in_raw = false;

    for (idx, line) in lines.iter().enumerate() {
        let raw_at_start = in_raw;
        let change = nesting_change(line, &mut in_raw);
        if raw_at_start {
            if let Some(depth) = group_depth.as_mut() {
                *depth += change;
            }
            continue;
        }

        let code = strip_line_comment(line).trim();
        let decl = match group_depth {
            Some(depth) => {
                let depth_after = depth + change;
                group_depth = (depth_after >= 0).then_some(depth_after);
                // only group members sit at depth 0, nested fields don't
                if depth != 0 || code.starts_with(')') {
                    continue;
                }
                parse_decl(code.split_whitespace())
            }
            None if code.starts_with("type (") => {
                let depth = change - 1;
                group_depth = (depth >= 0).then_some(depth);
                continue;
            }
            None => {
                let mut tokens = code.split_whitespace();
                if tokens.next() != Some("type") {
                    continue;
                }
                parse_decl(tokens)
            }
        };
        let Some((name, kind)) = decl else {
            continue;
        };

        let end = closing_line(&lines, idx);
        let mut symbol = Symbol::new(name, kind, Range::lines(idx, end));
        if let Some(package) = &package {
            symbol = symbol.in_container(package.clone());
        }
        symbols.push(symbol);
    }

    symbols
}

/// Name and kind from `Name struct {` or `Name[T any] interface {`.
fn parse_decl<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<(&'a str, SymbolKind)> {
    let name = tokens.next()?;

    // skip a type parameter list: `Set[T comparable]`
    if name.contains('[') && !name.contains(']') {
        for token in tokens.by_ref() {
            if token.contains(']') {
                break;
            }
        }
    }
    let kind_token = tokens.next()?;

    let kind = if kind_token.starts_with("struct") {
        SymbolKind::Struct
    } else if kind_token.starts_with("interface") {
        SymbolKind::Interface
    } else {
        return None;
    };

    // generic declarations: `type Set[T comparable] struct {`
    let name = name.split('[').next().unwrap_or(name);
    Some((name, kind))
}

/// Name from the `package` clause, if any.
pub fn package_name(src: &str) -> Option<String> {
    src.lines().find_map(|line| {
        let mut tokens = strip_line_comment(line).split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some("package"), Some(name)) => Some(name.to_string()),
            _ => None,
        }
    })
}

/// Line on which the brace opened at or after `start` closes.
fn closing_line(lines: &[&str], start: usize) -> usize {
    let mut depth = 0usize;
    let mut opened = false;
    let mut in_raw = false;

    for (idx, line) in lines.iter().enumerate().skip(start) {
        let mut closed = false;
        code_chars(line, &mut in_raw, |c| match c {
            '{' if !closed => {
                depth += 1;
                opened = true;
            }
            '}' if !closed => {
                depth = depth.saturating_sub(1);
                closed = opened && depth == 0;
            }
            _ => {}
        });
        if closed {
            return idx;
        }

        if !opened && !in_raw {
            // declaration without a body on its first line
            return start;
        }
    }

    lines.len().saturating_sub(1).max(start)
}

/// Opened minus closed braces and parentheses on `line`.
fn nesting_change(line: &str, in_raw: &mut bool) -> isize {
    let mut change = 0;
    code_chars(line, in_raw, |c| match c {
        '{' | '(' => change += 1,
        '}' | ')' => change -= 1,
        _ => {}
    });
    change
}

/// Calls `f` with each character of `line` outside literals and comments.
///
/// `in_raw` carries a raw string literal that spans lines.
fn code_chars(line: &str, in_raw: &mut bool, mut f: impl FnMut(char)) {
    let mut chars = line.chars().peekable();
    let mut quote = None;

    while let Some(c) = chars.next() {
        if *in_raw {
            *in_raw = c != '`';
            continue;
        }
        if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '`' => *in_raw = true,
            '"' | '\'' => quote = Some(c),
            '/' if chars.peek() == Some(&'/') => break,
            _ => f(c),
        }
    }
}

fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"package shapes

import "io"

// Square is a shape.
type Square struct {
	Side  float64 `json:"side"`
	Label string  // not a } brace
}

type Shape interface {
	Area() float64
}

type Empty struct{}

type (
	Circle struct {
		Radius float64
	}
	Named interface{ Name() string }
)

type Set[T comparable] struct {
	items map[T]struct{}
}

var _ io.Reader
"#;

    fn find(name: &str) -> Symbol {
        find_type_decls(SOURCE)
            .into_iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("{} not found", name))
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name(SOURCE).as_deref(), Some("shapes"));
        assert_eq!(package_name("func main() {}"), None);
    }

    #[test]
    fn test_struct_range_spans_body() {
        let square = find("Square");
        assert_eq!(square.kind, SymbolKind::Struct);
        assert_eq!(square.range.start.line, 5);
        assert_eq!(square.range.end.line, 8);
        assert_eq!(square.container_name.as_deref(), Some("shapes"));
    }

    #[test]
    fn test_interface_detected() {
        let shape = find("Shape");
        assert_eq!(shape.kind, SymbolKind::Interface);
        assert_eq!(shape.range.end.line, 12);
    }

    #[test]
    fn test_single_line_struct() {
        let empty = find("Empty");
        assert_eq!(empty.range.start.line, 14);
        assert_eq!(empty.range.end.line, 14);
    }

    #[test]
    fn test_grouped_declarations() {
        let circle = find("Circle");
        assert_eq!(circle.kind, SymbolKind::Struct);
        assert_eq!(circle.range.start.line, 17);
        assert_eq!(circle.range.end.line, 19);

        let named = find("Named");
        assert_eq!(named.kind, SymbolKind::Interface);
        assert_eq!(named.range.end.line, 20);
    }

    #[test]
    fn test_generic_struct_name() {
        let set = find("Set");
        assert_eq!(set.range.start.line, 23);
        assert_eq!(set.range.end.line, 25);
    }

    #[test]
    fn test_group_continues_after_multiline_signature() {
        let src = r#"type (
	Reader interface {
		Read(
			p []byte,
		) (int, error)
	}
	Foo struct{}
)
"#;
        let decls = find_type_decls(src);
        let names: Vec<&str> = decls.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Reader", "Foo"]);
        assert_eq!(decls[0].range.end.line, 5);
        assert_eq!(decls[1].range.start.line, 6);
    }

    #[test]
    fn test_nested_struct_field_in_group_is_not_a_decl() {
        let src = r#"type (
	Config struct {
		Server struct {
			Port int
		}
	}
)

type Server struct{}
"#;
        let decls = find_type_decls(src);
        let servers: Vec<&Symbol> = decls.iter().filter(|s| s.name == "Server").collect();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].name, "Config");
        assert_eq!(decls[0].range.end.line, 5);
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].range.start.line, 8);
    }

    #[test]
    fn test_delimiters_in_tags_keep_group_depth() {
        let src = r#"type (
	Brace struct {
		Open string `json:"({"`
	}
	Other struct{}
)
"#;
        let decls = find_type_decls(src);
        let names: Vec<&str> = decls.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Brace", "Other"]);
        assert_eq!(decls[0].range.end.line, 3);
    }

    #[test]
    fn test_ignores_non_type_lines() {
        let names: Vec<String> = find_type_decls(SOURCE)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec!["Square", "Shape", "Empty", "Circle", "Named", "Set"]
        );
    }
}
