//! Integration tests for the public highlighting API.
//!
//! These tests go through `highlight` / `highlight_lines` exactly as a
//! renderer would: a code sample and a free-form language tag in, a token
//! stream out.

use highlight::{highlight, highlight_lines, Token, TokenKind, TokenStream};

fn pairs(stream: &TokenStream) -> Vec<(TokenKind, &str)> {
    stream
        .iter()
        .map(|token| (token.kind, token.value.as_str()))
        .collect()
}

#[test]
fn test_unknown_language_falls_back_to_text() {
    let tokens = highlight("let x = 1;", "rust");
    assert_eq!(pairs(&tokens), vec![(TokenKind::Text, "let x = 1;")]);

    for language in ["bash", "css", "json", ""] {
        let tokens = highlight("{\"a\": 1}", language);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.tokens()[0].kind, TokenKind::Text);
    }
}

#[test]
fn test_keyword_detection() {
    let tokens = highlight("return", "js");
    assert_eq!(pairs(&tokens), vec![(TokenKind::Keyword, "return")]);
}

#[test]
fn test_function_call_detection() {
    let tokens = highlight("foo(", "js");
    assert_eq!(
        pairs(&tokens),
        vec![(TokenKind::Function, "foo"), (TokenKind::Punctuation, "(")]
    );
}

#[test]
fn test_line_comment_boundary() {
    let tokens = highlight("// hi\nx", "js");
    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Comment, "// hi"),
            (TokenKind::Text, "\n"),
            (TokenKind::Text, "x"),
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let tokens = highlight("\"abc", "js");
    assert_eq!(pairs(&tokens), vec![(TokenKind::String, "\"abc")]);
}

#[test]
fn test_html_tag_as_single_token() {
    let tokens = highlight(r#"<div class="x">"#, "html");
    assert_eq!(pairs(&tokens), vec![(TokenKind::Tag, r#"<div class="x">"#)]);
}

#[test]
fn test_language_case_insensitive() {
    let source = "def main():\n    print('hi')  # greet\n";
    assert_eq!(highlight(source, "PYTHON"), highlight(source, "python"));
    assert_eq!(highlight(source, "Py"), highlight(source, "python"));
}

#[test]
fn test_js_family_aliases_share_scanner() {
    let source = "export const f = async (a: number) => a ** 2; // sq";
    let expected = highlight(source, "javascript");

    for alias in ["js", "typescript", "ts", "jsx", "tsx", "TSX"] {
        assert_eq!(highlight(source, alias), expected);
    }
}

#[test]
fn test_empty_input() {
    for language in ["js", "py", "html"] {
        let tokens = highlight("", language);
        assert!(tokens.is_empty());
        assert_eq!(tokens.to_source(), "");
    }
}

#[test]
fn test_unknown_language_empty_input_is_one_text_token() {
    let tokens = highlight("", "rust");
    assert_eq!(pairs(&tokens), vec![(TokenKind::Text, "")]);
}

#[test]
fn test_realistic_component_sample() {
    let source = r#"import { Button } from "@/components/ui/button";

export function Demo() {
  return <Button variant="glass">Click</Button>;
}
"#;
    let tokens = highlight(source, "tsx");

    assert_eq!(tokens.to_source(), source);
    assert_eq!(tokens.tokens()[0].kind, TokenKind::Keyword);
    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenKind::String && token.value == "\"@/components/ui/button\""));
    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenKind::Function && token.value == "Demo"));
}

#[test]
fn test_no_empty_tokens() {
    let source = "a''b\"\"c``/**/d//\n";
    let tokens = highlight(source, "js");

    assert!(tokens.iter().all(|token| !token.value.is_empty()));
    assert_eq!(tokens.to_source(), source);
}

#[test]
fn test_highlight_lines() {
    let source = "x = 1\n\n# done";
    let lines = highlight_lines(source, "py");

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines.iter().map(TokenStream::to_source).collect::<Vec<_>>(),
        vec!["x = 1", "", "# done"]
    );
    assert!(lines[1].is_empty());
    assert_eq!(pairs(&lines[2]), vec![(TokenKind::Comment, "# done")]);
}

#[test]
fn test_json_shape() {
    let tokens = highlight("foo(1)", "js");
    let json = serde_json::to_value(&tokens).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {"type": "function", "value": "foo"},
            {"type": "punctuation", "value": "("},
            {"type": "number", "value": "1"},
            {"type": "punctuation", "value": ")"},
        ])
    );
}

#[test]
fn test_json_deserializes_tokens() {
    let tokens: Vec<Token> =
        serde_json::from_str(r#"[{"type": "builtin", "value": "len"}]"#).unwrap();

    assert_eq!(
        tokens,
        vec![Token {
            kind: TokenKind::Builtin,
            value: "len".to_string()
        }]
    );
}

#[test]
fn test_highlight_is_thread_safe() {
    let source = "while (true) { tick(); }";
    let expected = highlight(source, "js");

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || highlight(source, "js")))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
