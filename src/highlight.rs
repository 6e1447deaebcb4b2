//! Tcl syntax highlighter.
//!
//! A single left-to-right pass over the source producing [`Token`]s, each a
//! slice of the input with an optional [`TokenClass`]. Rendering wraps
//! classified tokens in styled spans; concatenating the token texts always
//! reproduces the input exactly, so highlighting can never corrupt a script.
//!
//! Classification rules, in the order they are tried at each position:
//! - `# ...` to end of line - comment
//! - `"..."` or `'...'` on one line, non-greedy, no escapes - string
//! - `$name` (`$` then an identifier) - variable
//! - reserved words (`set`, `proc`, `if`, ...) - keyword
//! - simulator builtins (`new`, `Simulator`, `duplex-link`, ...) - function
//! - integer or decimal literals - number
//!
//! Keyword and builtin matches require word boundaries on both sides, so
//! `settle` classifies as nothing. Numbers require only a leading boundary:
//! `2Mb` highlights the `2`, while the digit in `node5` stays plain.
//! Unmatched text is emitted as unclassified tokens. Malformed input (say,
//! an unterminated quote) is not an error; the text simply stays
//! unclassified.

/// Reserved Tcl words.
const KEYWORDS: &[&str] = &[
    "set", "proc", "global", "if", "else", "for", "foreach", "while", "return", "break",
    "continue", "switch",
];

/// NS2 simulation builtins treated as function names.
const BUILTINS: &[&str] = &[
    "new",
    "Simulator",
    "node",
    "duplex-link",
    "attach-agent",
    "connect",
    "trace-all",
    "namtrace-all",
];

/// Display class of a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Keyword,
    Function,
    String,
    Variable,
    Comment,
    Number,
}

impl TokenClass {
    /// Stylesheet class name for this token class.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenClass::Keyword => "tcl-keyword",
            TokenClass::Function => "tcl-function",
            TokenClass::String => "tcl-string",
            TokenClass::Variable => "tcl-variable",
            TokenClass::Comment => "tcl-comment",
            TokenClass::Number => "tcl-number",
        }
    }
}

/// One slice of the source, classified or plain.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// `None` for unclassified text (whitespace, brackets, bare words).
    pub class: Option<TokenClass>,
}

/// Tokenize Tcl source for display.
///
/// The concatenation of the returned token texts equals `source` for every
/// input, including the empty string.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < source.len() {
        let rest = &source[i..];
        let Some(c) = rest.chars().next() else { break };

        let matched = match c {
            '#' => Some((comment_len(rest), TokenClass::Comment)),
            '"' | '\'' => string_len(rest, c).map(|len| (len, TokenClass::String)),
            '$' => variable_len(rest).map(|len| (len, TokenClass::Variable)),
            _ if c.is_ascii_digit() && boundary_before(source, i) => {
                Some((number_len(rest), TokenClass::Number))
            }
            _ if is_word_start(c) && boundary_before(source, i) => word_class(rest),
            _ => None,
        };

        match matched {
            Some((len, class)) => {
                if plain_start < i {
                    tokens.push(Token {
                        text: &source[plain_start..i],
                        class: None,
                    });
                }
                tokens.push(Token {
                    text: &source[i..i + len],
                    class: Some(class),
                });
                i += len;
                plain_start = i;
            }
            None => {
                // Swallow the whole word run so rules never fire mid-word.
                i += if is_word_char(c) {
                    word_run_len(rest)
                } else {
                    c.len_utf8()
                };
            }
        }
    }

    if plain_start < source.len() {
        tokens.push(Token {
            text: &source[plain_start..],
            class: None,
        });
    }

    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// True when position `i` does not sit directly after a word character.
fn boundary_before(source: &str, i: usize) -> bool {
    match source[..i].chars().next_back() {
        Some(prev) => !is_word_char(prev),
        None => true,
    }
}

/// True when the text following a match of `len` bytes starts with a word
/// character (which would make the match an interior fragment).
fn word_continues(rest: &str, len: usize) -> bool {
    rest[len..].chars().next().is_some_and(is_word_char)
}

/// Byte length of the maximal word-character run at the start of `rest`.
fn word_run_len(rest: &str) -> usize {
    rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len())
}

/// Comment token length: from `#` to end of line, newline excluded.
fn comment_len(rest: &str) -> usize {
    rest.find('\n').unwrap_or(rest.len())
}

/// String token length for a quote at the start of `rest`, or `None` when
/// the quote is unterminated on its line (no escape handling).
fn string_len(rest: &str, quote: char) -> Option<usize> {
    let body = &rest[1..];
    let close = body.find(quote)?;
    if body[..close].contains('\n') {
        return None;
    }
    Some(close + 2)
}

/// Variable token length: `$` followed by an identifier.
fn variable_len(rest: &str) -> Option<usize> {
    let body = &rest[1..];
    let first = body.chars().next()?;
    if !is_word_start(first) {
        return None;
    }
    Some(1 + word_run_len(body))
}

/// Number token length: digits with an optional fractional part.
fn number_len(rest: &str) -> usize {
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let after = &rest[digits..];
    if let Some(frac) = after.strip_prefix('.') {
        let frac_digits = frac
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(frac.len());
        if frac_digits > 0 {
            return digits + 1 + frac_digits;
        }
    }
    digits
}

/// Keyword or builtin match at a word start, keywords first.
fn word_class(rest: &str) -> Option<(usize, TokenClass)> {
    for kw in KEYWORDS {
        if rest.starts_with(kw) && !word_continues(rest, kw.len()) {
            return Some((kw.len(), TokenClass::Keyword));
        }
    }
    for builtin in BUILTINS {
        if rest.starts_with(builtin) && !word_continues(rest, builtin.len()) {
            return Some((builtin.len(), TokenClass::Function));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(source: &str) -> String {
        tokenize(source).iter().map(|t| t.text).collect()
    }

    fn classes_of(source: &str) -> Vec<(String, Option<TokenClass>)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.text.to_string(), t.class))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let samples = [
            "",
            "plain words only",
            "set ns [new Simulator]",
            "$ns duplex-link $n0 $n1 2Mb 10ms DropTail",
            "# comment line\nset x 5\nputs \"done\"",
            "puts $winFile0 \"# time cwnd\"",
            "say \"unterminated",
            "weird $$$ ### \"\" '' 12.5.7",
            "unicode: caf\u{e9} \u{2192} ok",
        ];
        for s in samples {
            assert_eq!(joined(s), s, "round trip failed for {s:?}");
        }
    }

    #[test]
    fn test_keyword_classified() {
        let tokens = classes_of("set x 5");
        assert_eq!(tokens[0], ("set".to_string(), Some(TokenClass::Keyword)));
        assert_eq!(tokens[1], (" x ".to_string(), None));
        assert_eq!(tokens[2], ("5".to_string(), Some(TokenClass::Number)));
    }

    #[test]
    fn test_builtins_classified_as_function() {
        let tokens = classes_of("set ns [new Simulator]");
        assert!(tokens.contains(&("new".to_string(), Some(TokenClass::Function))));
        assert!(tokens.contains(&("Simulator".to_string(), Some(TokenClass::Function))));
    }

    #[test]
    fn test_hyphenated_builtin() {
        let tokens = classes_of("$ns duplex-link $n0 $n1");
        assert!(tokens.contains(&("duplex-link".to_string(), Some(TokenClass::Function))));
        assert!(tokens.contains(&("$ns".to_string(), Some(TokenClass::Variable))));
        assert!(tokens.contains(&("$n0".to_string(), Some(TokenClass::Variable))));
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let tokens = classes_of("# create nodes\nset n0");
        assert_eq!(
            tokens[0],
            ("# create nodes".to_string(), Some(TokenClass::Comment))
        );
        assert_eq!(tokens[1], ("\n".to_string(), None));
        assert_eq!(tokens[2], ("set".to_string(), Some(TokenClass::Keyword)));
    }

    #[test]
    fn test_quote_inside_comment_stays_comment() {
        let tokens = classes_of("# say \"hi\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].1, Some(TokenClass::Comment));
    }

    #[test]
    fn test_hash_inside_string_stays_string() {
        let tokens = classes_of("puts \"# time cwnd\"");
        assert!(
            tokens.contains(&("\"# time cwnd\"".to_string(), Some(TokenClass::String))),
            "got {tokens:?}"
        );
    }

    #[test]
    fn test_unterminated_string_is_plain() {
        let tokens = classes_of("say \"oops");
        assert!(tokens.iter().all(|(_, class)| class.is_none()));
    }

    #[test]
    fn test_string_does_not_span_lines() {
        let tokens = classes_of("\"a\nb\"");
        assert!(tokens.iter().all(|(_, class)| class.is_none()));
    }

    #[test]
    fn test_word_containing_keyword_is_plain() {
        let tokens = classes_of("settle offset");
        assert!(tokens.iter().all(|(_, class)| class.is_none()));
    }

    #[test]
    fn test_identifier_with_digits_is_plain() {
        let tokens = classes_of("node5");
        assert_eq!(tokens, vec![("node5".to_string(), None)]);
    }

    #[test]
    fn test_decimal_number() {
        let tokens = classes_of("set interval 0.005");
        assert!(tokens.contains(&("0.005".to_string(), Some(TokenClass::Number))));
    }

    #[test]
    fn test_trailing_dot_not_part_of_number() {
        let tokens = classes_of("run 10.");
        assert!(tokens.contains(&("10".to_string(), Some(TokenClass::Number))));
        assert!(tokens.contains(&(".".to_string(), None)));
    }

    #[test]
    fn test_css_class_names() {
        assert_eq!(TokenClass::Keyword.css_class(), "tcl-keyword");
        assert_eq!(TokenClass::Function.css_class(), "tcl-function");
        assert_eq!(TokenClass::String.css_class(), "tcl-string");
        assert_eq!(TokenClass::Variable.css_class(), "tcl-variable");
        assert_eq!(TokenClass::Comment.css_class(), "tcl-comment");
        assert_eq!(TokenClass::Number.css_class(), "tcl-number");
    }

    #[test]
    fn test_realistic_script_round_trip() {
        let script = "\
# Create a simulator object
set ns [new Simulator]

# Open trace files
set tracefile [open out.tr w]
$ns trace-all $tracefile
$ns namtrace-all [open out.nam w]

# Create two nodes
set n0 [$ns node]
set n1 [$ns node]

# Link them with 2Mb bandwidth and 10ms delay
$ns duplex-link $n0 $n1 2Mb 10ms DropTail
$ns queue-limit $n0 $n1 10
";
        assert_eq!(joined(script), script);
        let tokens = tokenize(script);
        assert!(
            tokens
                .iter()
                .any(|t| t.class == Some(TokenClass::Comment) && t.text.starts_with("# Create"))
        );
        assert!(
            tokens
                .iter()
                .any(|t| t.class == Some(TokenClass::Variable) && t.text == "$tracefile")
        );
    }
}
