//! The parse tree handed from the grammar parser to the extractor.
//!
//! Any parser producing this shape is a valid upstream; the node kinds are a
//! closed vocabulary and the extractor matches on them exhaustively.

/// Kinds of nodes appearing in a grammar parse tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    GrammarSpec,
    RuleSpec,
    ParserRuleSpec,
    LexerRuleSpec,
    RuleAltList,
    LabeledAlt,
    AltList,
    Alternative,
    Element,
    Ebnf,
    Block,
    Atom,
    Terminal,
    StringLiteral,
    TokenRef,
    Ruleref,
    EbnfSuffix,
}

/// A node in the parse tree.
///
/// `text` carries the rule name on `ParserRuleSpec`/`LexerRuleSpec`, the
/// label on `LabeledAlt`, and the token text on leaves; it is empty on other
/// interior nodes. `StringLiteral` text includes its quote delimiters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNode {
    pub kind: NodeKind,
    pub text: String,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create an interior node with no text of its own.
    pub fn new(kind: NodeKind, children: Vec<ParseNode>) -> Self {
        ParseNode {
            kind,
            text: String::new(),
            children,
        }
    }

    /// Create a leaf node carrying token text.
    pub fn leaf(kind: NodeKind, text: &str) -> Self {
        ParseNode {
            kind,
            text: text.to_owned(),
            children: Vec::new(),
        }
    }

    /// Create a named interior node, e.g. a rule declaration.
    pub fn named(kind: NodeKind, text: &str, children: Vec<ParseNode>) -> Self {
        ParseNode {
            kind,
            text: text.to_owned(),
            children,
        }
    }

    /// First child of the given kind, if any.
    pub fn child(&self, kind: NodeKind) -> Option<&ParseNode> {
        self.children.iter().find(|c| c.kind == kind)
    }
}
