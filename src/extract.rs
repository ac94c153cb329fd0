//! Fold a grammar parse tree into the element model.

use crate::tree::{NodeKind, ParseNode};
use crate::{Element, Error, Rule};

/// Extract every parser rule from a `GrammarSpec` tree, in declaration
/// order. Lexer rules are consumed by the parser but produce no entries.
pub fn rules(tree: &ParseNode) -> Result<Vec<Rule>, Error> {
    let mut rules = Vec::new();
    for spec in &tree.children {
        let decl = match spec.children.first() {
            Some(decl) => decl,
            None => continue,
        };
        match decl.kind {
            NodeKind::ParserRuleSpec => {
                // RuleAltList always folds to exactly one element; an empty
                // result here means the tree broke that contract.
                let mut body = elements(decl)?;
                rules.push(Rule {
                    lhs: decl.text.clone(),
                    rhs: body.remove(0),
                });
            }
            NodeKind::LexerRuleSpec => {
                log::debug!("skipping lexer rule {}", decl.text);
            }
            _ => {}
        }
    }
    Ok(rules)
}

/// Recursive fold over the tree. Nodes without a dedicated arm contribute
/// the concatenation of their children's results, which covers Block,
/// RuleSpec, LabeledAlt, and every leaf.
fn elements(node: &ParseNode) -> Result<Vec<Element>, Error> {
    match node.kind {
        NodeKind::RuleAltList | NodeKind::AltList => Ok(vec![Element::choice(children(node)?)]),
        NodeKind::Alternative => Ok(vec![Element::seq(children(node)?)]),
        NodeKind::Element | NodeKind::Ebnf => {
            let inner = children(node)?;
            Ok(apply_suffix(node, inner))
        }
        NodeKind::Atom => Ok(vec![atom(node)?]),
        _ => children(node),
    }
}

fn children(node: &ParseNode) -> Result<Vec<Element>, Error> {
    let mut out = Vec::new();
    for child in &node.children {
        out.extend(elements(child)?);
    }
    Ok(out)
}

/// Wrap the folded elements in the repetition named by a trailing
/// `EbnfSuffix` child, if there is one. A well-formed suffix carries exactly
/// one token; `+` is checked before `*` before `?`.
fn apply_suffix(node: &ParseNode, inner: Vec<Element>) -> Vec<Element> {
    let suffix = match node.child(NodeKind::EbnfSuffix) {
        Some(suffix) => suffix,
        None => return inner,
    };
    let wrap: fn(Box<Element>) -> Element = if suffix.text.contains('+') {
        Element::Plus
    } else if suffix.text.contains('*') {
        Element::Star
    } else if suffix.text.contains('?') {
        Element::Optional
    } else {
        return inner;
    };
    inner.into_iter().map(|e| wrap(Box::new(e))).collect()
}

/// The terminal case. Exactly one of the three forms must be present, in
/// priority order: string literal, token reference, rule reference.
fn atom(node: &ParseNode) -> Result<Element, Error> {
    if let Some(terminal) = node.child(NodeKind::Terminal) {
        if let Some(lit) = terminal.child(NodeKind::StringLiteral) {
            return Ok(Element::Atom(strip_quotes(&lit.text)));
        }
        if let Some(tok) = terminal.child(NodeKind::TokenRef) {
            return Ok(Element::RuleRef(tok.text.clone()));
        }
    }
    if let Some(rule) = node.child(NodeKind::Ruleref) {
        return Ok(Element::RuleRef(rule.text.clone()));
    }
    let desc = match node.children.first() {
        Some(child) => format!("{:?} {:?}", child.kind, child.text),
        None => "empty atom".to_owned(),
    };
    Err(Error::UnrecognizedAtom(desc))
}

fn strip_quotes(s: &str) -> String {
    let s = s.strip_prefix('\'').unwrap_or(s);
    let s = s.strip_suffix('\'').unwrap_or(s);
    s.to_owned()
}
