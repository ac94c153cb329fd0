//! Markdown rendering with cross-linked rule anchors.

use crate::{Element, Rule};

/// Hard line break within a rule block.
const LINE_BREAK: &str = "<br>\n";
/// Indentation for the rule body and for broken long sequences.
const INDENT: &str = "   ";
/// A top-level sequence longer than this is broken across lines.
const SEQ_BREAK_LEN: usize = 4;

/// Render rules as a Markdown document, blocks separated by blank lines,
/// with a trailing newline. With `anchors` set, each block is wrapped in a
/// container div carrying the anchor id that rule references link to.
pub fn to_markdown(rules: &[Rule], anchors: bool) -> String {
    let blocks: Vec<String> = rules.iter().map(|r| rule_block(r, anchors)).collect();
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn rule_block(rule: &Rule, anchors: bool) -> String {
    let body = format!(
        "**_{}_**{}{}{}",
        rule.lhs,
        LINE_BREAK,
        INDENT,
        element(&rule.rhs, true)
    );
    if anchors {
        format!("<div id=\"grammar-rule-{}\">\n\n{}\n\n</div>", rule.lhs, body)
    } else {
        body
    }
}

fn element(e: &Element, top_level: bool) -> String {
    match e {
        Element::Atom(text) => format!("`'{}'`", text),
        Element::RuleRef(name) => format!("_[{}](#grammar-rule-{})_", name, name),
        Element::Optional(child) => format!("[{}]", element(child, false)),
        Element::Star(child) => format!("{{{}}}", element(child, false)),
        // One-or-more expands as one occurrence, then zero-or-more.
        Element::Plus(child) => {
            let once = element(child, false);
            format!("{} {{{}}}", once, once)
        }
        Element::Choice(children) => {
            let sep = if top_level {
                format!("{} | ", LINE_BREAK)
            } else {
                " | ".to_owned()
            };
            join(children, &sep)
        }
        Element::Seq(children) => {
            let sep = if top_level && children.len() > SEQ_BREAK_LEN {
                format!("{}{}", LINE_BREAK, INDENT)
            } else {
                " ".to_owned()
            };
            join(children, &sep)
        }
    }
}

/// Multi-token children (sequences, plus-expansions, choices) are
/// parenthesized inside a surrounding Choice or Seq; single-token renderings
/// and the bracketed repetitions are not.
fn grouped(e: &Element) -> String {
    match e {
        Element::Seq(_) | Element::Plus(_) | Element::Choice(_) => {
            format!("({})", element(e, false))
        }
        _ => element(e, false),
    }
}

fn join(children: &[Element], sep: &str) -> String {
    children.iter().map(grouped).collect::<Vec<_>>().join(sep)
}
