//! Canonical EBNF rendering.

use crate::{Element, Rule};

/// Render rules as common EBNF, one `name ::= production` line per rule,
/// with a trailing newline.
pub fn to_common_ebnf(rules: &[Rule]) -> String {
    let lines: Vec<String> = rules
        .iter()
        .map(|r| format!("{} ::= {}", r.lhs, element(&r.rhs)))
        .collect();
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn element(e: &Element) -> String {
    match e {
        Element::Atom(text) => format!("'{}'", text),
        Element::RuleRef(name) => name.clone(),
        Element::Optional(child) => format!("{}?", grouped(child)),
        Element::Plus(child) => format!("{}+", grouped(child)),
        Element::Star(child) => format!("{}*", grouped(child)),
        Element::Choice(children) => join(children, " | "),
        Element::Seq(children) => join(children, " "),
    }
}

/// Seq and Choice children are parenthesized wherever they appear as a
/// child, including Choice directly under Choice, so the output re-parses
/// without ambiguity.
fn grouped(e: &Element) -> String {
    match e {
        Element::Choice(_) | Element::Seq(_) => format!("({})", element(e)),
        _ => element(e),
    }
}

fn join(children: &[Element], sep: &str) -> String {
    children.iter().map(grouped).collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(lhs: &str, rhs: Element) -> Rule {
        Rule {
            lhs: lhs.to_owned(),
            rhs,
        }
    }

    #[test]
    fn lines_and_trailing_newline() {
        let rules = vec![
            rule("a", Element::Atom("x".to_owned())),
            rule("b", Element::RuleRef("a".to_owned())),
        ];
        assert_eq!(to_common_ebnf(&rules), "a ::= 'x'\nb ::= a\n");
    }

    #[test]
    fn choice_in_choice_is_parenthesized() {
        let rhs = Element::Choice(vec![
            Element::Choice(vec![
                Element::Atom("a".to_owned()),
                Element::Atom("b".to_owned()),
            ]),
            Element::Atom("c".to_owned()),
        ]);
        assert_eq!(element(&rhs), "('a' | 'b') | 'c'");
    }

    #[test]
    fn seq_in_choice_is_parenthesized() {
        let rhs = Element::Choice(vec![
            Element::Seq(vec![
                Element::RuleRef("a".to_owned()),
                Element::RuleRef("b".to_owned()),
            ]),
            Element::Atom("c".to_owned()),
        ]);
        assert_eq!(element(&rhs), "(a b) | 'c'");
    }

    #[test]
    fn suffix_groups_only_containers() {
        let star_seq = Element::Star(Box::new(Element::Seq(vec![
            Element::Atom(",".to_owned()),
            Element::RuleRef("item".to_owned()),
        ])));
        assert_eq!(element(&star_seq), "(',' item)*");

        let opt_star = Element::Optional(Box::new(Element::Star(Box::new(Element::RuleRef(
            "x".to_owned(),
        )))));
        assert_eq!(element(&opt_star), "x*?");
    }

    #[test]
    fn rendering_is_idempotent() {
        let rules = vec![rule(
            "list",
            Element::Seq(vec![
                Element::RuleRef("item".to_owned()),
                Element::Star(Box::new(Element::Seq(vec![
                    Element::Atom(",".to_owned()),
                    Element::RuleRef("item".to_owned()),
                ]))),
            ]),
        )];
        assert_eq!(to_common_ebnf(&rules), to_common_ebnf(&rules));
    }
}
