//! Parse ANTLR-style grammar source into a parse tree.
//!
//! This is a practical subset of the ANTLR notation: a `grammar Name;`
//! header, parser rules with optionally labeled alternatives, lexer rules
//! (consumed but not modeled), single-quoted literals, rule and token
//! references, parenthesized blocks, and `?`/`+`/`*` suffixes.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until},
    character::complete::{alpha1, alphanumeric1, multispace1},
    combinator::{map, opt, recognize, verify},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use crate::tree::{NodeKind, ParseNode};
use crate::Error;

/// Parse a complete grammar source into a `GrammarSpec` tree. Trailing input
/// that is not whitespace or comments is an error.
pub fn parse(input: &str) -> Result<ParseNode, Error> {
    let (rem, tree) = grammar_spec(input)?;
    let (rem, _) = sc(rem)?;
    if !rem.is_empty() {
        return Err(Error::Parse(format!("unexpected input: {:?}", rem)));
    }
    Ok(tree)
}

fn grammar_spec(input: &str) -> IResult<&str, ParseNode> {
    let (rem, _) = preceded(
        sc,
        tuple((tag("grammar"), sc, ident, preceded(sc, tag(";")))),
    )(input)?;
    let (rem, specs) = many0(preceded(sc, rule_spec))(rem)?;
    Ok((rem, ParseNode::new(NodeKind::GrammarSpec, specs)))
}

fn rule_spec(input: &str) -> IResult<&str, ParseNode> {
    map(alt((parser_rule_spec, lexer_rule_spec)), |decl| {
        ParseNode::new(NodeKind::RuleSpec, vec![decl])
    })(input)
}

fn parser_rule_spec(input: &str) -> IResult<&str, ParseNode> {
    let (rem, name) = rule_name(input)?;
    let (rem, _) = preceded(sc, tag(":"))(rem)?;
    let (rem, alts) = rule_alt_list(rem)?;
    let (rem, _) = preceded(sc, tag(";"))(rem)?;
    Ok((
        rem,
        ParseNode::named(NodeKind::ParserRuleSpec, name, vec![alts]),
    ))
}

/// Lexer rule bodies are not part of the model; the body is consumed and
/// only the name kept. Quoted text inside the body may contain `;`.
fn lexer_rule_spec(input: &str) -> IResult<&str, ParseNode> {
    let (rem, name) = token_name(input)?;
    let (rem, _) = preceded(sc, tag(":"))(rem)?;
    let (rem, _) = recognize(many0(alt((string_literal, is_not("';")))))(rem)?;
    let (rem, _) = tag(";")(rem)?;
    Ok((rem, ParseNode::leaf(NodeKind::LexerRuleSpec, name)))
}

fn rule_alt_list(input: &str) -> IResult<&str, ParseNode> {
    let (rem, alts) = separated_list1(preceded(sc, tag("|")), labeled_alt)(input)?;
    Ok((rem, ParseNode::new(NodeKind::RuleAltList, alts)))
}

fn labeled_alt(input: &str) -> IResult<&str, ParseNode> {
    let (rem, alt_node) = alternative(input)?;
    let (rem, label) = opt(preceded(preceded(sc, tag("#")), preceded(sc, ident)))(rem)?;
    Ok((
        rem,
        ParseNode::named(NodeKind::LabeledAlt, label.unwrap_or(""), vec![alt_node]),
    ))
}

fn alt_list(input: &str) -> IResult<&str, ParseNode> {
    let (rem, alts) = separated_list1(preceded(sc, tag("|")), alternative)(input)?;
    Ok((rem, ParseNode::new(NodeKind::AltList, alts)))
}

/// An alternative holds at least one element; empty alternatives are
/// rejected here so the extractor never sees an empty sequence.
fn alternative(input: &str) -> IResult<&str, ParseNode> {
    let (rem, elements) = many1(preceded(sc, element))(input)?;
    Ok((rem, ParseNode::new(NodeKind::Alternative, elements)))
}

fn element(input: &str) -> IResult<&str, ParseNode> {
    alt((
        map(ebnf, |e| ParseNode::new(NodeKind::Element, vec![e])),
        map(pair(atom, opt(preceded(sc, ebnf_suffix))), |(a, suffix)| {
            let mut children = vec![a];
            children.extend(suffix);
            ParseNode::new(NodeKind::Element, children)
        }),
    ))(input)
}

fn ebnf(input: &str) -> IResult<&str, ParseNode> {
    let (rem, (block, suffix)) = pair(block, opt(preceded(sc, ebnf_suffix)))(input)?;
    let mut children = vec![block];
    children.extend(suffix);
    Ok((rem, ParseNode::new(NodeKind::Ebnf, children)))
}

fn block(input: &str) -> IResult<&str, ParseNode> {
    let (rem, alts) = delimited(tag("("), alt_list, preceded(sc, tag(")")))(input)?;
    Ok((rem, ParseNode::new(NodeKind::Block, vec![alts])))
}

fn ebnf_suffix(input: &str) -> IResult<&str, ParseNode> {
    map(alt((tag("?"), tag("+"), tag("*"))), |s| {
        ParseNode::leaf(NodeKind::EbnfSuffix, s)
    })(input)
}

fn atom(input: &str) -> IResult<&str, ParseNode> {
    alt((
        map(string_literal, |s| {
            ParseNode::new(
                NodeKind::Atom,
                vec![ParseNode::new(
                    NodeKind::Terminal,
                    vec![ParseNode::leaf(NodeKind::StringLiteral, s)],
                )],
            )
        }),
        map(token_name, |s| {
            ParseNode::new(
                NodeKind::Atom,
                vec![ParseNode::new(
                    NodeKind::Terminal,
                    vec![ParseNode::leaf(NodeKind::TokenRef, s)],
                )],
            )
        }),
        map(rule_name, |s| {
            ParseNode::new(NodeKind::Atom, vec![ParseNode::leaf(NodeKind::Ruleref, s)])
        }),
    ))(input)
}

/// The matched text keeps its quote delimiters; the extractor strips them.
fn string_literal(input: &str) -> IResult<&str, &str> {
    recognize(delimited(tag("'"), take_until("'"), tag("'")))(input)
}

fn ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn rule_name(input: &str) -> IResult<&str, &str> {
    verify(ident, |s: &str| {
        s.starts_with(|c: char| c.is_ascii_lowercase())
    })(input)
}

fn token_name(input: &str) -> IResult<&str, &str> {
    verify(ident, |s: &str| {
        s.starts_with(|c: char| c.is_ascii_uppercase())
    })(input)
}

/// Whitespace and comments between tokens.
fn sc(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((multispace1, line_comment, block_comment))))(input)
}

fn line_comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(tag("//"), opt(is_not("\n"))))(input)
}

fn block_comment(input: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}
