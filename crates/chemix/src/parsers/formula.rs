use std::mem;

use miette::SourceSpan;

use crate::{AtomicDatabase, Count, Element, FormulaNode};

use super::{
    errors::{ParseError, ParseErrorKind},
    tokens::{Delimiter, Token, TokenKind, tokenize},
};

/// Formula = Segment , { Separator , [ Count ] , Segment } ;
/// Segment = Term , { Term } ;
/// Term    = ( Element Symbol | Group ) , [ Count ] ;
/// Group   = "(" , Segment , ")" | "[" , Segment , "]" ;
///
/// The returned root is always a [`FormulaNode::Group`]. Formulas with hydrate separators have one child group
/// per segment, multiplied by that segment's leading coefficient.
pub fn parse_formula<'a>(db: &'a AtomicDatabase, formula: &str) -> Result<FormulaNode<'a>, ParseError> {
    if formula.is_empty() {
        return Err(ParseError::new(formula, (0, 0), ParseErrorKind::EmptyFormula));
    }

    let mut parser = FormulaParser::new(db, formula);
    for token in tokenize(formula)? {
        parser.feed(token)?;
    }
    parser.finish()
}

type Children<'a> = Vec<(FormulaNode<'a>, Count)>;

enum State<'a> {
    /// Expecting an element, a group, or the end of the current group
    InGroup,
    /// An element or group has been read and may be followed by a multiplier
    AfterTerm(FormulaNode<'a>),
    /// A separator has been read and may be followed by a coefficient for the whole segment
    SegmentStart,
}

struct Frame<'a> {
    delimiter: Delimiter,
    span: SourceSpan,
    children: Children<'a>,
}

struct FormulaParser<'a, 'f> {
    db: &'a AtomicDatabase,
    formula: &'f str,
    state: State<'a>,
    // Terms of the current top-level segment
    root: Children<'a>,
    // Groups that are still open, innermost last
    groups: Vec<Frame<'a>>,
    // Completed hydrate segments
    segments: Children<'a>,
    coefficient: Count,
    last_separator: Option<SourceSpan>,
}

impl<'a, 'f> FormulaParser<'a, 'f> {
    fn new(db: &'a AtomicDatabase, formula: &'f str) -> Self {
        Self {
            db,
            formula,
            state: State::InGroup,
            root: Vec::new(),
            groups: Vec::new(),
            segments: Vec::new(),
            coefficient: Count::default(),
            last_separator: None,
        }
    }

    fn feed(&mut self, Token { kind, span }: Token<'_>) -> Result<(), ParseError> {
        self.state = match (mem::replace(&mut self.state, State::InGroup), kind) {
            (State::AfterTerm(node), TokenKind::Count(count)) => {
                self.current_group().push((node, count));
                State::InGroup
            }
            (State::SegmentStart, TokenKind::Count(count)) => {
                self.coefficient = count;
                State::InGroup
            }
            (State::InGroup, TokenKind::Count(_)) => {
                return Err(self.error(span, ParseErrorKind::MissingTerm));
            }
            (state, kind) => {
                if let State::AfterTerm(node) = state {
                    self.current_group().push((node, Count::default()));
                }
                self.start_term(kind, span)?
            }
        };

        Ok(())
    }

    fn start_term(&mut self, kind: TokenKind<'_>, span: SourceSpan) -> Result<State<'a>, ParseError> {
        match kind {
            TokenKind::Symbol(symbol) => {
                let element = Element::new(self.db, symbol).map_err(|error| {
                    self.error(span, ParseErrorKind::UnknownElement(Box::new(error)))
                })?;
                Ok(State::AfterTerm(FormulaNode::Element(element)))
            }
            TokenKind::Open(delimiter) => {
                self.groups.push(Frame {
                    delimiter,
                    span,
                    children: Vec::new(),
                });
                Ok(State::InGroup)
            }
            TokenKind::Close(delimiter) => {
                let frame = match self.groups.pop() {
                    Some(frame) if frame.delimiter == delimiter => frame,
                    _ => return Err(self.error(span, ParseErrorKind::UnbalancedGroup(delimiter.closing()))),
                };
                if frame.children.is_empty() {
                    let start = frame.span.offset();
                    let end = span.offset() + span.len();
                    return Err(self.error((start, end - start), ParseErrorKind::EmptyGroup));
                }
                Ok(State::AfterTerm(FormulaNode::Group(frame.children)))
            }
            TokenKind::Separator => {
                self.close_segment(span)?;
                self.last_separator = Some(span);
                Ok(State::SegmentStart)
            }
            // Counts are always handled by `feed()` before reaching here
            TokenKind::Count(_) => Err(self.error(span, ParseErrorKind::MissingTerm)),
        }
    }

    fn close_segment(&mut self, span: SourceSpan) -> Result<(), ParseError> {
        self.ensure_groups_closed()?;
        if self.root.is_empty() {
            return Err(self.error(span, ParseErrorKind::EmptyGroup));
        }

        let segment = FormulaNode::Group(mem::take(&mut self.root));
        let coefficient = mem::take(&mut self.coefficient);
        self.segments.push((segment, coefficient));
        Ok(())
    }

    fn ensure_groups_closed(&self) -> Result<(), ParseError> {
        match self.groups.last() {
            Some(frame) => {
                let kind = ParseErrorKind::UnbalancedGroup(frame.delimiter.opening());
                Err(self.error(frame.span, kind))
            }
            None => Ok(()),
        }
    }

    fn finish(mut self) -> Result<FormulaNode<'a>, ParseError> {
        if let State::AfterTerm(node) = mem::replace(&mut self.state, State::InGroup) {
            self.current_group().push((node, Count::default()));
        }

        match self.last_separator {
            // NOTE: Every token sequence that makes it this far without a separator leaves at least one term in the
            // root, since empty formulas and empty groups are rejected earlier
            None => {
                self.ensure_groups_closed()?;
                Ok(FormulaNode::Group(self.root))
            }
            Some(span) => {
                self.close_segment(span)?;
                Ok(FormulaNode::Group(self.segments))
            }
        }
    }

    fn current_group(&mut self) -> &mut Children<'a> {
        match self.groups.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    fn error(&self, span: impl Into<SourceSpan>, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.formula, span, kind)
    }
}
