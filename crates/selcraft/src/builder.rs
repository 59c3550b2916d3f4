//! Compound-selector builder per
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound).
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."
//!
//! The builder accumulates segments in grammar order and serializes them
//! with their literal markers (`#`, `.`, `[`/`]`, `:`, `::`) and nothing
//! else. Segment values are inserted verbatim: no escaping, no validation
//! of identifier characters or bracket balance.

use core::fmt;

use crate::combine::Stringify;
use crate::error::SelectorError;
use crate::grammar::SegmentKind;

/// One appended qualifier: a grammar slot plus its raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    /// The grammar slot this segment occupies.
    kind: SegmentKind,
    /// The raw value, stored without its marker.
    value: String,
}

/// Builder for a CSS compound selector.
///
/// Segments must be appended in the fixed grammar order
/// element, id, class(es), attribute(s), pseudo-class(es), pseudo-element.
/// Class, attribute, and pseudo-class segments may repeat within their
/// slot; element, id, and pseudo-element may occur at most once.
///
/// Every append consumes the builder and returns it on success, so chains
/// read fluently and a grammar violation surfaces at the exact call that
/// caused it:
///
/// ```
/// use selcraft::{Stringify, element};
///
/// let selector = element("a")
///     .attr("href$=\".png\"")?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
/// # Ok::<(), selcraft::SelectorError>(())
/// ```
///
/// The builder stays usable after [`stringify`](Stringify::stringify):
/// further appends remain legal as long as the grammar order still
/// permits them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorBuilder {
    /// Appended segments, always held in grammar order. The last entry's
    /// slot is the highest filled position, which is all the order check
    /// needs to inspect.
    segments: Vec<Segment>,
}

impl SelectorBuilder {
    /// Create an empty builder with no segments.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Seed a fresh builder with its first segment.
    ///
    /// The first segment of an empty builder can violate neither ordering
    /// nor uniqueness, so the facade constructors are infallible.
    pub(crate) fn seed(kind: SegmentKind, value: &str) -> Self {
        Self {
            segments: vec![Segment {
                kind,
                value: value.to_string(),
            }],
        }
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append a type selector, serialized verbatim (e.g. `div`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSegment`] if an element segment is already
    /// present; [`SelectorError::OrderViolation`] if any other segment is
    /// present (the element must come first).
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append an ID selector, serialized as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSegment`] if an id segment is already
    /// present; [`SelectorError::OrderViolation`] if a class, attribute,
    /// pseudo-class, or pseudo-element segment is already present.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class selector, serialized as `.value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if an attribute, pseudo-class, or
    /// pseudo-element segment is already present.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::Class, value)
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append an attribute selector, serialized as `[value]`. The value is
    /// the raw attribute expression (e.g. `href$=".png"`) and is inserted
    /// unescaped. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-class or
    /// pseudo-element segment is already present.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::Attribute, value)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class, serialized as `:value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-element segment is
    /// already present.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::PseudoClass, value)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append the pseudo-element, serialized as `::value`. Always the last
    /// slot, which the other methods' order checks enforce.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSegment`] if a pseudo-element segment is
    /// already present.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::PseudoElement, value)
    }

    /// Validate `kind` against the segments present, then append.
    ///
    /// Uniqueness is checked before ordering, so appending a once-only
    /// kind that is both present and out of order reports the duplicate.
    /// Ordering only needs the last segment: segments are always held in
    /// grammar order, so the last slot is the highest filled position.
    fn append(mut self, kind: SegmentKind, value: &str) -> Result<Self, SelectorError> {
        if !kind.repeatable() && self.segments.iter().any(|segment| segment.kind == kind) {
            return Err(SelectorError::DuplicateSegment { kind });
        }
        if let Some(last) = self.segments.last()
            && last.kind.position() > kind.position()
        {
            return Err(SelectorError::OrderViolation {
                segment: kind,
                after: last.kind,
            });
        }
        self.segments.push(Segment {
            kind,
            value: value.to_string(),
        });
        Ok(self)
    }
}

impl fmt::Display for SelectorBuilder {
    /// Serialize the compound selector: each segment's literal marker and
    /// raw value, concatenated in grammar order with no separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment.kind {
                SegmentKind::Element => write!(f, "{}", segment.value)?,
                SegmentKind::Id => write!(f, "#{}", segment.value)?,
                SegmentKind::Class => write!(f, ".{}", segment.value)?,
                SegmentKind::Attribute => write!(f, "[{}]", segment.value)?,
                SegmentKind::PseudoClass => write!(f, ":{}", segment.value)?,
                SegmentKind::PseudoElement => write!(f, "::{}", segment.value)?,
            }
        }
        Ok(())
    }
}

impl Stringify for SelectorBuilder {
    /// Pure read of the accumulated text; idempotent, callable any number
    /// of times, and leaves the builder open to further legal appends.
    fn stringify(&self) -> String {
        self.to_string()
    }
}
