//! Selector grammar positions and combinator tokens per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator... If it contains a type selector or universal
//! selector, that selector must come first in the sequence."
//!
//! The builder enforces this as a fixed sequence of grammar slots:
//! element, id, class(es), attribute(s), pseudo-class(es), pseudo-element.

use serde::Serialize;
use strum_macros::Display;

/// The grammar slot a selector segment occupies within a compound selector.
///
/// Variants are declared in grammar order, so the discriminant doubles as
/// the slot index (see [`SegmentKind::position`]). A new segment is legal
/// only if its slot is at or after the highest slot already filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub enum SegmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    /// Serialized verbatim, e.g. `div`. At most one per compound selector.
    #[strum(serialize = "element")]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value." Serialized as `#value`. At most one per compound selector.
    #[strum(serialize = "id")]
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier." Serialized as `.value`. Repeatable.
    #[strum(serialize = "class")]
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// The raw attribute expression, e.g. `href$=".png"`, serialized
    /// unescaped as `[value]`. Repeatable.
    #[strum(serialize = "attribute")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// Serialized as `:value`. Repeatable.
    #[strum(serialize = "pseudo-class")]
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "Only one pseudo-element may appear per selector." Serialized as
    /// `::value`. At most one, always last.
    #[strum(serialize = "pseudo-element")]
    PseudoElement,
}

impl SegmentKind {
    /// The grammar slot index of this kind (0 = element .. 5 = pseudo-element).
    #[must_use]
    pub const fn position(self) -> u8 {
        self as u8
    }

    /// Whether this kind may occur more than once in a compound selector.
    ///
    /// [§ 4.2](https://www.w3.org/TR/selectors-4/#compound) permits any
    /// number of class, attribute, and pseudo-class segments within their
    /// slot; element, id, and pseudo-element are once-only.
    #[must_use]
    pub const fn repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// The `Display` impl yields the literal CSS token, so a `Combinator` can
/// be passed directly to [`crate::combine`]. Arbitrary string tokens are
/// also accepted there; this enum covers the four standard combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors." Token: a single space. Joining always puts one space on
    /// each side of the token, so a descendant join renders with extra
    /// whitespace; CSS treats any run of whitespace as one combinator.
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>)." Token: `>`.
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+)." Token: `+`.
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~)." Token: `~`.
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// The literal CSS token for this combinator.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}
