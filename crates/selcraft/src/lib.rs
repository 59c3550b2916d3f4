//! Typed builder for CSS compound and complex selectors per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selector building** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - All six segment kinds: element, id, class, attribute, pseudo-class, pseudo-element
//!   - Grammar-order enforcement across segments
//!   - Uniqueness enforcement for the once-only kinds
//!
//! - **Complex selector joining** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - The four standard combinators as a typed enum
//!   - Arbitrary combinator tokens
//!   - Recursive combination of already-combined selectors
//!
//! # Not covered
//!
//! - Selector *parsing* (text to structure)
//! - Validation or escaping of segment values (identifier characters,
//!   bracket balance in attribute expressions)
//! - Selector matching against a document tree
//!
//! # Usage
//!
//! Start a chain with one of the facade constructors; each seeds a brand-new
//! builder with a single segment. Appends are fallible and fail fast on
//! grammar violations:
//!
//! ```
//! use selcraft::{Combinator, Stringify, combine, element, id};
//!
//! let heading = id("main").class("container")?.class("editable")?;
//! assert_eq!(heading.stringify(), "#main.container.editable");
//!
//! let cell = combine(&element("table"), Combinator::Child, &element("td"));
//! assert_eq!(cell.as_str(), "table > td");
//! # Ok::<(), selcraft::SelectorError>(())
//! ```

/// Compound-selector builder per [§ 4.2](https://www.w3.org/TR/selectors-4/#compound).
pub mod builder;
/// Complex-selector joining per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combine;
/// Selector grammar violations.
pub mod error;
/// Grammar positions and combinator tokens per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod grammar;

// Re-exports for convenience
pub use builder::SelectorBuilder;
pub use combine::{CombinedSelector, Stringify, combine};
pub use error::SelectorError;
pub use grammar::{Combinator, SegmentKind};

/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// Start a selector with a type selector, e.g. `element("div")` → `div`.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(SegmentKind::Element, value)
}

/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
///
/// Start a selector with an ID selector, e.g. `id("main")` → `#main`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(SegmentKind::Id, value)
}

/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// Start a selector with a class selector, e.g. `class("nav")` → `.nav`.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(SegmentKind::Class, value)
}

/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Start a selector with an attribute selector; the raw expression is
/// inserted unescaped, e.g. `attr("href$=\".png\"")` → `[href$=".png"]`.
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(SegmentKind::Attribute, value)
}

/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
///
/// Start a selector with a pseudo-class, e.g. `pseudo_class("focus")` → `:focus`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(SegmentKind::PseudoClass, value)
}

/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Start a selector with the pseudo-element, e.g. `pseudo_element("before")`
/// → `::before`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(SegmentKind::PseudoElement, value)
}
