//! Integration tests for complex-selector joining.

use selcraft::{Combinator, SelectorError, Stringify, class, combine, element, pseudo_class};

// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_next_sibling_join() -> Result<(), SelectorError> {
    let main = element("div").id("main")?;
    let data = element("table").id("data")?;
    let joined = combine(&main, '+', &data);
    assert_eq!(joined.as_str(), "div#main + table#data");
    Ok(())
}

#[test]
fn test_typed_combinator_tokens() {
    let left = element("ul");
    let right = element("li");
    assert_eq!(
        combine(&left, Combinator::Child, &right).as_str(),
        "ul > li"
    );
    assert_eq!(
        combine(&left, Combinator::NextSibling, &right).as_str(),
        "ul + li"
    );
    assert_eq!(
        combine(&left, Combinator::SubsequentSibling, &right).as_str(),
        "ul ~ li"
    );
    // The descendant token is itself a space, so the single-space-around-
    // the-token rule yields a three-space join. Still a valid descendant
    // selector: CSS collapses any whitespace run into one combinator.
    assert_eq!(
        combine(&left, Combinator::Descendant, &right).as_str(),
        "ul   li"
    );
}

#[test]
fn test_arbitrary_token_accepted() {
    // No validation of which tokens are legal; any Display value goes in.
    let joined = combine(&element("a"), "||", &element("b"));
    assert_eq!(joined.as_str(), "a || b");
}

#[test]
fn test_nested_combination_serializes_inner_first() {
    let x = element("x");
    let y = element("y");
    let z = element("z");
    // Inner join first, then the result is re-joined with a space token:
    // the single-space rule applies at each level independently.
    let inner = combine(&x, '~', &y);
    let outer = combine(&inner, ' ', &z);
    assert_eq!(outer.as_str(), "x ~ y   z");
}

#[test]
fn test_deeply_nested_combination() -> Result<(), SelectorError> {
    let nav = element("nav").class("top")?;
    let item = combine(&element("ul"), Combinator::Child, &element("li"));
    let link = combine(&item, Combinator::Child, &pseudo_class("hover"));
    let full = combine(&nav, '>', &link);
    assert_eq!(full.as_str(), "nav.top > ul > li > :hover");
    Ok(())
}

#[test]
fn test_each_combine_call_is_independent() {
    // A fresh value per call: earlier results are unaffected by later
    // joins over the same inputs.
    let a = class("a");
    let b = class("b");
    let c = class("c");

    let first = combine(&a, '>', &b);
    let second = combine(&a, '+', &c);
    assert_eq!(first.as_str(), ".a > .b");
    assert_eq!(second.as_str(), ".a + .c");

    // Repeating a join produces an equal, separate value.
    let again = combine(&a, '>', &b);
    assert_eq!(first, again);
}

#[test]
fn test_combined_stringify_is_idempotent() {
    let joined = combine(&element("p"), Combinator::Child, &element("em"));
    assert_eq!(joined.stringify(), joined.stringify());
    assert_eq!(joined.stringify(), joined.as_str());
    assert_eq!(joined.to_string(), joined.as_str());
}

#[test]
fn test_inputs_unchanged_by_combination() -> Result<(), SelectorError> {
    // The joiner reads the inputs' text and holds no reference to them.
    let left = element("div").class("panel")?;
    let right = element("span");
    let _joined = combine(&left, '>', &right);
    assert_eq!(left.stringify(), "div.panel");
    assert_eq!(right.stringify(), "span");
    Ok(())
}

#[test]
fn test_combinator_token_accessor() {
    assert_eq!(Combinator::Descendant.token(), " ");
    assert_eq!(Combinator::Child.token(), ">");
    assert_eq!(Combinator::NextSibling.token(), "+");
    assert_eq!(Combinator::SubsequentSibling.token(), "~");
    assert_eq!(Combinator::Child.to_string(), Combinator::Child.token());
}
