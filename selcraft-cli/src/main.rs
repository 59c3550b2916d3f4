//! Selcraft CLI
//!
//! Builds a CSS compound selector from command-line flags and prints it.
//! Flags may be given in any order; segments are appended in grammar order
//! (element, id, classes, attributes, pseudo-classes, pseudo-element), so
//! the only way to hit a grammar error from here is a duplicate flag.

use anyhow::{Result, bail};
use clap::Parser;
use selcraft::SelectorBuilder;

/// Command-line arguments, one flag per segment kind.
#[derive(Parser)]
#[command(name = "selcraft", version, about = "Build a CSS compound selector")]
struct Args {
    /// Element (type) selector, e.g. `div`
    #[arg(long)]
    element: Option<String>,

    /// ID value, without the leading `#`
    #[arg(long)]
    id: Option<String>,

    /// Class name, without the leading `.` (repeatable)
    #[arg(long = "class")]
    classes: Vec<String>,

    /// Raw attribute expression, without the surrounding brackets,
    /// e.g. `href$=".png"` (repeatable)
    #[arg(long = "attr")]
    attrs: Vec<String>,

    /// Pseudo-class name, without the leading `:` (repeatable)
    #[arg(long = "pseudo-class")]
    pseudo_classes: Vec<String>,

    /// Pseudo-element name, without the leading `::`
    #[arg(long = "pseudo-element")]
    pseudo_element: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut selector = SelectorBuilder::new();
    if let Some(element) = &args.element {
        selector = selector.element(element)?;
    }
    if let Some(id) = &args.id {
        selector = selector.id(id)?;
    }
    for class in &args.classes {
        selector = selector.class(class)?;
    }
    for attr in &args.attrs {
        selector = selector.attr(attr)?;
    }
    for pseudo_class in &args.pseudo_classes {
        selector = selector.pseudo_class(pseudo_class)?;
    }
    if let Some(pseudo_element) = &args.pseudo_element {
        selector = selector.pseudo_element(pseudo_element)?;
    }

    let text = selector.to_string();
    if text.is_empty() {
        bail!("no selector segments given; pass at least one flag (see --help)");
    }

    println!("{text}");
    Ok(())
}
