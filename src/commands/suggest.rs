//! One-shot autocomplete

use crate::catalog::Catalog;
use crate::game::suggest;
use crate::output::print_suggestions;
use std::io::{self, Write};

/// Print the suggestions the game would offer for `query`
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn run_suggest<W: Write>(query: &str, catalog: &Catalog, out: &mut W) -> io::Result<()> {
    print_suggestions(out, &suggest(query, catalog))
}
