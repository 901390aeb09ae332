//! IDE features: high-level APIs for editor requests.
//!
//! This module provides the interface between parse results and an editor
//! protocol layer. Each function corresponds to an editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take parse results in, return data out
//! 2. **No protocol types**: Uses our own types, converted at the boundary
//! 3. **Cross-document by name**: Multi-document queries match identifiers
//!    by exact name
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use uld::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new(grammar);
//! host.set_document("file:///a.txt", "var x = 0;");
//!
//! let analysis = host.analysis();
//! let items = analysis.completions_at("file:///a.txt", Position::new(0, 10));
//! ```

mod analysis;
mod completion;
mod folding;
mod goto;
mod references;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{completions, keyword_completions};
pub use folding::folding_ranges;
pub use goto::{
    GotoTarget, SiteKind, goto_declaration, goto_definition, goto_implementation,
    goto_implementation_in, goto_site_in,
};
pub use references::{find_references, find_references_in};
