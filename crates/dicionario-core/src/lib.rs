pub mod diagnostic;
pub mod extract;
pub mod format;
pub mod locate;
pub mod lookup;
pub mod markers;
pub mod model;
pub mod preprocess;
pub mod references;

pub use diagnostic::Diagnostic;
pub use extract::{Extraction, extract};
pub use format::{format_entry, not_found_message};
pub use locate::{LocatedEntry, NotLocated, locate};
pub use lookup::{LookupOutcome, resolve};
pub use model::{Definition, DictionaryEntry, Expression, Reference, ReferenceKind};
pub use references::classify_references;
