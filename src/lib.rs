//! docblock — parse `/** ... */` documentation comments.
//!
//! A docblock is turned into an ordered list of [`Parameter`] records: text
//! blocks (no key) and `@key value` annotations, continuation lines joined
//! with `\n`. [`DocBlock`] answers queries over that list.
//!
//! ```
//! use docblock::DocBlock;
//!
//! let doc = DocBlock::new(
//!     "/**
//!       * Sends a message.
//!       *
//!       * @param string $to
//!       * @return bool
//!       */",
//! );
//!
//! assert_eq!(doc.title(), Some("Sends a message."));
//! assert_eq!(doc.find_values("param"), vec![Some("string $to")]);
//! assert!(doc.first_or_fail("throws").is_err());
//! ```

pub mod docblock;
pub mod error;
pub mod extract;
pub mod model;
pub mod parameter;
pub mod parser;
pub mod render;

pub use docblock::{DocBlock, DocSource};
pub use error::{Error, Result};
pub use parameter::Parameter;
