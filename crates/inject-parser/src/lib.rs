//! # inject-parser
//!
//! ast-grep-based struct field injection for generated Go sources.
//!
//! A file is parsed once. Its `// @inject_field: <field>` comments are
//! scanned, every top-level struct is located, each directive is bound to
//! the struct it precedes, and the surviving fields are spliced in before
//! the struct's closing `}`. Fields the struct already declares are
//! skipped, so running the pass again changes nothing.
//!
//! ```
//! let source = "package demo\n\n// @inject_field: B string\ntype T struct {\n\tA int\n}\n";
//! let plan = inject_parser::plan_source("demo.pb.go", source.to_string())
//!     .expect("parses")
//!     .expect("one injection");
//! let out = plan.render(inject_parser::DEFAULT_INDENT);
//! assert!(String::from_utf8(out).unwrap().contains("\tA int\n\tB string\n}"));
//! ```

pub mod error;
pub mod locator;
pub mod parser;
pub mod plan;
pub mod resolver;
pub mod scanner;
pub mod splice;
pub mod types;

pub use error::ParserError;
pub use locator::locate_structs;
pub use parser::{AstTree, parse_go};
pub use plan::{FilePlan, plan_bytes, plan_source};
pub use resolver::resolve;
pub use scanner::{DirectiveScanner, scanner};
pub use splice::{DEFAULT_INDENT, splice};
pub use types::{Directive, StructDecl, field_name};
