//! Tokenizer, expression tree, and Shunting-Yard parser for infix mathematical expressions.
//!
//! ```
//! use sym_parser::{parser::parse, tree::Expr};
//!
//! let expr = parse("2 * x**3 - sin(x)").unwrap();
//! assert!(expr.depends_on("x"));
//! assert_eq!(expr.to_string(), "2 * x**3 - sin(x)");
//! ```

pub mod parser;
pub mod tokenizer;
pub mod tree;

pub use parser::parse;
pub use tree::Expr;
