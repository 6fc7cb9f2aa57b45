//! Front end for message catalog files.
//!
//! A message file is a sequence of section headers, comments and message
//! definitions:
//!
//! ```text
//! // greetings
//! [[app.main]]
//! welcome:
//! 	Hello ${name}, you have ${count:plural
//! 		.one{one new message}
//! 		.other{${count:number} new messages}
//! 	}.
//! ```
//!
//! [`parse`] turns a file into [`Message`] values and an [`ErrorList`],
//! [`validate`] checks a set of messages for duplicate keys.

pub mod error;
pub mod lexer;
pub mod model;
pub mod parse;
pub mod position;
pub mod token;
pub mod validate;

pub use error::{ErrorEntry, ErrorList};
pub use lexer::Lexer;
pub use model::{Message, PluralCategory, PluralType, Replacement, ReplacementDetails, ReplacementKind};
pub use parse::{Parsed, Parser, parse};
pub use position::Position;
pub use token::{Token, TokenKind};
pub use validate::{LogSink, WarningSink, validate};
