//! Consuming terminals: stages that drive a pipeline to completion.
//!
//! A terminal takes ownership of the sequence handed to it, traverses,
//! and returns a final value (or unit, for the purely effectful ones):
//!
//! - [`reduce`]: left fold into an accumulator.
//! - [`sink`]: append every item to a collection.
//! - [`drain`]: traverse for side effects, discarding items.
//! - [`apply`]: invoke a function on every item.
//! - [`unzip`]: split a pair sequence into two collections.
//! - [`all`] / [`any`] / [`none`]: short-circuiting quantifiers.
//! - [`fill`]: overwrite a write cursor's elements with a value.
//! - [`copy`]: append a sequence's items to a collection.

pub mod fill;
pub mod fold;
pub mod predicate;
pub mod sink;

pub use fill::fill;
pub use fold::{ReduceStage, reduce};
pub use predicate::{AllStage, AnyStage, NoneStage, all, any, none};
pub use sink::{ApplyStage, DrainStage, SinkStage, UnzipStage, apply, copy, drain, sink, unzip};
