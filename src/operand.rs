pub mod kind;
pub mod syntax;

use std::fmt;

pub use kind::{OperandFamily, OperandKind};
pub use syntax::Syntax;

/// Common contract of every machine operand.
///
/// An operand is a single 64-bit payload plus a kind that is known from its type. For immediates
/// the payload is the literal value, for other operands it is an internal encoding such as a
/// register index. Operands are plain values: they are never mutated after construction and can
/// be copied and shared across threads freely.
pub trait Operand: Copy + Eq + fmt::Debug {
    /// Raw payload of the operand.
    fn value(&self) -> u64;

    /// Kind of the concrete operand type.
    fn kind(&self) -> OperandKind;

    /// Render the operand into `sink` using the given syntax.
    ///
    /// Rendering never fails on its own; any error comes from the sink.
    fn write_text(&self, sink: &mut dyn fmt::Write, syntax: Syntax) -> fmt::Result;

    /// Render the operand into a new `String`.
    fn to_text(&self, syntax: Syntax) -> String {
        let mut text = String::new();
        // Writing into a `String` cannot fail
        let _ = self.write_text(&mut text, syntax);
        text
    }
}
