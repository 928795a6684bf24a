/// The operand model shared by every operand type.
///
/// - **Kinds** - the closed taxonomy of operand types an encoder dispatches on
/// - **Operand** - the common contract: a 64-bit payload, a kind and a textual form
pub mod operand;

/// Immediate operands of 8, 16, 32 and 64 bits with two's-complement range checks, plus the
/// distinguished constants zero, one and three.
pub mod imm;

/// Command line inspection of immediates and operand kinds.
pub mod inspect;

/// Chrome tracing support
pub mod instrumentation;

pub use imm::{Constants, Imm, Imm16, Imm32, Imm64, Imm8, ImmWidth, One, Three, Zero};
pub use operand::{Operand, OperandFamily, OperandKind, Syntax};
