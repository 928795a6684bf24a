use std::fmt;

use lazy_static::lazy_static;

use super::{write_immediate, Imm, Imm8};
use crate::operand::{Operand, OperandKind, Syntax};

macro_rules! constant {
    ($(#[$doc:meta])* $name:ident, $value:expr) => {
        $(#[$doc])*
        #[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Clone, Copy)]
        pub struct $name(Imm8);

        impl $name {
            pub const KIND: OperandKind = OperandKind::$name;

            /// Only [`Constants`] may construct this value.
            const fn new() -> Self {
                Self(Imm8::from_payload($value))
            }

            /// Checks that the payload equals the constant.
            pub const fn check(&self) -> bool {
                self.0 .0 == $value
            }

            /// The constant viewed as a plain byte immediate.
            pub const fn as_imm8(&self) -> Imm8 {
                self.0
            }
        }

        impl From<$name> for Imm8 {
            fn from(constant: $name) -> Self {
                constant.0
            }
        }

        impl From<$name> for u64 {
            fn from(constant: $name) -> Self {
                constant.0.into()
            }
        }

        impl Operand for $name {
            fn value(&self) -> u64 {
                self.0.value()
            }

            fn kind(&self) -> OperandKind {
                Self::KIND
            }

            fn write_text(&self, sink: &mut dyn fmt::Write, syntax: Syntax) -> fmt::Result {
                write_immediate(self.value(), sink, syntax)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.write_text(f, Syntax::Att)
            }
        }
    };
}

constant!(
    /// The immediate constant zero.
    ///
    /// A `Zero` can only be obtained from [`Constants::zero`], so every `Zero` holds 0:
    ///
    /// ```compile_fail
    /// let zero = x64operand::imm::Zero::new();
    /// ```
    Zero, 0
);

constant!(
    /// The immediate constant one, used by the short forms of the shift and rotate instructions.
    ///
    /// ```compile_fail
    /// let one = x64operand::imm::One(x64operand::imm::Imm8::from(1u8));
    /// ```
    One, 1
);

constant!(
    /// The immediate constant three.
    ///
    /// ```compile_fail
    /// let three = x64operand::imm::Three::new();
    /// ```
    Three, 3
);

lazy_static! {
    static ref ZERO: Zero = {
        tracing::trace!("materializing constant zero");
        Zero::new()
    };
    static ref ONE: One = {
        tracing::trace!("materializing constant one");
        One::new()
    };
    static ref THREE: Three = {
        tracing::trace!("materializing constant three");
        Three::new()
    };
}

/// The only way to obtain the distinguished immediates.
///
/// Each constant is built once per process and handed out by copy.
#[derive(Debug)]
pub struct Constants;

impl Constants {
    pub fn zero() -> Zero {
        *ZERO
    }

    pub fn one() -> One {
        *ONE
    }

    pub fn three() -> Three {
        *THREE
    }

    /// The distinguished constant with the given payload, if there is one.
    #[tracing::instrument]
    pub fn lookup(payload: u64) -> Option<Imm> {
        match payload {
            0 => Some(Constants::zero().into()),
            1 => Some(Constants::one().into()),
            3 => Some(Constants::three().into()),
            _ => None,
        }
    }
}
