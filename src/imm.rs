/// The distinguished immediates zero, one and three and the factory that produces them.
pub mod constant;

/// Parsing of immediate literals.
pub mod parse;

use std::fmt;

pub use constant::{Constants, One, Three, Zero};
pub use parse::ParseImmError;

use crate::operand::{Operand, OperandKind, Syntax};

/// Returns true if the bits of `payload` above its low `bits` bits are either all zero or all
/// one, i.e. the payload is a legal `bits`-wide immediate.
const fn fits(payload: u64, bits: u32) -> bool {
    if bits >= u64::BITS {
        return true;
    }
    let high = payload >> bits;
    high == 0 || high == u64::MAX >> bits
}

pub(crate) fn write_immediate(
    payload: u64,
    sink: &mut dyn fmt::Write,
    syntax: Syntax,
) -> fmt::Result {
    match syntax {
        Syntax::Att => write!(sink, "${:#x}", payload),
        Syntax::Intel => write!(sink, "{:#x}", payload),
    }
}

macro_rules! immediate {
    ($(#[$doc:meta])* $name:ident, $bits:expr, unsigned: $unsigned:ty, signed: $signed:ty) => {
        $(#[$doc])*
        #[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Clone, Copy)]
        pub struct $name(u64);

        impl $name {
            /// Width of the immediate in bits.
            pub const BITS: u32 = $bits;
            pub const KIND: OperandKind = OperandKind::$name;

            /// Wraps a raw 64-bit payload. The payload is not validated, see
            /// [`check`](Self::check).
            pub const fn from_payload(payload: u64) -> Self {
                Self(payload)
            }

            /// Reinterprets `bits` as a signed value and sign-extends it to 64 bits.
            pub const fn sign_extend(bits: $unsigned) -> Self {
                Self(bits as $signed as i64 as u64)
            }

            /// Checks that the payload is a valid immediate of this width: the bits above the
            /// low `BITS` bits must be all zero or all one.
            pub const fn check(&self) -> bool {
                fits(self.0, Self::BITS)
            }
        }

        /// Zero-extends the value into the payload.
        impl From<$unsigned> for $name {
            fn from(value: $unsigned) -> Self {
                Self(value as u64)
            }
        }

        /// Sign-extends the value into the payload.
        impl From<$signed> for $name {
            fn from(value: $signed) -> Self {
                Self(value as i64 as u64)
            }
        }

        impl From<$name> for u64 {
            fn from(imm: $name) -> Self {
                imm.0
            }
        }

        impl Operand for $name {
            fn value(&self) -> u64 {
                self.0
            }

            fn kind(&self) -> OperandKind {
                Self::KIND
            }

            fn write_text(&self, sink: &mut dyn fmt::Write, syntax: Syntax) -> fmt::Result {
                write_immediate(self.0, sink, syntax)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.write_text(f, Syntax::Att)
            }
        }
    };
}

immediate!(
    /// An immediate byte value.
    ///
    /// Signed numbers range from -128 to +127. When combined with a word or doubleword operand
    /// the value is sign-extended, filling the upper bytes with the topmost bit.
    Imm8, 8, unsigned: u8, signed: i8
);

immediate!(
    /// An immediate word value used by instructions with a 16-bit operand size, ranging from
    /// -32,768 to +32,767.
    Imm16, 16, unsigned: u16, signed: i16
);

immediate!(
    /// An immediate doubleword value used by instructions with a 32-bit operand size, ranging
    /// from -2,147,483,648 to +2,147,483,647.
    Imm32, 32, unsigned: u32, signed: i32
);

immediate!(
    /// An immediate quadword value used by instructions with a 64-bit operand size. Every
    /// payload is a valid quadword.
    Imm64, 64, unsigned: u64, signed: i64
);

/// A piece of generated code with a known entry point.
pub trait CodeAddress {
    /// Address of the first byte of the code.
    fn entry_address(&self) -> u64;
}

impl CodeAddress for [u8] {
    fn entry_address(&self) -> u64 {
        self.as_ptr() as usize as u64
    }
}

impl CodeAddress for Vec<u8> {
    fn entry_address(&self) -> u64 {
        self.as_slice().entry_address()
    }
}

impl Imm64 {
    /// Embeds the address of `ptr` as an immediate.
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr as usize as u64)
    }

    /// Embeds the entry address of a code buffer as an immediate.
    pub fn from_code<C: CodeAddress + ?Sized>(code: &C) -> Self {
        Self(code.entry_address())
    }
}

impl<T> From<*const T> for Imm64 {
    fn from(ptr: *const T) -> Self {
        Self::from_ptr(ptr)
    }
}

impl<T> From<*mut T> for Imm64 {
    fn from(ptr: *mut T) -> Self {
        Self::from_ptr(ptr as *const T)
    }
}

/// Width of a plain immediate.
#[derive(
    Debug, Hash, Eq, PartialEq, Clone, Copy, strum_macros::EnumString, strum_macros::EnumIter,
)]
pub enum ImmWidth {
    #[strum(serialize = "8", serialize = "imm8")]
    Byte,
    #[strum(serialize = "16", serialize = "imm16")]
    Word,
    #[strum(serialize = "32", serialize = "imm32")]
    Dword,
    #[strum(serialize = "64", serialize = "imm64")]
    Qword,
}

impl ImmWidth {
    pub fn bits(&self) -> u32 {
        match self {
            ImmWidth::Byte => Imm8::BITS,
            ImmWidth::Word => Imm16::BITS,
            ImmWidth::Dword => Imm32::BITS,
            ImmWidth::Qword => Imm64::BITS,
        }
    }

    pub fn kind(&self) -> OperandKind {
        match self {
            ImmWidth::Byte => Imm8::KIND,
            ImmWidth::Word => Imm16::KIND,
            ImmWidth::Dword => Imm32::KIND,
            ImmWidth::Qword => Imm64::KIND,
        }
    }
}

impl fmt::Display for ImmWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "imm{}", self.bits())
    }
}

/// Any immediate operand.
///
/// Used where immediates of different widths are stored side by side. The variant determines
/// both the kind and the validity predicate.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Imm {
    Imm8(Imm8),
    Imm16(Imm16),
    Imm32(Imm32),
    Imm64(Imm64),
    Zero(Zero),
    One(One),
    Three(Three),
}

impl Imm {
    /// Wraps `payload` in the immediate type of the given width without validating it.
    pub fn with_width(width: ImmWidth, payload: u64) -> Imm {
        match width {
            ImmWidth::Byte => Imm8::from_payload(payload).into(),
            ImmWidth::Word => Imm16::from_payload(payload).into(),
            ImmWidth::Dword => Imm32::from_payload(payload).into(),
            ImmWidth::Qword => Imm64::from_payload(payload).into(),
        }
    }

    /// The narrowest plain immediate whose range check accepts `payload`.
    #[tracing::instrument]
    pub fn narrowest(payload: u64) -> Imm {
        let imm8 = Imm8::from_payload(payload);
        if imm8.check() {
            return imm8.into();
        }
        let imm16 = Imm16::from_payload(payload);
        if imm16.check() {
            return imm16.into();
        }
        let imm32 = Imm32::from_payload(payload);
        if imm32.check() {
            return imm32.into();
        }
        Imm64::from_payload(payload).into()
    }

    /// Width of the immediate in bits. The distinguished constants are bytes.
    pub fn bits(&self) -> u32 {
        match self {
            Imm::Imm8(_) | Imm::Zero(_) | Imm::One(_) | Imm::Three(_) => Imm8::BITS,
            Imm::Imm16(_) => Imm16::BITS,
            Imm::Imm32(_) => Imm32::BITS,
            Imm::Imm64(_) => Imm64::BITS,
        }
    }

    /// Runs the validity predicate of the held immediate.
    pub fn check(&self) -> bool {
        match self {
            Imm::Imm8(imm) => imm.check(),
            Imm::Imm16(imm) => imm.check(),
            Imm::Imm32(imm) => imm.check(),
            Imm::Imm64(imm) => imm.check(),
            Imm::Zero(imm) => imm.check(),
            Imm::One(imm) => imm.check(),
            Imm::Three(imm) => imm.check(),
        }
    }
}

impl Operand for Imm {
    fn value(&self) -> u64 {
        match self {
            Imm::Imm8(imm) => imm.value(),
            Imm::Imm16(imm) => imm.value(),
            Imm::Imm32(imm) => imm.value(),
            Imm::Imm64(imm) => imm.value(),
            Imm::Zero(imm) => imm.value(),
            Imm::One(imm) => imm.value(),
            Imm::Three(imm) => imm.value(),
        }
    }

    fn kind(&self) -> OperandKind {
        match self {
            Imm::Imm8(_) => Imm8::KIND,
            Imm::Imm16(_) => Imm16::KIND,
            Imm::Imm32(_) => Imm32::KIND,
            Imm::Imm64(_) => Imm64::KIND,
            Imm::Zero(_) => Zero::KIND,
            Imm::One(_) => One::KIND,
            Imm::Three(_) => Three::KIND,
        }
    }

    fn write_text(&self, sink: &mut dyn fmt::Write, syntax: Syntax) -> fmt::Result {
        write_immediate(self.value(), sink, syntax)
    }
}

impl From<Imm> for u64 {
    fn from(imm: Imm) -> Self {
        imm.value()
    }
}

impl fmt::Display for Imm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, Syntax::Att)
    }
}

macro_rules! into_imm {
    ($($name:ident),*) => {
        $(
            impl From<$name> for Imm {
                fn from(imm: $name) -> Self {
                    Imm::$name(imm)
                }
            }
        )*
    };
}

into_imm!(Imm8, Imm16, Imm32, Imm64, Zero, One, Three);
