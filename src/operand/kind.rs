use std::fmt;

/// Every operand type that appears in the Intel manual.
///
/// The set is closed: each concrete operand type maps to exactly one tag and dispatch code is
/// expected to match exhaustively. Discriminants are stable and never reused.
#[derive(
    Debug,
    Hash,
    Eq,
    PartialEq,
    Clone,
    Copy,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum OperandKind {
    // Control registers
    Cr = 0,
    Cr0234,
    Cr8,

    // Debug registers
    Dr,

    // EFLAGS register bits
    Eflag,

    // Conditional jump hints
    Hint,

    // Immediates
    Imm,
    Imm8,
    Imm16,
    Imm32,
    Imm64,
    Zero,
    One,
    Three,

    // Labels
    Label,

    // Memory
    M,
    M8,
    M16,
    M32,
    M64,
    M128,
    M256,
    /// `m16&64`
    MPair16x64,
    /// `m16:16`
    MPtr16x16,
    /// `m16:32`
    MPtr16x32,
    /// `m16:64`
    MPtr16x64,
    M16Int,
    M32Int,
    M64Int,
    M32Fp,
    M64Fp,
    M80Fp,
    M80Bcd,
    M2Byte,
    M14Byte,
    M28Byte,
    M94Byte,
    M108Byte,
    M512Byte,

    // MMX registers
    Mm,

    // Modifiers
    Modifier,
    Pref66,
    PrefRexW,
    Far,

    // Memory offsets
    Moffs,
    Moffs8,
    Moffs16,
    Moffs32,
    Moffs64,

    // Umbrella categories
    Operand,
    AtomicOperand,
    CompoundOperand,

    // General purpose registers
    R,
    Rl,
    Rh,
    Rb,
    Al,
    Cl,
    R16,
    Ax,
    Dx,
    AddrR,
    R32,
    Eax,
    R64,
    Rax,

    // Relative addresses
    Rel,
    Rel8,
    Rel32,

    // Segment registers
    Sreg,
    Fs,
    Gs,

    // Floating point stack registers
    St,
    St0,

    // XMM registers
    Xmm,
    Xmm0,

    // YMM registers
    Ymm,
}

/// Group of closely related operand kinds.
#[derive(
    Debug,
    Hash,
    Eq,
    PartialEq,
    Clone,
    Copy,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum OperandFamily {
    ControlRegister,
    DebugRegister,
    Eflag,
    Hint,
    Immediate,
    Label,
    Memory,
    MmxRegister,
    Modifier,
    MemoryOffset,
    Generic,
    GeneralPurposeRegister,
    Relative,
    SegmentRegister,
    FpuStackRegister,
    XmmRegister,
    YmmRegister,
}

impl OperandKind {
    /// Stable numeric tag of this kind.
    pub fn tag(&self) -> u8 {
        *self as u8
    }

    pub fn family(&self) -> OperandFamily {
        use OperandKind::*;

        match self {
            Cr | Cr0234 | Cr8 => OperandFamily::ControlRegister,
            Dr => OperandFamily::DebugRegister,
            Eflag => OperandFamily::Eflag,
            Hint => OperandFamily::Hint,
            Imm | Imm8 | Imm16 | Imm32 | Imm64 | Zero | One | Three => OperandFamily::Immediate,
            Label => OperandFamily::Label,
            M | M8 | M16 | M32 | M64 | M128 | M256 | MPair16x64 | MPtr16x16 | MPtr16x32
            | MPtr16x64 | M16Int | M32Int | M64Int | M32Fp | M64Fp | M80Fp | M80Bcd | M2Byte
            | M14Byte | M28Byte | M94Byte | M108Byte | M512Byte => OperandFamily::Memory,
            Mm => OperandFamily::MmxRegister,
            Modifier | Pref66 | PrefRexW | Far => OperandFamily::Modifier,
            Moffs | Moffs8 | Moffs16 | Moffs32 | Moffs64 => OperandFamily::MemoryOffset,
            Operand | AtomicOperand | CompoundOperand => OperandFamily::Generic,
            R | Rl | Rh | Rb | Al | Cl | R16 | Ax | Dx | AddrR | R32 | Eax | R64 | Rax => {
                OperandFamily::GeneralPurposeRegister
            }
            Rel | Rel8 | Rel32 => OperandFamily::Relative,
            Sreg | Fs | Gs => OperandFamily::SegmentRegister,
            St | St0 => OperandFamily::FpuStackRegister,
            Xmm | Xmm0 => OperandFamily::XmmRegister,
            Ymm => OperandFamily::YmmRegister,
        }
    }

    pub fn is_immediate(&self) -> bool {
        self.family() == OperandFamily::Immediate
    }

    /// True for the distinguished immediates that only the constant factory can produce.
    pub fn is_constant(&self) -> bool {
        matches!(self, OperandKind::Zero | OperandKind::One | OperandKind::Three)
    }

    pub fn is_memory(&self) -> bool {
        self.family() == OperandFamily::Memory
    }

    pub fn is_register(&self) -> bool {
        matches!(
            self.family(),
            OperandFamily::ControlRegister
                | OperandFamily::DebugRegister
                | OperandFamily::MmxRegister
                | OperandFamily::GeneralPurposeRegister
                | OperandFamily::SegmentRegister
                | OperandFamily::FpuStackRegister
                | OperandFamily::XmmRegister
                | OperandFamily::YmmRegister
        )
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        f.pad(name)
    }
}

impl fmt::Display for OperandFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        f.pad(name)
    }
}
