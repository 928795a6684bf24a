/// Assembly syntax dialect used when rendering operands as text.
#[derive(
    Debug,
    Default,
    Hash,
    Eq,
    PartialEq,
    Clone,
    Copy,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Syntax {
    /// AT&T / GAS style, e.g. `$0x10`
    #[default]
    Att,
    /// Intel style, e.g. `0x10`
    Intel,
}
