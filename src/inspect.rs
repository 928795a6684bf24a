use std::fmt::Write;

use anyhow::{Context, Result};
use clap::Args;
use strum::IntoEnumIterator;

use crate::{
    imm::{Constants, Imm, ImmWidth},
    operand::{Operand, OperandFamily, OperandKind, Syntax},
};

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[clap(help = "Immediate literal, e.g. `-1`, `0xff`, `$0xc8` or `0b101`")]
    #[clap(allow_hyphen_values = true)]
    pub literal: String,
    #[clap(short, long)]
    #[clap(help = "Only inspect one width: 8, 16, 32 or 64")]
    pub width: Option<ImmWidth>,
    #[clap(short, long, default_value = "att")]
    #[clap(help = "Syntax used to render the immediate: att or intel")]
    pub syntax: Syntax,
}

#[derive(Args, Debug)]
pub struct KindsArgs {
    #[clap(short, long)]
    #[clap(help = "Only list kinds of one family, e.g. immediate or memory")]
    pub family: Option<OperandFamily>,
}

/// Describe how a literal fits each immediate width.
///
/// E.g. for `-1` in AT&T syntax:
///
/// ```text
/// imm8   $0xffffffffffffffff  ok
/// imm16  $0xffffffffffffffff  ok
/// ...
/// ```
#[tracing::instrument]
pub fn inspect_report(args: &InspectArgs) -> Result<String> {
    let widths: Vec<ImmWidth> = match args.width {
        Some(width) => vec![width],
        None => ImmWidth::iter().collect(),
    };

    let mut report = String::new();
    for width in widths {
        let imm = Imm::parse(&args.literal, width)
            .with_context(|| format!("Unable to parse '{}'", args.literal))?;
        let verdict = if imm.check() { "ok" } else { "out of range" };
        writeln!(
            report,
            "{:<6} {:<20} {}",
            imm.kind(),
            imm.to_text(args.syntax),
            verdict
        )?;
    }

    if args.width.is_none() {
        let payload = Imm::parse(&args.literal, ImmWidth::Qword)?.value();
        writeln!(report, "narrowest: {}", Imm::narrowest(payload).kind())?;
        if let Some(constant) = Constants::lookup(payload) {
            writeln!(report, "constant: {}", constant.kind())?;
        }
    }

    Ok(report)
}

pub fn inspect(args: &InspectArgs) -> Result<()> {
    print!("{}", inspect_report(args)?);
    Ok(())
}

/// List the operand kind taxonomy as `tag  name  family` lines.
#[tracing::instrument]
pub fn kinds_report(args: &KindsArgs) -> Result<String> {
    let mut report = String::new();
    for kind in OperandKind::iter() {
        if args.family.is_some_and(|family| family != kind.family()) {
            continue;
        }
        writeln!(report, "{:>3}  {:<18} {}", kind.tag(), kind, kind.family())?;
    }
    Ok(report)
}

pub fn kinds(args: &KindsArgs) -> Result<()> {
    print!("{}", kinds_report(args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_inspect_single_width() -> Result<()> {
        let tests = vec![
            ("0x1ff", ImmWidth::Byte, Syntax::Att, "imm8   $0x1ff               out of range\n"),
            ("0x1ff", ImmWidth::Word, Syntax::Intel, "imm16  0x1ff                ok\n"),
            ("-1", ImmWidth::Byte, Syntax::Intel, "imm8   0xffffffffffffffff   ok\n"),
        ];

        for (literal, width, syntax, expected) in tests {
            let args = InspectArgs {
                literal: literal.to_owned(),
                width: Some(width),
                syntax,
            };
            assert_eq!(inspect_report(&args)?, expected);
        }
        Ok(())
    }

    #[test]
    fn test_inspect_all_widths() -> Result<()> {
        let args = InspectArgs {
            literal: "1".to_owned(),
            width: None,
            syntax: Syntax::Att,
        };
        let report = inspect_report(&args)?;
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("imm8"));
        assert!(lines[3].starts_with("imm64"));
        assert_eq!(lines[4], "narrowest: imm8");
        assert_eq!(lines[5], "constant: one");
        Ok(())
    }

    #[test]
    fn test_inspect_invalid_literal() {
        let args = InspectArgs {
            literal: "rax".to_owned(),
            width: None,
            syntax: Syntax::Att,
        };
        assert!(inspect_report(&args).is_err());
    }

    #[test]
    fn test_kinds_report() -> Result<()> {
        let args = KindsArgs {
            family: Some(OperandFamily::Immediate),
        };
        let report = kinds_report(&args)?;
        let names: Vec<&str> = report
            .lines()
            .filter_map(|line| line.split_whitespace().nth(1))
            .collect();
        assert_eq!(
            names,
            vec!["imm", "imm8", "imm16", "imm32", "imm64", "zero", "one", "three"]
        );

        let all = kinds_report(&KindsArgs { family: None })?;
        assert_eq!(all.lines().count(), OperandKind::iter().count());
        Ok(())
    }
}
