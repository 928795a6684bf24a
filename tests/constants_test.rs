use std::thread;

use x64operand::{Constants, Imm, Imm8, Operand, OperandKind};

fn shift_encoding(count: Imm) -> &'static str {
    match count.kind() {
        OperandKind::One => "D1 /4",
        OperandKind::Imm8 | OperandKind::Zero | OperandKind::Three => "C1 /4 ib",
        _ => "invalid",
    }
}

#[test]
fn test_dispatch_on_constant_kind() {
    let by_one = Constants::lookup(1).unwrap_or(Imm::from(Imm8::from(1u8)));
    assert_eq!(shift_encoding(by_one), "D1 /4");
    assert_eq!(shift_encoding(Imm::from(Imm8::from(1u8))), "C1 /4 ib");
    assert_eq!(shift_encoding(Imm::from(Constants::three())), "C1 /4 ib");
}

#[test]
fn test_constants_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| (Constants::zero(), Constants::one(), Constants::three())))
        .collect();

    for handle in handles {
        let (zero, one, three) = handle.join().unwrap();
        assert_eq!(zero, Constants::zero());
        assert_eq!(one, Constants::one());
        assert_eq!(three, Constants::three());
        assert!(zero.check() && one.check() && three.check());
    }
}

#[test]
fn test_constants_view_as_byte() {
    let tests = vec![
        (Imm8::from(Constants::zero()), 0),
        (Imm8::from(Constants::one()), 1),
        (Imm8::from(Constants::three()), 3),
    ];

    for (imm8, expected) in tests {
        assert_eq!(imm8.value(), expected);
        assert!(imm8.check());
        assert_eq!(imm8.kind(), OperandKind::Imm8);
    }
}
