//! Roll parsing and seeded evaluation

use rand::rngs::StdRng;
use rand::SeedableRng;
use tabletop::{parse_roll, Roll};

#[test]
fn test_parse_full_form() {
    let roll = Roll::parse("4d6H1+2").unwrap();
    assert_eq!(
        (roll.num(), roll.sides(), roll.drop_highest(), roll.drop_lowest(), roll.add()),
        (4, 6, 1, 0, 2)
    );
    assert_eq!(parse_roll(" 3d8L1-2 ").unwrap().to_string(), "3d8L1-2");
}

#[test]
fn test_degenerate_rolls_rejected() {
    assert!(Roll::with_modifiers(1, 6, 1, 0, 0).unwrap_err().is_invalid_argument());
    assert!(Roll::parse("3d6H2L1").unwrap_err().is_invalid_argument());
    assert!(Roll::parse("0d6").is_err());
    assert!(Roll::parse("d6").unwrap_err().is_parse());
}

#[test]
fn test_drop_lowest_trials() {
    let roll = Roll::with_modifiers(3, 6, 0, 1, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let value = roll.roll_with(&mut rng);
        assert_eq!(value.rolls().len(), 2);
        assert_eq!(value.dropped_low().len(), 1);
        assert!(value.dropped_high().is_empty());

        let kept: i64 = value.rolls().iter().map(|&r| i64::from(r)).sum();
        assert_eq!(value.value(), kept + i64::from(value.add()));
        assert!(value.rolls().iter().all(|&r| r >= value.dropped_low()[0]));
    }
}

#[test]
fn test_values_within_bounds() {
    let roll = Roll::parse("4d6H1L1-3").unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..500 {
        let value = roll.roll_with(&mut rng).value();
        assert!(value >= roll.min() && value <= roll.max(), "{} out of range", value);
    }
}

#[test]
fn test_same_seed_same_rolls() {
    let roll = Roll::parse("10d20").unwrap();
    let a = roll.roll_with(&mut StdRng::seed_from_u64(3));
    let b = roll.roll_with(&mut StdRng::seed_from_u64(3));
    assert_eq!(a.rolls(), b.rolls());
}

#[test]
fn test_default_generator() {
    let roll = Roll::new(2, 4).unwrap();
    for _ in 0..50 {
        let value = roll.roll().value();
        assert!((2..=8).contains(&value));
    }
}
