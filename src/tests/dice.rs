use crate::{MeasureOption, ProbabilityMeasure, Ratio};
use hmath::BigInt;
use indexmap::IndexMap;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn r(numer: i64, denom: i64) -> Ratio {
    Ratio::new(numer, denom).unwrap()
}

fn two_dice() -> ProbabilityMeasure<(u8, u8)> {
    let mut weights = IndexMap::new();

    for a in 1..=6 {
        for b in 1..=6 {
            weights.insert((a, b), Ratio::one());
        }
    }

    ProbabilityMeasure::new(weights)
}

// the distribution of `a + b`, built by adding up the weights of `two_dice`
fn sum_of_two_dice() -> ProbabilityMeasure<u8> {
    let mut weights: IndexMap<u8, Ratio> = IndexMap::new();

    for ((a, b), weight) in two_dice().iter() {
        let entry = weights.entry(a + b).or_insert_with(Ratio::zero);
        *entry = entry.plus(weight);
    }

    ProbabilityMeasure::new(weights)
}

#[test]
fn two_dice_test() {
    let dice = two_dice();

    assert_eq!(dice.len(), 36);
    assert!(dice.probability_at(&(3, 4)).unwrap().is_equal_to(&r(1, 36)));
    assert!(dice.probability_where(|(a, b), _| a + b == 7).unwrap().is_equal_to(&r(1, 6)));
    assert!(dice.probability_where(|(a, b), _| a == b).unwrap().is_equal_to(&r(1, 6)));

    // P(a + b = 8 | a is even) = P({(2, 6), (4, 4), (6, 2)}) / P(a is even) = (3/36) / (18/36)
    let first_is_even = dice.relative_where(|(a, _), _| a % 2 == 0);
    assert!(first_is_even.probability_where(|(a, b), _| a + b == 8).unwrap().is_equal_to(&r(1, 6)));
}

#[test]
fn sum_of_two_dice_test() {
    let sums = sum_of_two_dice();
    let samples = vec![
        (2, r(1, 36)),
        (3, r(2, 36)),
        (7, r(6, 36)),
        (11, r(2, 36)),
        (12, r(1, 36)),
    ];

    assert_eq!(sums.len(), 11);
    assert_eq!(sums.sample_points().cloned().collect::<Vec<_>>(), (2..=12).collect::<Vec<u8>>());

    for (sum, expected) in samples.into_iter() {
        assert!(sums.probability_at(&sum).unwrap().is_equal_to(&expected));
    }

    // the cumulative distribution of 2d6
    let cumulative = sums.cumulative_distribution().unwrap();
    let expected = [1, 3, 6, 10, 15, 21, 26, 30, 33, 35, 36].iter().map(
        |n| r(*n, 36)
    ).collect::<Vec<_>>();

    assert_eq!(cumulative, expected);
}

#[test]
fn sampling_two_dice_test() {
    let sums = sum_of_two_dice();
    let samples = vec![
        (r(0, 1), 2),
        (r(1, 36), 2),
        (r(2, 36), 3),
        (r(21, 36), 7),
        (r(22, 36), 8),
        (r(1, 1), 12),
    ];

    for (random_value, expected) in samples.into_iter() {
        assert_eq!(*sums.sampling_from(&random_value).unwrap(), expected);
        assert_eq!(*sums.sampling_from_with(&random_value, &MeasureOption::linear_scan()).unwrap(), expected);
    }
}

#[test]
fn seeded_game_is_reproducible() {
    let sums = sum_of_two_dice();
    let play = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);

        (0..100).map(
            |_| *sums.sample_with(&mut rng).unwrap()
        ).collect::<Vec<u8>>()
    };

    assert_eq!(play(7), play(7));
    assert!(play(7).iter().all(|n| (2..=12).contains(n)));
}

#[test]
fn huge_weights_test() {
    // weights like 10^50 and 2 * 10^50 are fine: there's no overflow
    let big = BigInt::from_string(&format!("1{}", "0".repeat(50))).unwrap();
    let bigger = big.mul_bi(&BigInt::from(2i64));
    let m = vec![
        ("small", Ratio::from_big_ints(big.clone(), BigInt::from(1i64)).unwrap()),
        ("large", Ratio::from_big_ints(bigger, BigInt::from(1i64)).unwrap()),
        ("tiny", Ratio::from_big_ints(BigInt::from(1i64), big).unwrap()),
    ].into_iter().collect::<ProbabilityMeasure<&str>>();

    let small_or_large = m.relative_where(|s, _| *s != "tiny");

    assert!(small_or_large.probability_at(&"small").unwrap().is_equal_to(&r(1, 3)));
    assert!(m.probability_at(&"small").unwrap().is_less_than(&r(1, 3)));
    assert!(m.probability_at(&"tiny").unwrap().is_greater_than(&Ratio::zero()));
    assert!((m.probability_at(&"large").unwrap().approximate_value() - 2.0 / 3.0).abs() < 1e-12);
}
