use coollex::{
    AnyGenerator, BigRegister, CoolLex, Error, LendingIterator, LinkedList, Register32,
    Register64, Representation,
};
use proptest::prelude::*;
use rstest::rstest;

fn all_combinations<G: CoolLex>(generator: &mut G) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    let mut combinations = generator.combinations();
    while let Some(elements) = combinations.next() {
        all.push(elements.collect());
    }
    all
}

fn all_of(representation: Representation, n: usize, k: usize) -> Vec<Vec<usize>> {
    all_combinations(&mut AnyGenerator::new(representation, n, k).unwrap())
}

/// An arbitrary `(n, k)` with `k <= n` and few enough combinations to enumerate quickly.
fn arb_size() -> impl Strategy<Value = (usize, usize)> {
    (0usize..=14).prop_flat_map(|n| (Just(n), 0..=n))
}

/// Checks everything that does not depend on the order of the combinations.
fn check_combinations(all: &[Vec<usize>], n: usize, k: usize) {
    let expected = if k == 0 {
        0
    } else {
        exact::binomial(n as u64, k as u64).unwrap() as usize
    };
    assert_eq!(all.len(), expected, "C({n}, {k})");

    let mut occurrences = vec![0; n];
    for combination in all {
        assert_eq!(combination.len(), k);
        assert!(combination.windows(2).all(|w| w[0] < w[1]), "{combination:?}");
        assert!(combination.iter().all(|&i| i < n));
        for &i in combination {
            occurrences[i] += 1;
        }
    }
    if k > 0 {
        let per_element = exact::binomial(n as u64 - 1, k as u64 - 1).unwrap() as usize;
        assert!(occurrences.iter().all(|&c| c == per_element), "{occurrences:?}");
    }

    let mut sorted = all.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), all.len(), "duplicate combination");
}

proptest! {
    #[test]
    fn test_representations_agree((n, k) in arb_size()) {
        let expected = all_of(Representation::List, n, k);
        check_combinations(&expected, n, k);
        for representation in [Representation::Narrow, Representation::Wide, Representation::Big] {
            prop_assert_eq!(&all_of(representation, n, k), &expected, "{}", representation);
        }
    }
}

#[rstest]
#[case(1, 1)]
#[case(9, 9)]
#[case(15, 7)]
#[case(20, 10)]
fn test_boundaries(#[case] n: usize, #[case] k: usize) {
    for representation in Representation::ALL {
        check_combinations(&all_of(representation, n, k), n, k);
    }
}

#[test]
fn test_fifteen_choose_seven() {
    let all = all_of(Representation::Narrow, 15, 7);
    assert_eq!(all.len(), 6435);
    for i in 0..15 {
        assert_eq!(all.iter().filter(|c| c.contains(&i)).count(), 3003);
    }
    assert_eq!(all[0], (0..7).collect::<Vec<_>>());
}

#[test]
fn test_first_and_last() {
    // The sequence starts with the lowest k elements and ends with the lowest k - 1 elements and n - 1.
    for representation in Representation::ALL {
        let all = all_of(representation, 10, 4);
        assert_eq!(all.first().unwrap(), &vec![0, 1, 2, 3]);
        assert_eq!(all.last().unwrap(), &vec![0, 1, 2, 9]);
    }
}

#[test]
fn test_k_zero() {
    for representation in Representation::ALL {
        let mut generator = AnyGenerator::new(representation, 9, 0).unwrap();
        assert!(!generator.has_more());
        assert_eq!(generator.combinations().count(), 0);
    }
}

#[test]
fn test_errors() {
    let invalid = Error::InvalidArguments { n: 5, k: 6 };
    assert_eq!(Register32::new(5, 6), Err(invalid));
    assert_eq!(Register64::new(5, 6), Err(invalid));
    assert_eq!(BigRegister::new(5, 6), Err(invalid));
    assert_eq!(LinkedList::new(5, 6), Err(invalid));

    assert!(Register32::new(31, 4).is_ok());
    assert_eq!(
        Register32::new(32, 4),
        Err(Error::RegisterOverflow { n: 32, bits: 32 })
    );
    assert!(Register64::new(63, 4).is_ok());
    assert_eq!(
        Register64::new(64, 4),
        Err(Error::RegisterOverflow { n: 64, bits: 64 })
    );
}

#[test]
fn test_lotto() {
    let mut generator = LinkedList::new(49, 6).unwrap();
    assert_eq!(generator.combinations().count(), 13_983_816);
}

#[test]
fn test_large_register_matches_list() {
    let big = all_combinations(&mut BigRegister::new(100, 2).unwrap());
    let list = all_combinations(&mut LinkedList::new(100, 2).unwrap());
    assert_eq!(big, list);
    check_combinations(&big, 100, 2);
}
