use portfolio_allocation::engines::evaluation::evaluate;
use portfolio_allocation::engines::generation::{Candidate, Genome, SearchBounds};
use portfolio_allocation::types::{Allocation, Dataset, Share, Target};
use std::sync::Arc;

fn half_half() -> Allocation {
    [("part1".to_string(), 50.0), ("part2".to_string(), 50.0)].into()
}

fn share(code: &str, owned: i64, price: f64) -> Share {
    Share {
        code: code.to_string(),
        owned,
        price,
        curr_ratio: 1.0,
        allocations: [("domain1".to_string(), half_half())].into(),
    }
}

/// Two shares priced 10 and 5, both split 50/50, target split 50/50
fn fifty_fifty() -> Dataset {
    Dataset::new(
        vec![Target {
            name: "domain1".to_string(),
            allocation: half_half(),
        }],
        vec![share("share1", 0, 10.0), share("share2", 0, 5.0)],
    )
}

#[test]
fn test_exact_match_costs_nothing() {
    let dataset = fifty_fifty();

    // 500 * 10 + 1000 * 5 = 10000, both buckets at 5000
    assert_eq!(evaluate(&[500, 1000], &dataset, 10_000.0), 0.0);
}

#[test]
fn test_overshoot_is_squared_again() {
    let dataset = fifty_fifty();

    // total 10040: 40^2 off the target, > target so ^2 again
    assert_eq!(evaluate(&[502, 1004], &dataset, 10_000.0), 40.0 * 40.0 * 40.0 * 40.0);
    assert_eq!(evaluate(&[502, 1004], &dataset, 10_000.0), 2_560_000.0);
}

#[test]
fn test_undershoot_is_plain_squared_error() {
    let dataset = fifty_fifty();

    // total 9960: 40^2 off the target, buckets still balanced
    assert_eq!(evaluate(&[498, 996], &dataset, 10_000.0), 1_600.0);
}

#[test]
fn test_cost_is_never_negative() {
    let dataset = fifty_fifty();
    let cases: [[i64; 2]; 6] = [[0, 0], [1, 0], [0, 1], [10_000, 3], [-5, 7], [999, 1]];

    for counts in cases {
        for target in [0.0, 1.0, 10_000.0, 1e9] {
            assert!(evaluate(&counts, &dataset, target) >= 0.0, "{:?} @ {}", counts, target);
        }
    }
}

#[test]
fn test_evaluate_is_deterministic() {
    let dataset = fifty_fifty();

    let first = evaluate(&[123, 456], &dataset, 7_777.0);
    let second = evaluate(&[123, 456], &dataset, 7_777.0);

    assert_eq!(first, second);
    assert_eq!(dataset, fifty_fifty());
}

#[test]
fn test_candidate_evaluates_with_its_bounds() {
    let bounds = SearchBounds {
        target_value: 10_000.0,
        max_shares: 0,
    };
    let exact = Candidate::new(Arc::new(fifty_fifty()), bounds, vec![500, 1000]).unwrap();
    let over = Candidate::new(Arc::new(fifty_fifty()), bounds, vec![502, 1004]).unwrap();

    assert_eq!(exact.evaluate(), 0.0);
    assert_eq!(over.evaluate(), 2_560_000.0);
}

#[test]
fn test_imbalanced_buckets_are_penalized() {
    let dataset = Dataset::new(
        vec![Target {
            name: "domain1".to_string(),
            allocation: half_half(),
        }],
        vec![
            Share {
                code: "all_part1".to_string(),
                owned: 0,
                price: 10.0,
                curr_ratio: 1.0,
                allocations: [("domain1".to_string(), Allocation::from([("part1".to_string(), 100.0)]))].into(),
            },
            share("split", 0, 5.0),
        ],
    );

    // total 10000 exactly, part1 = 5000 + 2500, part2 = 2500
    assert_eq!(evaluate(&[500, 1000], &dataset, 10_000.0), 2_500.0 * 2_500.0 * 2.0);
}
