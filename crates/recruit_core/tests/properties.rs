use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recruit_core::{candidates, partition, static_cvs, CvSelection};

#[test]
fn selection_holds_exactly_the_cvs_toggled_an_odd_number_of_times() {
    let cvs = static_cvs();
    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut selection = CvSelection::new();
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for _ in 0..64 {
            let cv = &cvs[rng.gen_range(0..cvs.len())];
            selection.toggle(cv);
            *counts.entry(cv.id.clone()).or_default() += 1;
        }

        let mut expected: Vec<_> = counts
            .into_iter()
            .filter(|(_, count)| count % 2 == 1)
            .map(|(id, _)| id)
            .collect();
        let mut actual: Vec<_> = selection.ids().map(str::to_string).collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected, "seed {seed}");
    }
}

#[test]
fn partition_is_exhaustive_and_disjoint() {
    let pool = candidates();
    let split = partition(&pool);

    assert_eq!(split.shortlisted.len() + split.not_shortlisted.len(), pool.len());
    for candidate in &pool {
        let in_short = split.shortlisted.iter().filter(|c| c.id == candidate.id).count();
        let in_rest = split.not_shortlisted.iter().filter(|c| c.id == candidate.id).count();
        assert_eq!(in_short + in_rest, 1, "candidate {}", candidate.id);
    }
}

#[test]
fn partition_is_recomputed_identically() {
    assert_eq!(partition(&candidates()), partition(&candidates()));
}
