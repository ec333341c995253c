// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/solver_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains tests for the nonce search in the DUCO miner, located in
// the tests directory. It checks the search bound, determinism and the
// hashrate derived from a solution.
//
// Tree Location:
// - tests/solver_test.rs (solver tests)
// - Depends on: duco-miner, sha1

#[cfg(test)]
mod tests {
    use duco_miner::core::solver::{attempt_bound, sha1_with_nonce, HashSolver};
    use duco_miner::core::types::Solution;
    use sha1::{Digest, Sha1};
    use std::time::Duration;

    #[test]
    fn test_known_vector_abc0() {
        let target: [u8; 20] = Sha1::digest(b"abc0").into();
        let solution = HashSolver::solve("abc", &target, 1).expect("abc0 is nonce 0");
        assert_eq!(solution.nonce, 0);
        assert!(solution.hashrate() > 0.0);
    }

    #[test]
    fn test_never_returns_nonce_above_bound() {
        for difficulty in 0..5u64 {
            let bound = attempt_bound(difficulty);
            assert_eq!(bound, difficulty * 100);

            let at_bound = sha1_with_nonce("bound", bound);
            let found = HashSolver::solve("bound", &at_bound, difficulty).map(|s| s.nonce);
            assert_eq!(found, Some(bound), "difficulty {}", difficulty);

            let past_bound = sha1_with_nonce("bound", bound + 1);
            assert!(HashSolver::solve("bound", &past_bound, difficulty).is_none(), "difficulty {}", difficulty);
        }
    }

    #[test]
    fn test_returns_first_match() {
        let target = sha1_with_nonce("first", 250);
        let solution = HashSolver::solve("first", &target, 10).unwrap();
        assert_eq!(solution.nonce, 250);
    }

    #[test]
    fn test_all_zero_target_is_exhausted() {
        assert!(HashSolver::solve("zero", &[0u8; 20], 20).is_none());
    }

    #[test]
    fn test_hashrate_never_divides_by_zero() {
        let solution = Solution { nonce: 4, elapsed: Duration::ZERO };
        assert!(solution.hashrate().is_finite());
        assert_eq!(solution.hashrate(), 5.0 / 0.001);
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Replaces the SHA3x triple-hash tests with nonce search tests.
