//! Score constants shared by the search and the evaluation

/// Scores used by the search
pub struct OutcomeScore;

impl OutcomeScore {
    /// The searching player has a winning line
    pub const WIN: f64 = 1_000.0;
    /// The opponent has a winning line
    pub const LOSS: f64 = -1_000.0;
    /// Drawn, undecided, or no move available
    pub const DRAW: f64 = 0.0;
    /// Initial bound at every search node, beyond any reachable score
    pub const INFINITE: f64 = 1_000_000.0;

    /// Weight of the player's own occupancy in the heuristic
    pub const OWN_WEIGHT: f64 = 100.0;
    /// Weight of the opponent's occupancy in the heuristic
    pub const OPPONENT_WEIGHT: f64 = 80.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ordering() {
        assert!(OutcomeScore::LOSS < OutcomeScore::DRAW);
        assert!(OutcomeScore::DRAW < OutcomeScore::WIN);
        assert!(OutcomeScore::WIN < OutcomeScore::INFINITE);
        assert!(-OutcomeScore::INFINITE < OutcomeScore::LOSS);
    }

    #[test]
    fn test_heuristic_stays_inside_bounds() {
        // Occupancy terms are at most size/threshold, far below INFINITE
        let worst = OutcomeScore::OWN_WEIGHT * 10.0 + OutcomeScore::OPPONENT_WEIGHT * 10.0;
        assert!(worst < OutcomeScore::INFINITE);
    }
}
