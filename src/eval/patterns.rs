//! Score constants shared by the evaluator and the search

/// Scores for completed and partial lines
pub struct PatternScore;

impl PatternScore {
    /// Completed line, and the base for win/loss scores in search
    pub const WIN: i32 = 100_000;

    /// Search bound. Never produced by a real position.
    pub const INF: i32 = i32::MAX;
}

/// Value of a line that only one side occupies: `own² - other²`.
///
/// Callers handle contested lines (both counts non-zero) before calling.
#[inline]
pub fn line_potential(own: usize, other: usize) -> i32 {
    let own = own as i32;
    let other = other as i32;
    own * own - other * other
}

/// Score for winning `depth` plies below the root reply; faster wins score higher.
#[inline]
pub fn win_score(depth: u8) -> i32 {
    PatternScore::WIN - depth as i32
}

/// Score for losing `depth` plies below the root reply; slower losses score higher.
#[inline]
pub fn loss_score(depth: u8) -> i32 {
    depth as i32 - PatternScore::WIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_potential_quadratic() {
        assert_eq!(line_potential(0, 0), 0);
        assert_eq!(line_potential(1, 0), 1);
        assert_eq!(line_potential(3, 0), 9);
        assert_eq!(line_potential(0, 2), -4);
    }

    #[test]
    fn test_win_loss_scores() {
        assert_eq!(win_score(0), 100_000);
        assert_eq!(win_score(3), 99_997);
        assert_eq!(loss_score(3), -99_997);
        assert!(win_score(1) > win_score(2), "faster wins are preferred");
        assert!(loss_score(2) > loss_score(1), "slower losses are preferred");
    }

    #[test]
    fn test_inf_bounds_every_score() {
        assert!(PatternScore::INF > PatternScore::WIN * 1_000);
        assert_eq!(-PatternScore::INF, i32::MIN + 1);
    }
}
