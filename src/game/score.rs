use crate::consts;
use std::time::Duration;

/// Score tracker.  Points accumulate into levels, and the level sets
/// the tick cadence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Score {
    /// Current level, starting at 1
    pub(super) level: u32,

    /// Points collected towards the next level, in
    /// `0..=`[`POINTS_PER_LEVEL`](consts::POINTS_PER_LEVEL)
    pub(super) points: u16,
}

impl Score {
    /// Create a new `Score` at level 1 with no points
    pub(super) fn new() -> Score {
        Score {
            level: 1,
            points: 0,
        }
    }

    /// Record a point for an eaten apple.  Past the threshold, the
    /// points reset and the next level begins.
    pub(super) fn add_point(&mut self) {
        self.points += 1;
        if self.points > consts::POINTS_PER_LEVEL {
            self.points = 0;
            self.next_level();
        }
    }

    /// Advance to the next level
    pub(super) fn next_level(&mut self) {
        self.level += 1;
    }

    pub(super) fn level(&self) -> u32 {
        self.level
    }

    /// Interval between ticks: `0.1 + 1 / (20 + level)` seconds.
    /// Strictly decreasing in the level, always above a tenth of a
    /// second.
    pub(super) fn delay(&self) -> Duration {
        Duration::from_secs_f64(0.1 + 1.0 / f64::from(20 + self.level))
    }

    /// One-line status banner for the top of the screen
    pub(super) fn banner(&self) -> String {
        format!(
            "level : {level} ┃ points: [{bar}{space:empty$}]",
            level = self.level,
            bar = consts::POINT_SYMBOL.repeat(usize::from(self.points)),
            space = "",
            empty = usize::from(consts::POINTS_PER_LEVEL - self.points),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ten_points_stay_on_level_one() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.add_point();
        }
        assert_eq!(
            score,
            Score {
                level: 1,
                points: 10,
            }
        );
    }

    #[test]
    fn eleventh_point_starts_level_two() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.add_point();
        }
        assert_eq!(
            score,
            Score {
                level: 2,
                points: 0,
            }
        );
    }

    #[test]
    fn first_level_delay() {
        assert_eq!(
            Score::new().delay(),
            Duration::from_secs_f64(0.1 + 1.0 / 21.0)
        );
    }

    #[test]
    fn delay_shrinks_towards_a_tenth_of_a_second() {
        let floor = Duration::from_secs_f64(0.1);
        let mut previous = Duration::MAX;
        for n in 1..=100 {
            let score = Score {
                level: n,
                points: 0,
            };
            let delay = score.delay();
            assert!(delay < previous, "delay should shrink at level {n}");
            assert!(delay > floor, "delay should stay above 100 ms at level {n}");
            previous = delay;
        }
    }

    #[rstest]
    #[case(Score { level: 1, points: 0 }, "level : 1 ┃ points: [          ]")]
    #[case(Score { level: 1, points: 3 }, "level : 1 ┃ points: [ǑǑǑ       ]")]
    #[case(Score { level: 12, points: 10 }, "level : 12 ┃ points: [ǑǑǑǑǑǑǑǑǑǑ]")]
    fn banner(#[case] score: Score, #[case] s: &str) {
        assert_eq!(score.banner(), s);
    }
}
