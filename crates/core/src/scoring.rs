//! Scoring module - pluggable score rules
//!
//! The engine reports every lock as a [`LockEvent`] and adds whatever the active
//! [`ScoringRule`] returns. Two rules ship with the crate:
//! - [`ClassicScoring`]: classic line table scaled by level, with combo and
//!   back-to-back bonuses and 2 points per hard-dropped row.
//! - [`NoScoring`]: never awards points.

use crate::types::{B2B_DENOMINATOR, B2B_NUMERATOR, COMBO_BASE, LINE_SCORES};

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LockEvent {
    /// Rows the piece fell during the hard drop
    pub drop_rows: u32,
    /// Rows cleared by this lock
    pub lines_cleared: u32,
}

/// Converts lock events into points
pub trait ScoringRule {
    /// Points to add for this lock
    fn on_lock(&mut self, event: &LockEvent) -> u32;
}

/// Awards nothing; the score stays at zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoScoring;

impl ScoringRule for NoScoring {
    fn on_lock(&mut self, _event: &LockEvent) -> u32 {
        0
    }
}

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Base points for the clear (includes B2B multiplier, excludes combo bonus).
    pub line_clear_score: u32,
    /// Combo bonus added on top of `line_clear_score`.
    pub combo_bonus: u32,
    pub total: u32,
    pub qualifies_for_b2b: bool,
    /// Whether a B2B multiplier was applied to this clear.
    pub b2b_applied: bool,
}

/// Classic line-clear scoring with combo and back-to-back bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicScoring {
    lines: u32,
    /// -1 when no combo chain is running
    combo: i32,
    back_to_back: bool,
}

impl Default for ClassicScoring {
    fn default() -> Self {
        Self {
            lines: 0,
            combo: -1,
            back_to_back: false,
        }
    }
}

impl ClassicScoring {
    pub fn level(&self) -> u32 {
        calculate_level(self.lines)
    }

    pub fn combo(&self) -> i32 {
        self.combo
    }

    pub fn back_to_back(&self) -> bool {
        self.back_to_back
    }
}

impl ScoringRule for ClassicScoring {
    fn on_lock(&mut self, event: &LockEvent) -> u32 {
        let drop_points = calculate_drop_score(event.drop_rows, true);

        if event.lines_cleared == 0 {
            self.combo = -1;
            return drop_points;
        }

        self.combo += 1;
        self.lines += event.lines_cleared;

        let result = calculate_score(
            event.lines_cleared as usize,
            self.level(),
            self.combo,
            self.back_to_back,
        );
        self.back_to_back = result.qualifies_for_b2b;

        drop_points.saturating_add(result.total)
    }
}

/// Calculate line clear score (Classic rules)
/// lines: number of lines cleared (1-4)
/// level: current level (0-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level + 1)
}

/// Calculate combo bonus.
///
/// - `-1`: no combo chain
/// - `0`: first clear in chain (no bonus)
/// - `1+`: bonus applies as `combo_base * combo_index`
pub fn calculate_combo_bonus(combo_index: i32) -> u32 {
    if combo_index <= 0 {
        return 0;
    }
    COMBO_BASE * (combo_index as u32)
}

/// Only a four-line clear qualifies for back-to-back
pub fn qualifies_for_b2b(lines: usize) -> bool {
    lines == 4
}

/// Apply the B2B multiplier (3/2) to a point value.
pub fn apply_b2b_multiplier(points: u32) -> u32 {
    points
        .saturating_mul(B2B_NUMERATOR)
        .saturating_div(B2B_DENOMINATOR)
}

/// Calculate complete score for a line clear.
///
/// B2B multiplies the base clear points; the combo bonus is added afterwards.
pub fn calculate_score(
    lines: usize,
    level: u32,
    combo_index: i32,
    previous_b2b: bool,
) -> ScoreResult {
    let qualifies_b2b = qualifies_for_b2b(lines);
    let base_points = calculate_line_score(lines, level);

    let b2b_applied = qualifies_b2b && previous_b2b;
    let line_clear_score = if b2b_applied {
        apply_b2b_multiplier(base_points)
    } else {
        base_points
    };

    let combo_bonus = calculate_combo_bonus(combo_index);
    let total = line_clear_score.saturating_add(combo_bonus);

    ScoreResult {
        line_clear_score,
        combo_bonus,
        total,
        qualifies_for_b2b: qualifies_b2b,
        b2b_applied,
    }
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(2)
    } else {
        cells
    }
}

/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear(lines: u32) -> LockEvent {
        LockEvent {
            drop_rows: 0,
            lines_cleared: lines,
        }
    }

    #[test]
    fn test_classic_line_scores() {
        assert_eq!(calculate_line_score(1, 0), 40);
        assert_eq!(calculate_line_score(2, 0), 100);
        assert_eq!(calculate_line_score(3, 0), 300);
        assert_eq!(calculate_line_score(4, 0), 1200);
        assert_eq!(calculate_line_score(4, 5), 1200 * 6);
        assert_eq!(calculate_line_score(5, 0), 0);
    }

    #[test]
    fn test_combo_bonus() {
        assert_eq!(calculate_combo_bonus(-1), 0);
        assert_eq!(calculate_combo_bonus(0), 0);
        assert_eq!(calculate_combo_bonus(1), 50);
        assert_eq!(calculate_combo_bonus(3), 150);
    }

    #[test]
    fn test_b2b_multiplier() {
        assert_eq!(apply_b2b_multiplier(0), 0);
        assert_eq!(apply_b2b_multiplier(1200), 1800);
    }

    #[test]
    fn test_full_score_calculation() {
        let result = calculate_score(1, 0, 1, false);
        assert_eq!(result.line_clear_score, 40);
        assert_eq!(result.combo_bonus, 50);
        assert_eq!(result.total, 90);

        let result = calculate_score(4, 0, 1, true);
        assert_eq!(result.line_clear_score, 1800);
        assert_eq!(result.total, 1850);
        assert!(result.b2b_applied);
    }

    #[test]
    fn test_classic_rule_single_then_tetrises() {
        let mut rule = ClassicScoring::default();

        assert_eq!(rule.on_lock(&clear(1)), 40);
        assert_eq!(rule.combo(), 0);

        // Second consecutive clear: combo 1, not yet back-to-back.
        assert_eq!(rule.on_lock(&clear(4)), 1200 + 50);
        assert!(rule.back_to_back());

        // Third: back-to-back tetris with combo 2.
        assert_eq!(rule.on_lock(&clear(4)), 1800 + 100);
    }

    #[test]
    fn test_classic_rule_non_clearing_lock_breaks_combo() {
        let mut rule = ClassicScoring::default();
        rule.on_lock(&clear(1));
        assert_eq!(rule.on_lock(&clear(0)), 0);
        assert_eq!(rule.combo(), -1);
        assert_eq!(rule.on_lock(&clear(1)), 40);
    }

    #[test]
    fn test_classic_rule_counts_hard_drop_rows() {
        let mut rule = ClassicScoring::default();
        let event = LockEvent {
            drop_rows: 18,
            lines_cleared: 0,
        };
        assert_eq!(rule.on_lock(&event), 36);
    }

    #[test]
    fn test_classic_rule_level_scaling() {
        let mut rule = ClassicScoring::default();
        for _ in 0..10 {
            rule.on_lock(&clear(1));
            rule.on_lock(&clear(0));
        }
        assert_eq!(rule.level(), 1);
        assert_eq!(rule.on_lock(&clear(1)), 80);
    }

    #[test]
    fn test_no_scoring() {
        let mut rule = NoScoring;
        assert_eq!(rule.on_lock(&clear(4)), 0);
    }
}
