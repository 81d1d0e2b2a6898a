//! Mask selection by penalty score
use crate::models::{BitMatrix, MaskPattern, ModuleMatrix};

const RULE1_BASE: u32 = 3;
const RULE2_BLOCK: u32 = 3;
const RULE3_PATTERN: u32 = 40;
const RULE4_STEP: u32 = 10;

/// Finder-like sequences penalised by rule 3
const FINDER_LIKE: [[bool; 11]; 2] = {
    const X: bool = true;
    const O: bool = false;
    [
        [X, O, X, X, X, O, X, O, O, O, O],
        [O, O, O, O, X, O, X, X, X, O, X],
    ]
};

/// Scores and applies the eight mask patterns
pub struct Masker;

impl Masker {
    /// Rule 1 for one line: `3 + (run - 5)` per run of five or more
    pub fn run_penalty(line: &[bool]) -> u32 {
        let mut score = 0;
        let mut run = 0usize;
        for (i, &bit) in line.iter().enumerate() {
            if i > 0 && bit == line[i - 1] {
                run += 1;
            } else {
                score += Self::run_score(run);
                run = 1;
            }
        }
        score + Self::run_score(run)
    }

    fn run_score(run: usize) -> u32 {
        if run >= 5 {
            RULE1_BASE + (run - 5) as u32
        } else {
            0
        }
    }

    /// Rule 3 for one line: 40 per finder-like window
    pub fn finder_penalty(line: &[bool]) -> u32 {
        let hits = line
            .windows(11)
            .filter(|w| FINDER_LIKE.iter().any(|p| p.as_slice() == *w))
            .count();
        RULE3_PATTERN * hits as u32
    }

    /// Rule 2: 3 per 2x2 same-colour block (overlaps counted)
    pub fn block_penalty(view: &BitMatrix) -> u32 {
        let mut score = 0;
        for y in 1..view.height() {
            for x in 1..view.width() {
                let c = view.get(x, y);
                if view.get(x - 1, y) == c && view.get(x, y - 1) == c && view.get(x - 1, y - 1) == c {
                    score += RULE2_BLOCK;
                }
            }
        }
        score
    }

    /// Rule 4: distance of the dark share from 50%, in 5% steps
    pub fn balance_penalty(view: &BitMatrix) -> u32 {
        let total = view.width() * view.height();
        if total == 0 {
            return 0;
        }
        let dark = view.count_dark() * 100;
        // Multiples of 5% either side of the exact percentage
        let floor5 = dark / (total * 5) * 5;
        let ceil5 = dark.div_ceil(total * 5) * 5;
        let steps = floor5.abs_diff(50).min(ceil5.abs_diff(50)) / 5;
        RULE4_STEP * steps as u32
    }

    /// Total penalty of the canvas under its active mask
    pub fn penalty_score(matrix: &ModuleMatrix) -> u32 {
        let view = matrix.to_bit_matrix();
        let mut score = 0;
        for y in 0..view.height() {
            let row: Vec<bool> = view.row(y).collect();
            score += Self::run_penalty(&row) + Self::finder_penalty(&row);
        }
        for x in 0..view.width() {
            let col: Vec<bool> = view.column(x).collect();
            score += Self::run_penalty(&col) + Self::finder_penalty(&col);
        }
        score + Self::block_penalty(&view) + Self::balance_penalty(&view)
    }

    /// Penalty of every mask, indexed by pattern number; leaves no mask active
    pub fn score_all(matrix: &mut ModuleMatrix) -> [u32; 8] {
        let mut scores = [0u32; 8];
        for (score, mask) in scores.iter_mut().zip(MaskPattern::ALL) {
            matrix.apply_mask(Some(mask));
            *score = Self::penalty_score(matrix);
        }
        matrix.apply_mask(None);
        scores
    }

    /// Lowest scoring mask; the first one wins a tie
    pub fn best_mask(matrix: &mut ModuleMatrix) -> MaskPattern {
        Self::lowest(&Self::score_all(matrix))
    }

    pub(crate) fn lowest(scores: &[u32; 8]) -> MaskPattern {
        let mut best = MaskPattern::Pattern0;
        let mut best_score = u32::MAX;
        for (mask, &score) in MaskPattern::ALL.into_iter().zip(scores) {
            if score < best_score {
                best = mask;
                best_score = score;
            }
        }
        best
    }

    /// Bake `mask` into the stored data bits
    pub fn commit(matrix: &mut ModuleMatrix, mask: MaskPattern) {
        matrix.apply_mask(None);
        matrix.xor_data_bits(mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Module;

    #[test]
    fn test_seven_dark_run_scores_five() {
        let row = [true, true, true, true, true, true, true, false, false, false];
        assert_eq!(Masker::run_penalty(&row), 5);
        assert_eq!(Masker::run_penalty(&[true; 5]), 3);
        assert_eq!(Masker::run_penalty(&[true, false, true, false]), 0);
    }

    #[test]
    fn test_seven_dark_run_on_canvas_row() {
        let mut matrix = ModuleMatrix::square(10);
        matrix.draw_hline(0, 0, 7, Module::FunctionDark).unwrap();
        let row: Vec<bool> = matrix.to_bit_matrix().row(0).collect();
        assert_eq!(Masker::run_penalty(&row), 5);

        // Function cells ignore the mask; (8, 0) flips but stays off the run
        matrix.apply_mask(Some(MaskPattern::Pattern0));
        let row: Vec<bool> = matrix.to_bit_matrix().row(0).collect();
        assert_eq!(&row[7..], &[false, true, false]);
        assert_eq!(Masker::run_penalty(&row), 5);
    }

    #[test]
    fn test_finder_like_pattern() {
        // 0000 1011101 0000 holds both orientations
        let mut line = vec![false; 4];
        line.extend_from_slice(&FINDER_LIKE[0]);
        assert_eq!(Masker::finder_penalty(&line), 80);
        assert_eq!(Masker::finder_penalty(&FINDER_LIKE[1]), 40);
        assert_eq!(Masker::finder_penalty(&[true; 11]), 0);
    }

    #[test]
    fn test_block_and_balance() {
        let dark = BitMatrix::from_fn(3, 3, |_, _| true);
        assert_eq!(Masker::block_penalty(&dark), 12);
        assert_eq!(Masker::balance_penalty(&dark), 100);

        let checker = BitMatrix::from_fn(4, 4, |x, y| (x + y) % 2 == 0);
        assert_eq!(Masker::block_penalty(&checker), 0);
        assert_eq!(Masker::balance_penalty(&checker), 0);

        // 42% dark sits between 40 and 45
        let mostly_light = BitMatrix::from_fn(10, 10, |x, y| y * 10 + x < 42);
        assert_eq!(Masker::balance_penalty(&mostly_light), 10);
    }

    #[test]
    fn test_blank_canvas_picks_mask_zero() {
        let mut matrix = ModuleMatrix::square(10);
        assert_eq!(Masker::best_mask(&mut matrix), MaskPattern::Pattern0);
        assert_eq!(Masker::best_mask(&mut matrix), MaskPattern::Pattern0);
        assert_eq!(matrix.active_mask(), None);
        matrix.apply_mask(Some(MaskPattern::Pattern0));
        assert_eq!(Masker::penalty_score(&matrix), 0);
    }

    #[test]
    fn test_ties_keep_first() {
        assert_eq!(Masker::lowest(&[9, 4, 4, 7, 4, 9, 9, 9]), MaskPattern::Pattern1);
        assert_eq!(Masker::lowest(&[1; 8]), MaskPattern::Pattern0);
    }

    #[test]
    fn test_commit_twice_restores_bits() {
        let mut matrix = ModuleMatrix::square(12);
        for y in 0..12isize {
            for x in 0..12isize {
                let module = if x < 3 {
                    Module::FunctionDark
                } else {
                    Module::DataBit((x * 7 + y * 3) % 5 == 0)
                };
                matrix.draw_pixel(x, y, module).unwrap();
            }
        }
        let before = matrix.to_bit_matrix();
        for mask in MaskPattern::ALL {
            Masker::commit(&mut matrix, mask);
            Masker::commit(&mut matrix, mask);
            assert_eq!(matrix.to_bit_matrix(), before);
        }
    }
}
