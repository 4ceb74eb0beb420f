//! Attack tables for move generation.
//!
//! Leaper attacks (knight, king, pawn) are precomputed per square. Sliding
//! attacks use Hyperbola Quintessence on files and diagonals and a small
//! occupancy lookup for ranks, where the byte-swap trick does not apply.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates

use once_cell::sync::Lazy;

use super::Color;

const FILE_A: u64 = 0x0101_0101_0101_0101;

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << (nr * 8 + nf);
            }
        }
        *slot = mask;
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_table(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_table(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

/// Squares attacked by a pawn of `[color]` standing on `[square]`
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

/// Line masks excluding the square itself: `[file, diagonal, anti-diagonal]`
static LINE_MASKS: Lazy<[[u64; 3]; 64]> = Lazy::new(|| {
    let mut masks = [[0u64; 3]; 64];
    for sq in 0..64 {
        let rank = (sq / 8) as isize;
        let file = (sq % 8) as isize;
        let mut line = [0u64; 3];
        for (slot, (dr, df)) in [(1, 0), (1, 1), (1, -1)].into_iter().enumerate() {
            for dir in [1, -1] {
                let mut r = rank + dr * dir;
                let mut f = file + df * dir;
                while (0..8).contains(&r) && (0..8).contains(&f) {
                    line[slot] |= 1u64 << (r * 8 + f);
                    r += dr * dir;
                    f += df * dir;
                }
            }
        }
        masks[sq] = line;
    }
    masks
});

/// Rank attack lookup: `[8 * inner_occupancy + file]`, relative to rank 1.
/// Inner occupancy is the 6 bits for files b-g; edge squares never block.
static RANK_ATTACKS: Lazy<[u64; 512]> = Lazy::new(|| {
    let mut attacks = [0u64; 512];
    for occ_6bit in 0..64 {
        for file in 0..8 {
            let mut attack = 0u64;
            for f in (file + 1)..8 {
                attack |= 1u64 << f;
                if (1..=6).contains(&f) && (occ_6bit & (1 << (f - 1))) != 0 {
                    break;
                }
            }
            for f in (0..file).rev() {
                attack |= 1u64 << f;
                if (1..=6).contains(&f) && (occ_6bit & (1 << (f - 1))) != 0 {
                    break;
                }
            }
            attacks[8 * occ_6bit + file] = attack;
        }
    }
    attacks
});

/// Hyperbola Quintessence along one line with at most one square per rank.
#[inline]
fn line_attacks(occupied: u64, mask: u64, square: usize) -> u64 {
    let piece_bit = 1u64 << square;
    let forward = occupied & mask;
    let reverse = forward.swap_bytes();
    let forward = forward.wrapping_sub(piece_bit);
    let reverse = reverse.wrapping_sub(piece_bit.swap_bytes());
    (forward ^ reverse.swap_bytes()) & mask
}

#[inline]
fn rank_attacks(occupied: u64, square: usize) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let occ_6bit = ((occupied >> (rank * 8 + 1)) & 63) as usize;
    RANK_ATTACKS[8 * occ_6bit + file] << (rank * 8)
}

/// Bishop attacks (diagonals only)
#[inline]
pub(crate) fn bishop_attacks(square: usize, occupancy: u64) -> u64 {
    let masks = &LINE_MASKS[square];
    line_attacks(occupancy, masks[1], square) | line_attacks(occupancy, masks[2], square)
}

/// Rook attacks (ranks and files only)
#[inline]
pub(crate) fn rook_attacks(square: usize, occupancy: u64) -> u64 {
    line_attacks(occupancy, LINE_MASKS[square][0], square) | rank_attacks(occupancy, square)
}

#[inline]
pub(crate) fn queen_attacks(square: usize, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[inline]
pub(crate) fn pawn_attacks(color: Color, square: usize) -> u64 {
    PAWN_ATTACKS[color.index()][square]
}
