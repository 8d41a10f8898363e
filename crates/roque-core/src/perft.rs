//! Perft (performance test) for move generation correctness verification.

use crate::game_state::GameState;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(state: &GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.all_legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        // Generated moves always pass make_move's own validation.
        if let Ok(child) = state.make_move(mv) {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Run perft with per-move breakdown.
///
/// Returns `(move, node_count)` pairs sorted by the move's text (`e2e4`).
pub fn divide(state: &GameState, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = state
        .all_legal_moves()
        .into_iter()
        .filter_map(|mv| {
            let child = state.make_move(mv).ok()?;
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            Some((mv.to_string(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
