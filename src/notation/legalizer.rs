//! Resolves partial [`Move`] descriptors against the legal moves.

use crate::chess::moves::{Move, MoveStatus};

/// Finds the legal move `candidate` refers to.
///
/// The legal moves are scanned in order and the first compatible one is
/// returned:
///
/// - A candidate with [`MoveStatus::StartSquareSpecified`] status (long
///   algebraic notation) needs the same end square and origin. If the
///   candidate names a promotion, it has to agree too.
/// - Otherwise, the candidate has to [`Move::matches`] the legal move. Castles
///   need nothing else. Each disambiguator set on the candidate (start rank,
///   start file, promotion) has to be equal to the legal move's one; unset
///   disambiguators do not constrain anything.
///
/// Returns [`None`] if no legal move is compatible.
#[must_use]
pub fn legalize(candidate: &Move, legal_moves: &[Move]) -> Option<Move> {
    let resolved = legal_moves
        .iter()
        .find(|legal| resolves_to(candidate, legal))
        .copied();
    match resolved {
        Some(legal) => tracing::trace!(%candidate, %legal, "resolved to legal move"),
        None => tracing::debug!(
            %candidate,
            status = ?candidate.status(),
            legal_moves = legal_moves.len(),
            "no legal move matches"
        ),
    }
    resolved
}

fn resolves_to(candidate: &Move, legal: &Move) -> bool {
    if candidate.status() == MoveStatus::StartSquareSpecified {
        return candidate.end() == legal.end()
            && candidate.start_rank() == legal.start_rank()
            && candidate.start_file() == legal.start_file()
            && constrains(candidate.promotion(), legal.promotion());
    }
    if !candidate.matches(legal) {
        return false;
    }
    if matches!(
        candidate.status(),
        MoveStatus::KingsideCastle | MoveStatus::QueensideCastle
    ) {
        return true;
    }
    constrains(candidate.start_rank(), legal.start_rank())
        && constrains(candidate.start_file(), legal.start_file())
        && constrains(candidate.promotion(), legal.promotion())
}

/// A disambiguator set on the candidate requires the same value on the legal
/// move.
fn constrains<T: PartialEq>(required: Option<T>, actual: Option<T>) -> bool {
    match required {
        Some(_) => required == actual,
        None => true,
    }
}
