//! Turn order.

use super::board::Symbol;

/// Symbol of the next move from history position `cursor`.
///
/// The cursor equals the number of moves already played at that point,
/// so X moves at every even cursor and O at every odd one.
///
/// # Example
///
/// ```rust
/// use tictac::core::{whose_turn, Symbol};
///
/// assert_eq!(whose_turn(0), Symbol::X);
/// assert_eq!(whose_turn(1), Symbol::O);
/// assert_eq!(whose_turn(2), Symbol::X);
/// ```
pub fn whose_turn(cursor: usize) -> Symbol {
    if cursor % 2 == 0 {
        Symbol::X
    } else {
        Symbol::O
    }
}

/// Symbol that produced the snapshot at `index`, `None` for the initial one.
pub fn placed_at(index: usize) -> Option<Symbol> {
    index.checked_sub(1).map(whose_turn)
}
