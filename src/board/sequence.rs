/// Moves the element at `from` so that it sits at `to` in the resulting
/// sequence (remove, then insert). `to` is clamped to the last index; an
/// out-of-range `from` leaves the sequence untouched.
///
/// Returns whether the order changed.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let to = to.min(items.len() - 1);
    if from == to {
        return false;
    }

    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}
