use super::*;

#[test]
fn window_centers_on_current() {
    assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
}

#[test]
fn window_sticks_to_start() {
    assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn window_sticks_to_end() {
    assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
}

#[test]
fn window_shrinks_to_total() {
    assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
}

#[test]
fn window_handles_empty_and_out_of_range() {
    assert_eq!(page_window(0, 0, 5), vec![1]);
    assert_eq!(page_window(42, 4, 5), vec![1, 2, 3, 4]);
}
