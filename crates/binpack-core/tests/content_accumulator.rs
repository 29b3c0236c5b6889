use binpack_core::canvas::{Content, ContentAccumulator, Coord, Size};

fn item(id: u32, w: u32, h: u32) -> Content<u32> {
    Content::new(id, Size::new(w, h))
}

fn sizes(acc: &ContentAccumulator<u32>) -> Vec<(u32, u32)> {
    acc.contents()
        .iter()
        .map(|c| (c.size().width, c.size().height))
        .collect()
}

#[test]
fn sort_is_width_then_height_descending() {
    let mut acc: ContentAccumulator<u32> =
        vec![item(0, 10, 5), item(1, 20, 5), item(2, 10, 20)].into_iter().collect();
    acc.sort();
    assert_eq!(sizes(&acc), vec![(20, 5), (10, 20), (10, 5)]);
}

#[test]
fn sort_keeps_input_order_for_equal_sizes() {
    let mut acc = ContentAccumulator::new();
    acc += item(0, 8, 8);
    acc += item(1, 9, 1);
    acc += item(2, 8, 8);
    acc.sort();
    let ids: Vec<u32> = acc.contents().iter().map(|c| c.payload).collect();
    assert_eq!(ids, vec![1, 0, 2]);
}

#[test]
fn append_operators() {
    let mut acc = ContentAccumulator::new();
    acc += item(0, 1, 1);
    acc += vec![item(1, 2, 2), item(2, 3, 3)];
    let acc = acc + item(3, 4, 4);
    let acc = acc + vec![item(4, 5, 5)];
    assert_eq!(acc.len(), 5);
    let ids: Vec<u32> = acc.into_iter().map(|c| c.payload).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn extend_and_clear() {
    let mut acc = ContentAccumulator::new();
    acc.extend((0..4).map(|i| item(i, 1, 1)));
    acc.push(item(9, 1, 1));
    assert_eq!(acc.len(), 5);
    assert_eq!((&acc).into_iter().count(), 5);
    acc.clear();
    assert!(acc.is_empty());
}

#[test]
fn rotate_swaps_size_and_flips_flag() {
    let mut c = item(0, 10, 20);
    c.rotate();
    assert_eq!(c.size(), Size::new(20, 10));
    assert!(c.rotated());
    c.rotate();
    assert_eq!(c.size(), Size::new(10, 20));
    assert!(!c.rotated());
}

#[test]
fn extent_tracks_origin_and_size() {
    let mut c = item(0, 10, 20);
    c.set_origin(Coord::new(3, 4));
    assert_eq!(c.extent(), Coord::new(13, 24));
    c.set_size(Size::new(1, 1));
    assert_eq!(c.extent(), Coord::new(4, 5));
    c.rotate();
    assert_eq!(c.extent(), Coord::new(4, 5));
}
