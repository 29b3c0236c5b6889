use binpack_core::canvas::{CanvasArray, Content, ContentAccumulator, Size};
use binpack_core::model::Rect;
use binpack_core::packer::{BinPacker, MultiBinPacker, Packer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_rects(seed: u64, count: usize, min: u32, max: u32) -> Vec<Rect> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Rect::with_size(rng.gen_range(min..=max), rng.gen_range(min..=max)))
        .collect()
}

#[test]
fn multi_bin_places_everything_without_overlap() {
    for seed in 0..8u64 {
        let inputs = random_rects(seed, 200, 1, 64);
        let mut p = MultiBinPacker::new(128, 128);
        let out = p.insert(&inputs).expect("every item fits an empty bin");
        assert_eq!(out.len(), inputs.len());

        let bounds = Rect::with_size(128, 128);
        for (i, a) in out.iter().enumerate() {
            assert_eq!(a.order, i);
            assert_eq!((a.rect.w, a.rect.h), (inputs[i].w, inputs[i].h));
            assert!(bounds.contains(&a.rect), "seed {}: {:?} out of bounds", seed, a);
            assert!(a.bin < p.bin_count());
            for b in out.iter().skip(i + 1) {
                if a.bin == b.bin {
                    assert!(!a.rect.intersects(&b.rect), "seed {}: {:?} / {:?}", seed, a, b);
                }
            }
        }
    }
}

#[test]
fn single_bin_keeps_order_and_sizes() {
    for seed in 0..8u64 {
        let inputs = random_rects(seed, 30, 1, 32);
        let mut p = BinPacker::new(512, 512);
        let out = p.insert(&inputs).expect("plenty of room");
        for (i, a) in out.iter().enumerate() {
            assert_eq!(a.order, i);
            assert_eq!(a.bin, 0);
            assert_eq!((a.rect.w, a.rect.h), (inputs[i].w, inputs[i].h));
            for b in out.iter().skip(i + 1) {
                assert!(!a.rect.intersects(&b.rect));
            }
        }
    }
}

#[test]
fn guillotine_is_deterministic() {
    let inputs = random_rects(42, 120, 4, 48);
    let mut a = MultiBinPacker::new(100, 100);
    let mut b = MultiBinPacker::new(100, 100);
    assert_eq!(a.insert(&inputs).unwrap(), b.insert(&inputs).unwrap());
}

#[test]
fn canvas_array_places_everything_once() {
    for seed in 0..6u64 {
        let mut acc = ContentAccumulator::new();
        for (i, r) in random_rects(seed, 150, 1, 48).into_iter().enumerate() {
            acc += Content::new(i, Size::new(r.w, r.h));
        }
        acc.sort();

        let mut array = CanvasArray::new(128, 128);
        let mut remainder = Vec::new();
        assert!(array.place(acc, &mut remainder), "seed {}", seed);

        let mut out = Vec::new();
        assert_eq!(array.collect(&mut out), 150);

        let mut seen = vec![false; 150];
        for (i, a) in out.iter().enumerate() {
            assert!(!seen[a.payload], "seed {}: item {} placed twice", seed, a.payload);
            seen[a.payload] = true;
            let e = a.extent();
            assert!(e.x <= 128 && e.y <= 128);
            assert!((a.canvas_index() as usize) < array.len());
            for b in out.iter().skip(i + 1) {
                if a.canvas_index() == b.canvas_index() {
                    assert!(!a.intersects(b), "seed {}: {:?} / {:?}", seed, a, b);
                }
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }
}
