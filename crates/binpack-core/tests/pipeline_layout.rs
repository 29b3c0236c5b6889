use binpack_core::export::to_json;
use binpack_core::prelude::*;

fn squares() -> Vec<(String, u32, u32)> {
    vec![
        ("a".into(), 32, 32),
        ("b".into(), 32, 32),
        ("c".into(), 32, 32),
        ("d".into(), 32, 32),
        ("e".into(), 64, 64),
    ]
}

fn disjoint_pages<K>(layout: &Layout<K>) -> bool {
    for p in &layout.pages {
        for i in 0..p.frames.len() {
            for j in (i + 1)..p.frames.len() {
                if p.frames[i].frame.intersects(&p.frames[j].frame) {
                    return false;
                }
            }
        }
    }
    true
}

#[test]
fn multibin_layout_groups_frames_by_bin() {
    let cfg = PackerConfig::builder()
        .with_dimensions(64, 64)
        .family(AlgorithmFamily::MultiBin)
        .build();
    let layout = pack_layout(squares(), cfg).expect("pack");

    assert_eq!(layout.pages.len(), 2);
    let keys0: Vec<&str> = layout.pages[0].frames.iter().map(|f| f.key.as_str()).collect();
    let keys1: Vec<&str> = layout.pages[1].frames.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys0, vec!["e"]);
    assert_eq!(keys1, vec!["a", "b", "c", "d"]);
    assert!(disjoint_pages(&layout));

    let stats = layout.stats();
    assert_eq!(stats.num_pages, 2);
    assert_eq!(stats.num_frames, 5);
    assert_eq!(stats.used_frame_area, 4 * 32 * 32 + 64 * 64);
    assert_eq!(stats.total_page_area, 2 * 64 * 64);
    assert!((stats.occupancy - 1.0).abs() < 1e-9);
    assert_eq!(stats.wasted_area(), 0);
    assert!(stats.summary().contains("Pages: 2"));
}

#[test]
fn single_bin_layout_fails_when_batch_overflows() {
    let cfg = PackerConfig::builder()
        .with_dimensions(64, 64)
        .family(AlgorithmFamily::Guillotine)
        .build();
    let result = pack_layout(squares(), cfg);
    assert!(matches!(result, Err(BinPackError::BinTooSmall { .. })));
}

#[test]
fn canvas_layout_fills_one_page() {
    let cfg = PackerConfig::builder()
        .with_dimensions(64, 64)
        .family(AlgorithmFamily::Canvas)
        .build();
    let items: Vec<(String, u32, u32)> = squares().into_iter().take(4).collect();
    let layout = pack_layout(items, cfg).expect("pack");
    assert_eq!(layout.pages.len(), 1);
    assert_eq!(layout.frame_count(), 4);
    let frames: Vec<(&str, Rect)> = layout.pages[0]
        .frames
        .iter()
        .map(|f| (f.key.as_str(), f.frame))
        .collect();
    assert_eq!(
        frames,
        vec![
            ("a", Rect::new(0, 0, 32, 32)),
            ("b", Rect::new(32, 0, 32, 32)),
            ("c", Rect::new(0, 32, 32, 32)),
            ("d", Rect::new(32, 32, 32, 32)),
        ]
    );
}

#[test]
fn canvas_layout_reports_items_too_large() {
    let cfg = PackerConfig::builder()
        .with_dimensions(16, 16)
        .family(AlgorithmFamily::Canvas)
        .build();
    let result = pack_layout(vec![("ok", 8, 8), ("huge", 32, 8)], cfg);
    match result {
        Err(BinPackError::OutOfSpace { placed, total }) => {
            assert_eq!(placed, 1);
            assert_eq!(total, 2);
        }
        other => panic!("expected OutOfSpace, got {:?}", other.map(|l| l.pages.len())),
    }
}

#[test]
fn canvas_layout_rejects_near_max_sizes() {
    let cfg = PackerConfig::builder()
        .with_dimensions(16, 16)
        .family(AlgorithmFamily::Canvas)
        .build();
    let result = pack_layout(vec![("a", 8, 8), ("b", u32::MAX, 4)], cfg);
    assert!(matches!(
        result,
        Err(BinPackError::OutOfSpace { placed: 1, total: 2 })
    ));
}

#[test]
fn rotated_items_are_placed_with_swapped_size() {
    for family in [AlgorithmFamily::Guillotine, AlgorithmFamily::Canvas] {
        let cfg = PackerConfig::builder()
            .with_dimensions(30, 10)
            .family(family)
            .build();
        let item = LayoutItem {
            key: "tall",
            w: 10,
            h: 30,
            rotate: true,
        };
        let layout = pack_layout_items(vec![item], cfg).expect("fits once rotated");
        let frame = &layout.pages[0].frames[0];
        assert!(frame.rotated);
        assert_eq!(frame.frame, Rect::new(0, 0, 30, 10));
        assert_eq!(layout.stats().num_rotated, 1);
    }
}

#[test]
fn empty_input_is_rejected() {
    let result = pack_layout(Vec::<(String, u32, u32)>::new(), PackerConfig::default());
    assert!(matches!(result, Err(BinPackError::Empty)));
}

#[test]
fn zero_sized_config_is_rejected() {
    let cfg = PackerConfig::builder().with_dimensions(0, 64).build();
    let result = pack_layout(vec![("a", 1, 1)], cfg);
    assert!(matches!(
        result,
        Err(BinPackError::InvalidDimensions { width: 0, height: 64 })
    ));
}

#[test]
fn independent_batches_pack_separately() {
    let cfg = PackerConfig::builder().with_dimensions(10, 10).build();
    let batches = vec![
        vec![(1u32, 10, 10), (2, 10, 10)],
        vec![(3u32, 5, 5)],
        vec![(4u32, 50, 50)],
    ];
    let results = pack_layouts(batches, &cfg);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().pages.len(), 2);
    assert_eq!(results[1].as_ref().unwrap().pages.len(), 1);
    assert!(results[2].is_err());
}

#[test]
fn json_export_lists_pages_and_meta() {
    let cfg = PackerConfig::builder().with_dimensions(64, 64).build();
    let layout = pack_layout(squares(), cfg).unwrap();
    let v = to_json(&layout);
    assert_eq!(v["pages"].as_array().unwrap().len(), 2);
    assert_eq!(v["pages"][0]["frames"][0]["key"], "e");
    assert_eq!(v["pages"][0]["frames"][0]["frame"]["w"], 64);
    assert_eq!(v["meta"]["family"], "multibin");
    assert_eq!(v["meta"]["size"]["w"], 64);
}
