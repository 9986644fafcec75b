use image::{Rgb, RgbImage};

use super::*;
use crate::pipeline::plan::ShotSpec;

fn glyphs() -> GlyphSet {
    let images: [DynamicImage; 10] = std::array::from_fn(|d| {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([d as u8 * 10 + 5, 0, 0])))
    });
    GlyphSet::from_images(images).unwrap()
}

fn plan(platforms: Vec<Platform>) -> ShotPlan {
    ShotPlan {
        platforms,
        shots: vec![
            ShotSpec {
                hour: 9,
                minute: 41,
                is_24h: false,
                name: None,
            },
            ShotSpec {
                hour: 23,
                minute: 59,
                is_24h: true,
                name: Some("late".to_string()),
            },
        ],
    }
}

#[test]
fn outputs_are_platform_major_in_plan_order() {
    let shots = compose_batch(
        &plan(vec![Platform::Emery, Platform::Aplite]),
        &glyphs(),
        BatchOpts::default(),
    )
    .unwrap();
    let keys: Vec<(Platform, &str)> = shots.iter().map(|s| (s.platform, s.name.as_str())).collect();
    assert_eq!(
        keys,
        vec![
            (Platform::Emery, "09-41-12h"),
            (Platform::Emery, "late"),
            (Platform::Aplite, "09-41-12h"),
            (Platform::Aplite, "late"),
        ]
    );
    assert_eq!(shots[0].image.dimensions(), (200, 228));
    assert_eq!(shots[2].image.dimensions(), (144, 168));
}

#[test]
fn shared_displays_reuse_one_render() {
    let shots = compose_batch(
        &plan(vec![Platform::Aplite, Platform::Basalt, Platform::Chalk]),
        &glyphs(),
        BatchOpts { threads: Some(2) },
    )
    .unwrap();
    assert!(Arc::ptr_eq(&shots[0].image, &shots[2].image));
    assert!(Arc::ptr_eq(&shots[1].image, &shots[3].image));
    assert!(!Arc::ptr_eq(&shots[0].image, &shots[4].image));
}

#[test]
fn parallel_matches_single_thread() {
    let p = ShotPlan::default();
    let a = compose_batch(&p, &glyphs(), BatchOpts { threads: Some(1) }).unwrap();
    let b = compose_batch(&p, &glyphs(), BatchOpts { threads: Some(4) }).unwrap();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.platform, y.platform);
        assert_eq!(x.name, y.name);
        assert_eq!(x.image.as_raw(), y.image.as_raw());
    }
}

#[test]
fn zero_threads_is_rejected() {
    let err = compose_batch(
        &ShotPlan::default(),
        &glyphs(),
        BatchOpts { threads: Some(0) },
    )
    .unwrap_err();
    assert!(matches!(err, WatchshotError::Validation(_)));
}

#[test]
fn output_path_layout() {
    let shot = RenderedShot {
        platform: Platform::Chalk,
        name: "09-41-12h".to_string(),
        image: Arc::new(RgbImage::new(1, 1)),
    };
    assert_eq!(
        shot.output_path(Path::new("out")),
        Path::new("out").join("chalk").join("09-41-12h.png")
    );
}

#[test]
fn crop_batch_reports_each_job() {
    let dir = PathBuf::from("target").join("crop_batch_unit");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let mut capture = RgbImage::from_pixel(300, 300, Rgb([230, 230, 230]));
    for y in 50..218 {
        for x in 70..214 {
            capture.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    save_png(&dir.join("dark.png"), &DynamicImage::ImageRgb8(capture)).unwrap();
    save_png(
        &dir.join("bright.png"),
        &DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 300, Rgb([255, 255, 255]))),
    )
    .unwrap();

    let jobs = vec![
        CropJob {
            input: dir.join("dark.png"),
            output: dir.join("out").join("dark.png"),
        },
        CropJob {
            input: dir.join("bright.png"),
            output: dir.join("out").join("bright.png"),
        },
        CropJob {
            input: dir.join("missing.png"),
            output: dir.join("out").join("missing.png"),
        },
    ];
    let target = TargetDims::new(144, 168).unwrap();
    let reports = crop_batch(
        &jobs,
        target,
        CropMode::Locate,
        &LocatorOpts::default(),
        BatchOpts::default(),
    )
    .unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(
        reports[0].as_ref().unwrap().method,
        Some(LocateMethod::Darkness)
    );
    assert_eq!(
        reports[1].as_ref().unwrap().method,
        Some(LocateMethod::CenterFallback)
    );
    assert!(reports[2].is_err());

    let out = load_image(&dir.join("out").join("dark.png")).unwrap();
    assert_eq!((out.width(), out.height()), (144, 168));
    assert!(out.to_rgb8().pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn crop_batch_center_mode_has_no_method() {
    let dir = PathBuf::from("target").join("crop_batch_center_unit");
    let _ = std::fs::remove_dir_all(&dir);
    let input = dir.join("in.png");
    save_png(
        &input,
        &DynamicImage::ImageRgb8(RgbImage::from_pixel(160, 180, Rgb([9, 9, 9]))),
    )
    .unwrap();

    let reports = crop_batch(
        &[CropJob {
            input: input.clone(),
            output: input.clone(),
        }],
        TargetDims::new(144, 168).unwrap(),
        CropMode::Center,
        &LocatorOpts::default(),
        BatchOpts::default(),
    )
    .unwrap();
    assert_eq!(reports[0].as_ref().unwrap().method, None);
    let out = load_image(&input).unwrap();
    assert_eq!((out.width(), out.height()), (144, 168));
}
