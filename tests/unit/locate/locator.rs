use image::{GrayImage, Luma, Rgb, RgbImage};

use super::*;

fn dims(w: u32, h: u32) -> TargetDims {
    TargetDims::new(w, h).unwrap()
}

fn capture_with_display(w: u32, h: u32, display: Rect) -> DynamicImage {
    let mut img = RgbImage::from_pixel(w, h, Rgb([220, 220, 225]));
    for y in display.top..display.bottom {
        for x in display.left..display.right {
            img.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    DynamicImage::ImageRgb8(img)
}

#[test]
fn darkness_pass_finds_exact_display() {
    let display = Rect::from_origin_size(60, 40, 144, 168).unwrap();
    let img = capture_with_display(264, 260, display);
    let located = locate_rect(&img, dims(144, 168), &LocatorOpts::default()).unwrap();
    assert_eq!(located.method, LocateMethod::Darkness);
    assert_eq!(located.rect, display);

    let out = locate_display(&img, dims(144, 168), &LocatorOpts::default()).unwrap();
    assert_eq!((out.width(), out.height()), (144, 168));
    assert!(out.to_rgb8().pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn bright_image_falls_back_to_center() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 200, Rgb([250, 250, 250])));
    let located = locate_rect(&img, dims(144, 168), &LocatorOpts::default()).unwrap();
    assert_eq!(located.method, LocateMethod::CenterFallback);
    assert_eq!(located.rect, Rect::new(28, 16, 172, 184).unwrap());
}

#[test]
fn crop_and_fit_keeps_pixel_format() {
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(300, 300, Luma([9])));
    let out = crop_and_fit(&img, Rect::new(0, 0, 144, 168).unwrap(), dims(144, 168)).unwrap();
    assert!(matches!(out, DynamicImage::ImageLuma8(_)));

    let resized = crop_and_fit(&img, Rect::new(0, 0, 72, 84).unwrap(), dims(144, 168)).unwrap();
    assert!(matches!(resized, DynamicImage::ImageLuma8(_)));
    assert_eq!((resized.width(), resized.height()), (144, 168));
}

#[test]
fn crop_and_fit_clamps_out_of_range_rect() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 100, Rgb([1, 2, 3])));
    let out = crop_and_fit(&img, Rect::new(50, 50, 400, 400).unwrap(), dims(20, 20)).unwrap();
    assert_eq!((out.width(), out.height()), (20, 20));
}

#[test]
fn empty_image_is_a_resample_error() {
    let img = DynamicImage::ImageRgb8(RgbImage::new(0, 10));
    let err = locate_display(&img, dims(144, 168), &LocatorOpts::default()).unwrap_err();
    assert!(matches!(err, WatchshotError::Resample(_)));
    assert!(center_crop(&img, dims(144, 168), &CenterSearchOpts::default()).is_err());
}

#[test]
fn opts_validation() {
    assert!(LocatorOpts::default().validate().is_ok());

    let mut bad = LocatorOpts::default();
    bad.darkness.row_fraction = 1.5;
    assert!(bad.validate().is_err());

    let mut bad = LocatorOpts::default();
    bad.search.stride = 0;
    assert!(bad.validate().is_err());

    let mut bad = LocatorOpts::default();
    bad.darkness.dark_threshold = f32::NAN;
    assert!(bad.validate().is_err());
}

#[test]
fn opts_from_path_merges_defaults() {
    let dir = std::path::PathBuf::from("target").join("locator_opts_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("locator.json");
    std::fs::write(&path, r#"{ "darkness": { "dark_threshold": 70 }, "search": { "radius": 8 } }"#)
        .unwrap();

    let opts = LocatorOpts::from_path(&path).unwrap();
    assert_eq!(opts.darkness.dark_threshold, 70.0);
    assert_eq!(opts.darkness.row_fraction, 0.3);
    assert_eq!(opts.search.radius, 8);
    assert_eq!(opts.search.stride, 5);

    std::fs::write(&path, r#"{ "search": { "stride": 0 } }"#).unwrap();
    assert!(LocatorOpts::from_path(&path).is_err());
}
