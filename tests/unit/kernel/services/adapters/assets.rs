use super::*;
use image::{Rgb, RgbImage};
use tempfile::tempdir;

fn checkerboard(size: u32) -> RgbImage {
    RgbImage::from_fn(size, size, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

#[test]
fn resolve_path_strips_leading_slash() {
    let service = AssetService::new("/srv/public");
    assert_eq!(
        service.resolve_path("/5.png"),
        PathBuf::from("/srv/public/5.png")
    );
    assert_eq!(
        service.resolve_path("xx.png"),
        PathBuf::from("/srv/public/xx.png")
    );
}

#[test]
fn missing_asset_is_cached_as_missing() {
    let dir = tempdir().unwrap();
    let mut service = AssetService::new(dir.path());

    assert!(service.get("/5.png").is_none());
    assert_eq!(service.load("/5.png"), &PaymentCode::Missing);
    assert_eq!(service.get("/5.png"), Some(&PaymentCode::Missing));
}

#[test]
fn undecodable_asset_reports_decode_failure() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("10.png"), b"definitely not a png").unwrap();
    let mut service = AssetService::new(dir.path());

    assert_eq!(service.load("/10.png"), &PaymentCode::DecodeFailed);
}

#[test]
fn small_png_is_loaded_at_native_size() {
    let dir = tempdir().unwrap();
    checkerboard(4).save(dir.path().join("20.png")).unwrap();
    let mut service = AssetService::new(dir.path());

    let PaymentCode::Ready(image) = service.load("/20.png") else {
        panic!("expected decoded image");
    };
    assert_eq!((image.width, image.height), (4, 4));
    assert_eq!(image.pixel(0, 0), Some([0, 0, 0]));
    assert_eq!(image.pixel(1, 0), Some([255, 255, 255]));
    assert_eq!(image.pixel(4, 0), None);
    assert_eq!(image.cell_rows(), 2);
}

#[test]
fn large_image_is_downscaled_to_fit() {
    let img = checkerboard(200);
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();

    let decoded = decode_pixels(&bytes, MAX_CODE_WIDTH, MAX_CODE_HEIGHT).unwrap();
    assert!(decoded.width <= MAX_CODE_WIDTH);
    assert!(decoded.height <= MAX_CODE_HEIGHT);
    assert_eq!(
        decoded.pixels.len(),
        (decoded.width * decoded.height) as usize
    );
}
