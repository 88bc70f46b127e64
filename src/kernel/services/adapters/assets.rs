//! 收款码图片：按 image_ref 解析、解码、缩放并缓存
//!
//! 解析失败只影响弹窗里的图片区域，不会回流到选中状态。

use image::imageops::FilterType;
use image::GenericImageView;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// 弹窗中图片的最大像素尺寸（一个字符单元 = 1x2 像素）
pub const MAX_CODE_WIDTH: u32 = 48;
pub const MAX_CODE_HEIGHT: u32 = 48;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    pub width: u32,
    pub height: u32,
    /// 行优先的 RGB 像素
    pub pixels: Vec<[u8; 3]>,
}

impl PixelImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// 半块字符渲染所需的行数
    pub fn cell_rows(&self) -> u16 {
        self.height.div_ceil(2) as u16
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentCode {
    Ready(PixelImage),
    Missing,
    DecodeFailed,
}

pub struct AssetService {
    root: PathBuf,
    cache: FxHashMap<String, PaymentCode>,
}

impl AssetService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// "/5.png" → `<root>/5.png`
    pub fn resolve_path(&self, image_ref: &str) -> PathBuf {
        let relative = image_ref.trim_start_matches(['/', '\\']);
        self.root.join(relative)
    }

    pub fn get(&self, image_ref: &str) -> Option<&PaymentCode> {
        self.cache.get(image_ref)
    }

    pub fn load(&mut self, image_ref: &str) -> &PaymentCode {
        if !self.cache.contains_key(image_ref) {
            let path = self.resolve_path(image_ref);
            let code = load_payment_code(&path);
            self.cache.insert(image_ref.to_string(), code);
        }
        &self.cache[image_ref]
    }
}

fn load_payment_code(path: &Path) -> PaymentCode {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "payment code asset not found");
            return PaymentCode::Missing;
        }
    };

    match decode_pixels(&bytes, MAX_CODE_WIDTH, MAX_CODE_HEIGHT) {
        Ok(image) => {
            tracing::debug!(
                path = %path.display(),
                width = image.width,
                height = image.height,
                "payment code loaded"
            );
            PaymentCode::Ready(image)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "payment code decode failed");
            PaymentCode::DecodeFailed
        }
    }
}

pub fn decode_pixels(bytes: &[u8], max_width: u32, max_height: u32) -> Result<PixelImage, String> {
    let decoded = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let (orig_w, orig_h) = decoded.dimensions();
    let resized = if orig_w > max_width || orig_h > max_height {
        // 二维码需要锐利的边缘，不用插值滤波
        decoded.resize(max_width, max_height, FilterType::Nearest)
    } else {
        decoded
    };
    let rgb = resized.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PixelImage {
        width,
        height,
        pixels: rgb.pixels().map(|p| p.0).collect(),
    })
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/assets.rs"]
mod tests;
