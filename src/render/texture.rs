use std::path::Path;

use crate::cat::{SHEET_COLS, SHEET_ROWS, SPRITE_SIZE};

/// Bundled default sprite sheet — 8x4 grid of 32px cells.
/// Placeholder art; point the CLI arg / DESKCAT_SPRITE at a real sheet with
/// the same cell layout to reskin the cat.
const BUNDLED_SHEET: &[u8] = include_bytes!("../../assets/kitty.png");

/// Decoded RGBA sprite sheet, CPU side. Kept separate from the GPU upload so
/// decoding stays testable without a device.
pub struct SheetImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl SheetImage {
    /// Load a sheet from `path`, or the bundled sheet when none is given.
    ///
    /// Any failure degrades to a fully transparent 1x1 image: the cat turns
    /// invisible but the app keeps running. No error is surfaced beyond a
    /// warning.
    pub fn load(path: Option<&Path>) -> Self {
        match Self::decode(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();

                let expected_w = SHEET_COLS * SPRITE_SIZE as u32;
                let expected_h = SHEET_ROWS * SPRITE_SIZE as u32;
                if (width, height) != (expected_w, expected_h) {
                    log::warn!(
                        "sprite sheet is {width}x{height}, expected {expected_w}x{expected_h}; \
                         cells will sample oddly"
                    );
                }

                Self {
                    rgba: rgba.into_raw(),
                    width,
                    height,
                }
            }
            Err(e) => {
                log::warn!("sprite sheet unavailable ({e}); the cat will be invisible");
                Self::transparent()
            }
        }
    }

    fn decode(path: Option<&Path>) -> image::ImageResult<image::DynamicImage> {
        match path {
            Some(p) => image::open(p),
            None => image::load_from_memory(BUNDLED_SHEET),
        }
    }

    fn transparent() -> Self {
        Self {
            rgba: vec![0; 4],
            width: 1,
            height: 1,
        }
    }
}

/// GPU resources for the sprite sheet.
pub struct SpriteTexture {
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl SpriteTexture {
    /// Upload the decoded sheet. Nearest filtering keeps the pixel art crisp.
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, sheet: &SheetImage) -> Self {
        let size = wgpu::Extent3d {
            width: sheet.width,
            height: sheet.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("sprite_sheet"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &sheet.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * sheet.width),
                rows_per_image: Some(sheet.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self { view, sampler }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sheet_decodes_to_the_expected_grid() {
        let sheet = SheetImage::load(None);
        assert_eq!(sheet.width, SHEET_COLS * SPRITE_SIZE as u32);
        assert_eq!(sheet.height, SHEET_ROWS * SPRITE_SIZE as u32);
        assert_eq!(sheet.rgba.len(), (sheet.width * sheet.height * 4) as usize);
    }

    #[test]
    fn missing_file_degrades_to_transparent() {
        let sheet = SheetImage::load(Some(Path::new("/no/such/sheet.png")));
        assert_eq!((sheet.width, sheet.height), (1, 1));
        assert_eq!(sheet.rgba, vec![0, 0, 0, 0]);
    }
}
