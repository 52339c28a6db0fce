use image::{Rgb, RgbImage, Rgba, RgbaImage};
use rand::Rng;

pub fn rand_rgba(rng: &mut rand::rngs::ThreadRng) -> Rgba<u8> {
    Rgba([rng.random(), rng.random(), rng.random(), 255])
}

/// Random opaque RGBA image, any content is fine for pipeline tests
pub fn gen_random_image(width: u32, height: u32) -> RgbaImage {
    let mut rng = rand::rng();
    RgbaImage::from_fn(width, height, |_, _| rand_rgba(&mut rng))
}

/// Random image without an alpha channel, for format conversion tests
pub fn gen_random_rgb_image(width: u32, height: u32) -> RgbImage {
    let mut rng = rand::rng();
    RgbImage::from_fn(width, height, |_, _| {
        Rgb([rng.random(), rng.random(), rng.random()])
    })
}
