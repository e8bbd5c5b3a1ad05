use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Scales the shorter side to fit, then crops the center to `width` x `height`.
pub fn center_crop(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }

    image.resize_to_fill(width, height, imageops::FilterType::Triangle)
}

fn image_to_tensor(image: &DynamicImage) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    })
    .into_tensor()
}

pub fn center_crop_to_tensor(image: &DynamicImage, width: u32, height: u32) -> Tensor {
    let cropped = center_crop(image, width, height);
    image_to_tensor(&cropped)
}
