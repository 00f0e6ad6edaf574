use crate::image_classifier::error::ClassifyError;
use crate::image_classifier::interface::{ImageTensor, INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};
use image::{imageops, DynamicImage};

pub fn load_image(path: &str) -> Result<DynamicImage, ClassifyError> {
    image::open(path).map_err(|source| ClassifyError::ImageLoad {
        path: path.to_string(),
        source,
    })
}

// Scale so the shorter side reaches the target, then center-crop the longer
// side. Aspect ratio is preserved up to the crop, never stretched.
fn fit_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (w, h) = (image.width() as f64, image.height() as f64);
    let scale = (width as f64 / w).max(height as f64 / h);
    let scaled_w = ((w * scale).round() as u32).max(width);
    let scaled_h = ((h * scale).round() as u32).max(height);

    let scaled = if (scaled_w, scaled_h) == (image.width(), image.height()) {
        image.clone()
    } else {
        image.resize_exact(scaled_w, scaled_h, imageops::FilterType::Lanczos3)
    };

    let x_offset = (scaled_w - width) / 2;
    let y_offset = (scaled_h - height) / 2;

    scaled.crop_imm(x_offset, y_offset, width, height)
}

pub fn image_to_tensor(image: &DynamicImage) -> ImageTensor {
    let fitted = fit_image(image, INPUT_WIDTH as u32, INPUT_HEIGHT as u32);
    let rgb = fitted.to_rgb8();

    let mut data = Vec::with_capacity(INPUT_HEIGHT * INPUT_WIDTH * INPUT_CHANNELS);
    for pixel in rgb.pixels() {
        for channel in 0..INPUT_CHANNELS {
            // The model was trained on inputs mapped from 0-255 to [-1, 1].
            data.push(pixel[channel] as f32 / 127.5 - 1.0);
        }
    }

    ImageTensor::from_nhwc(data)
}
