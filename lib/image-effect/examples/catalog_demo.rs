/// Catalog demo
/// Renders every operation at a few intensities on a generated gradient

use image::{Rgb, RgbImage};
use image_effect::{Catalog, Intensity};
use std::path::Path;

fn test_image() -> RgbImage {
    RgbImage::from_fn(400, 300, |x, y| {
        let r = (x * 255 / 400) as u8;
        let g = (y * 255 / 300) as u8;
        let b = ((x + y) * 255 / 700) as u8;
        Rgb([r, g, b])
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = test_image();
    img.save(output_dir.join("original.png"))?;

    let catalog = Catalog::standard()?;
    for op in catalog.entries() {
        for value in [0.5, 1.0, 2.5] {
            let intensity = Intensity::new(value)?;
            let out = op.apply(&img, intensity)?;

            let filename = format!(
                "{}_{}.png",
                op.name().to_lowercase().replace(' ', "_"),
                value
            );
            out.save(output_dir.join(&filename))?;
            println!("✓ {} ({}) -> tmp/{}", op, op.describe(intensity), filename);
        }
    }

    Ok(())
}
