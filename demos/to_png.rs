use std::env::args;
use std::error::Error;
use std::fs::{read_to_string, write};
use std::time::Instant;
use png::Encoder;
use png::ColorType::Rgb;
use png::BitDepth::Eight;
use outline::*;

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let prefix = args().nth(1).ok_or("usage: to_png <prefix> (reads <prefix>.outline)")?;
	let src_name = format!("{}.outline", &prefix);
	let png_name = format!("{}.png", &prefix);

	let features = parse(&read_to_string(&src_name)?)?;
	let (w, h) = (400, 400);
	let mut canvas = Canvas::new(w, h);

	let now = Instant::now();
	canvas.draw_features(&features);
	log::info!("rendered {} feature(s) in {}us.", features.len(), now.elapsed().as_micros());

	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgb);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header()?;
		writer.write_image_data(canvas.as_bytes())?;
	}
	write(&png_name, &png_buf)?;
	Ok(())
}
