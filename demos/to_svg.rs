use std::env::args;
use std::error::Error;
use std::fs::{read_to_string, write};
use outline::*;

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let prefix = args().nth(1).ok_or("usage: to_svg <prefix> (reads <prefix>.outline)")?;
	let src_name = format!("{}.outline", &prefix);
	let svg_name = format!("{}.svg", &prefix);

	let features = parse(&read_to_string(&src_name)?)?;
	log::info!("exporting {} feature(s) to {}", features.len(), &svg_name);

	write(&svg_name, to_svg(&features))?;
	Ok(())
}
