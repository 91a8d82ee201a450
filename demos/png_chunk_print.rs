use pngchunk::png::Png;

fn main() {
  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    match Png::from_png_bytes(&bytes) {
      Ok(png) => {
        for (n, record) in png.records.iter().enumerate() {
          println!("{n}: {record:?}");
        }
        match png.decode_raster_payload() {
          Ok(raw) => println!("inflated image data: {} bytes", raw.len()),
          Err(e) => println!("inflated image data: {e}"),
        }
      }
      Err(e) => println!("{e}"),
    }
  }
}
