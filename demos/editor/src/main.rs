use argh::FromArgs;
use std::{fmt, io::Write, path::PathBuf};

use pixedit::{
    imgproc::{histogram, Operation},
    store::ImageStore,
};

#[derive(FromArgs)]
/// Load an image, apply one edit and save the result
struct Args {
    /// path to the input image (.ppm, .png, .jpg or .bmp)
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// the edit to apply, e.g. blur, sharpen, sepia-tone, horizontal-flip or brighten
    #[argh(option, short = 'p')]
    op: String,

    /// the constant for the brighten edit
    #[argh(option, short = 'c')]
    constant: Option<i32>,

    /// path to the output image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// print the intensity histogram of the result
    #[argh(switch)]
    histogram: bool,
}

/// Forwards the store status lines to stdout.
struct Stdout(std::io::Stdout);

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let constant = args.constant.map(|c| c.to_string());
    let op_args: Vec<&str> = constant.iter().map(String::as_str).collect();
    let op = Operation::parse(&args.op, &op_args)?;

    let mut store = ImageStore::new();
    let mut sink = Stdout(std::io::stdout());

    store.load(&args.input, "input", &mut sink)?;
    store.apply(&op, "input", "output", &mut sink)?;
    store.save("output", &args.output, &mut sink)?;

    if args.histogram {
        let image = store.find("output")?;
        let hist = histogram::compute_histogram(image, histogram::HistogramChannel::Intensity);
        for (value, count) in hist.iter().enumerate().filter(|(_, c)| **c > 0) {
            println!("{value:3}: {count}");
        }
    }

    log::debug!("{op} done, store holds {:?}", store.names());

    Ok(())
}
