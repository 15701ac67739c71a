//!
//! Generate the full benchmark suite: one DIMACS file per
//! (size, ratio, density, generator) combination.
//!
use bipgen::generate::{hilo, rope, zipf, GenerateError};
use bipgen::instance::Instance;
use clap::Parser;
use itertools::iproduct;
use log::{info, warn};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Parser, Debug)]
#[clap(author, about)]
struct Opts {
    /// Directory the generated .in files are written into
    #[clap(short, long, default_value = ".")]
    out_dir: std::path::PathBuf,
    /// Seed of the pseudo-random source
    #[clap(short, long, default_value = "0")]
    seed: u64,
}

#[derive(Clone, Copy, Debug)]
enum Method {
    ZipF,
    HiLo,
    Rope,
}

impl Method {
    fn name(&self) -> &'static str {
        match self {
            Method::ZipF => "zipf",
            Method::HiLo => "hilo",
            Method::Rope => "rope",
        }
    }
    fn run<R: Rng>(
        &self,
        n_left: usize,
        n_right: usize,
        density: usize,
        rng: &mut R,
    ) -> Result<Instance, GenerateError> {
        match self {
            Method::ZipF => zipf::generate(n_left, n_right, density, rng),
            Method::HiLo => Ok(hilo::generate(n_left, n_right, density, rng)),
            Method::Rope => rope::generate(n_left, n_right, density, rng),
        }
    }
}

const METHODS: [Method; 3] = [Method::ZipF, Method::HiLo, Method::Rope];

fn main() -> std::io::Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(opts.seed);

    for (n, ratio, density) in iproduct!([20000usize, 30000, 40000], [5usize, 1000], [2usize, 10]) {
        let n_left = n / (ratio + 1);
        let n_right = n - n_left;
        for method in METHODS.iter() {
            let filename = format!(
                "nodes-{}-ratio-{}-density-{}-{}.in",
                n,
                ratio,
                density,
                method.name()
            );
            match method.run(n_left, n_right, density, &mut rng) {
                Ok(instance) => {
                    let path = opts.out_dir.join(&filename);
                    info!("writing {} ({})", path.display(), instance);
                    instance.to_dimacs_file(&mut rng, &path)?;
                }
                Err(err) => {
                    warn!("skipping {}: {}", filename, err);
                }
            }
        }
    }
    Ok(())
}
