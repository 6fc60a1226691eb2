use shader_typegen::sink::{CheckSink, DirectorySink};
use shader_typegen::{Generator, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(StructOpt)]
#[structopt(
    name = "shader-typegen",
    usage = "shader-typegen [FLAGS] [OPTIONS] [FILTER]..."
)]
struct Opt {
    /// Compare the output directory against freshly generated headers instead of writing them.
    #[structopt(long)]
    check: bool,

    /// Directory the headers are written to.
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    out_dir: PathBuf,

    /// Only generate headers whose name contains one of these filters.
    #[structopt(name = "FILTER")]
    filters: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opt = Opt::from_args();
    match run(&opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(opt: &Opt) -> Result<()> {
    let generator = opt
        .filters
        .iter()
        .fold(Generator::builtin()?, |generator, filter| {
            generator.only(filter.as_str())
        });
    tracing::debug!(
        types = generator.catalog().types().len(),
        out_dir = %opt.out_dir.display(),
        "loaded type catalog"
    );

    if opt.check {
        let mut sink = CheckSink::new(&opt.out_dir);
        generator.write(&mut sink)?;
        sink.finish()
    } else {
        generator.write(&mut DirectorySink::new(&opt.out_dir))
    }
}
