// main.rs - CLI entrypoint for testconvu.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use testconvu::cli::parse_args;
use testconvu::diagnostics::DiagnosticSink;
use testconvu::emit::Transcoder;

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let mut transcoder = Transcoder::new(cli.options(), DiagnosticSink::stderr());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = transcoder.transcode_file(&cli.input, &mut out);
    transcoder.finish();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("testconvu: {}: {}", cli.input.display(), err);
            ExitCode::FAILURE
        }
    }
}
