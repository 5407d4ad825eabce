use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use log::info;
use ray_ellipsoid::common::*;

fn run() -> Result<(), Error> {
    let query = parse_args(env::args().skip(1))?;
    info!("direction: {}, offset: {}", query.direction, query.offset);

    let model = EllipsoidModel::EARTH;
    let d = solve(query.direction, query.offset, &model)?;
    let point = evaluate(query.offset, query.direction, d);
    info!("d = {d}, residual = {:e}", model.surface_residual(point));

    let mut stdout = io::stdout().lock();
    write_point(&mut stdout, point)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if let Error::Input(InputError::WrongArgCount { .. }) = err {
                eprintln!("{USAGE}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
