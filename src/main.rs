use std::{env, ffi::OsString, io, process::ExitCode};

use lib::{config::Config, highgui::HighGui, viewer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = env::args_os().collect();
    let config = Config::from_env();

    let mut backend = HighGui::new();
    let mut stdout = io::stdout().lock();

    ExitCode::from(viewer::execute(&args, &config, &mut backend, &mut stdout))
}
