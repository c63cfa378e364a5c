use std::{ffi::OsString, io::Write, path::Path};

use crate::{
    backend::{Backend, Frame, Shape, Windows},
    config::{Config, PROGRAM_NAME},
    error::ShowError,
};

pub const PROMPT: &str = "Press any key to close the image window...";

/// Loads `args[1]`, shows it until a key is pressed and reports its shape.
///
/// `args` is the full argument list, program name included. Nothing is
/// decoded or displayed unless there is exactly one argument naming an
/// existing file. Arguments need not be UTF-8; messages show them lossily.
pub fn run<B, W>(
    args: &[OsString],
    config: &Config,
    backend: &mut B,
    out: &mut W,
) -> Result<Shape, ShowError>
where
    B: Backend,
    W: Write,
{
    let raw_path = match args {
        [_, path] => path,
        _ => {
            let program = args
                .first()
                .map_or_else(|| PROGRAM_NAME.to_string(), |p| p.to_string_lossy().into_owned());
            return Err(ShowError::Usage { program });
        }
    };

    let path = raw_path.to_string_lossy();
    if !Path::new(raw_path).exists() {
        return Err(ShowError::NotFound(path.into_owned()));
    }

    // The decoder takes `&str`, so a non-UTF-8 name cannot reach it.
    let Some(utf8_path) = raw_path.to_str() else {
        return Err(ShowError::Decode(path.into_owned()));
    };

    log::debug!("decoding {path}");
    let Some(image) = backend.decode(utf8_path)? else {
        return Err(ShowError::Decode(path.into_owned()));
    };

    let shape = image.shape();
    #[cfg(feature = "debug")]
    dbg!(&shape);

    let mut windows = Windows::open(backend, &config.window_name, &image)?;
    log::debug!("showing {path} in {:?}", config.window_name);

    writeln!(out, "{PROMPT}")?;
    out.flush()?;

    let key = windows.wait_key(config.wait)?;
    match key {
        Some(key) => log::debug!("key {key} pressed"),
        None => log::debug!("no key within {:?}", config.wait),
    }
    windows.close()?;

    writeln!(out, "Successfully loaded and displayed image: {path}")?;
    writeln!(out, "Image dimensions: {shape}")?;

    Ok(shape)
}

/// Runs once and turns the outcome into a process exit code. User-facing
/// failures are written to `out`; internal ones go to stderr.
pub fn execute<B, W>(args: &[OsString], config: &Config, backend: &mut B, out: &mut W) -> u8
where
    B: Backend,
    W: Write,
{
    let err = match run(args, config, backend, out) {
        Ok(shape) => {
            log::debug!("done, shape {shape}");
            return 0;
        }
        Err(err) => err,
    };

    if err.is_user_facing() {
        if let Err(write_err) = writeln!(out, "{err}") {
            log::error!("could not report {err:?}: {write_err}");
        }
    } else {
        log::error!("{err:?}");
        eprintln!("{err}");
    }

    err.exit_code()
}
