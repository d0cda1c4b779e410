use std::process::ExitCode;

use anyhow::{Context, Result};
use winit::event_loop::{ControlFlow, EventLoop};

use colorbars::app::App;
use colorbars::cli::{Cli, Invocation};
use colorbars::core::{RunError, StopSignal, FAILURE_EXIT_CODE};

fn run() -> Result<()> {
    let stop = StopSignal::new();
    stop.install_interrupt_handler()
        .context("Unable to install interrupt handler")?;

    let event_loop = EventLoop::new().context("Unable to connect to the display server")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(stop);
    event_loop.run_app(&mut app)?;

    app.finish()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Invocation::Usage(line) = Cli::invocation(std::env::args_os()) {
        println!("{line}");
        return ExitCode::SUCCESS;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            let code = err
                .downcast_ref::<RunError>()
                .map_or(FAILURE_EXIT_CODE, RunError::exit_code);
            ExitCode::from(code)
        }
    }
}
