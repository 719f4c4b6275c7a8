//! Desktop simulator for the LT070ME05000 panel driver.
//!
//! Binds the driver to a host that logs every supply, line, DSI packet and
//! delay, then walks the panel through a full power cycle.

mod host;

use std::process::ExitCode;

use lt070me05000::{Builder, DisplayMode, Panel, driver};

use host::{Faults, SimBus};

const USAGE: &str = "\
Usage: lt070me05000-sim [OPTIONS]

Options:
  --missing <LINE>       Leave a control line unwired (vcc, reset, enable, pwm); repeatable
  --fail-at <N>          Fail the N-th DSI write (1-based)
  --symmetric-rollback   Switch the supplies off when bring-up fails
  --no-backlight         Bind without a backlight
  -h, --help             Print this help";

struct Options {
    faults: Faults,
    symmetric_rollback: bool,
}

fn parse_args() -> Result<Option<Options>, String> {
    let mut faults = Faults::default();
    let mut symmetric_rollback = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--missing" => {
                let line = args.next().ok_or("--missing needs a line name")?;
                match line.as_str() {
                    "vcc" => faults.missing.push("vcc"),
                    "reset" => faults.missing.push("reset"),
                    "enable" => faults.missing.push("enable"),
                    "pwm" => faults.missing.push("pwm"),
                    other => return Err(format!("unknown line '{other}'")),
                }
            }
            "--fail-at" => {
                let n = args.next().ok_or("--fail-at needs a number")?;
                let n: usize = n.parse().map_err(|_| format!("invalid write index '{n}'"))?;
                if n == 0 {
                    return Err("write index starts at 1".into());
                }
                faults.fail_transfer_at = Some(n);
            }
            "--symmetric-rollback" => symmetric_rollback = true,
            "--no-backlight" => faults.no_backlight = true,
            "-h" | "--help" => return Ok(None),
            other => return Err(format!("unknown option '{other}'")),
        }
    }

    Ok(Some(Options {
        faults,
        symmetric_rollback,
    }))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    let options = match parse_args() {
        Ok(Some(options)) => options,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[SIM] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let bus = SimBus::new(options.faults);
    let mut device = bus.device();
    let mut host = bus.host();
    let config = Builder::new()
        .rollback_regulators(options.symmetric_rollback)
        .build();

    let compatible = driver::OF_MATCH[0];
    log::info!("[SIM] binding {} to {}", driver::DRIVER_NAME, compatible);

    let mut panel = driver::probe(bus.dsi(), &mut device, &mut host, bus.delay(), config)?;

    let mut modes: Vec<DisplayMode> = Vec::new();
    let count = panel.get_modes(&mut modes)?;
    for mode in &modes {
        log::info!(
            "[SIM] mode {}: {} kHz, h {}/{}/{}/{}, v {}/{}/{}/{}, {} Hz",
            mode.name,
            mode.clock,
            mode.hdisplay,
            mode.hsync_start,
            mode.hsync_end,
            mode.htotal,
            mode.vdisplay,
            mode.vsync_start,
            mode.vsync_end,
            mode.vtotal,
            mode.vrefresh
        );
    }
    log::info!("[SIM] {count} mode(s) reported");

    let result = cycle(&mut panel);

    let _resources = driver::remove(panel, &mut host);
    log::info!(
        "[SIM] {} DSI writes, {} ms of settle delays",
        bus.transfers(),
        bus.delayed_ms()
    );

    result
}

fn cycle<P>(panel: &mut P) -> Result<(), Box<dyn std::error::Error>>
where
    P: Panel,
    P::Error: std::error::Error + 'static,
{
    panel.prepare()?;
    panel.enable()?;
    log::info!("[SIM] panel on");
    panel.disable()?;
    panel.unprepare()?;
    log::info!("[SIM] panel off");
    Ok(())
}
