use anyhow::{anyhow, bail, Context};
use glam::DVec2;
use measure_core::{
    start, CameraError, CameraRequest, CameraSource, CaptureOutcome, DrawCommand, DrawList,
    Measurer, MeasurerConfig, OrientationCell, SurfaceSize,
};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// Camera that opens or fails according to the command line.
struct ScriptedCamera {
    deny: bool,
}

impl CameraSource for ScriptedCamera {
    type Stream = ();

    async fn open(&self, request: &CameraRequest) -> Result<(), CameraError> {
        log::debug!("[camera] scripted open {:?}", request);
        if self.deny {
            Err(CameraError::PermissionDenied)
        } else {
            Ok(())
        }
    }
}

struct Args {
    variant: Option<String>,
    capture: Option<String>,
    width: f64,
    height: f64,
    deny: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        variant: None,
        capture: None,
        width: 1000.0,
        height: 800.0,
        deny: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = |name: &str| it.next().ok_or_else(|| anyhow!("{} needs a value", name));
        match flag.as_str() {
            "--variant" => args.variant = Some(value("--variant")?),
            "--capture" => args.capture = Some(value("--capture")?),
            "--width" => args.width = value("--width")?.parse().context("--width")?,
            "--height" => args.height = value("--height")?.parse().context("--height")?,
            "--deny" => args.deny = true,
            other => bail!("unknown argument: {}", other),
        }
    }
    Ok(args)
}

fn number(parts: &[&str], i: usize) -> anyhow::Result<f64> {
    parts
        .get(i)
        .ok_or_else(|| anyhow!("missing argument {}", i))?
        .parse()
        .with_context(|| format!("argument {} is not a number", i))
}

fn optional_number(parts: &[&str], i: usize) -> anyhow::Result<Option<f64>> {
    match parts.get(i) {
        None | Some(&"-") | Some(&"null") => Ok(None),
        Some(_) => number(parts, i).map(Some),
    }
}

fn print_status(out: &mut impl Write, m: &Measurer) -> io::Result<()> {
    writeln!(
        out,
        "{:?} | {} | Distance: {}",
        m.state(),
        m.instruction(),
        m.readout()
    )
}

fn print_draw_list(out: &mut impl Write, list: &DrawList) -> io::Result<()> {
    for cmd in &list.commands {
        match cmd {
            DrawCommand::Clear(s) => writeln!(out, "  clear {}x{}", s.width, s.height)?,
            DrawCommand::Crosshair {
                center,
                half_length,
                width,
            } => writeln!(
                out,
                "  crosshair ({:.1},{:.1}) ±{} w={}",
                center.x, center.y, half_length, width
            )?,
            DrawCommand::Marker { at, radius } => {
                writeln!(out, "  marker ({:.1},{:.1}) r={}", at.x, at.y, radius)?
            }
            DrawCommand::Line { from, to, width } => writeln!(
                out,
                "  line ({:.1},{:.1}) -> ({:.1},{:.1}) w={}",
                from.x, from.y, to.x, to.y, width
            )?,
        }
    }
    Ok(())
}

fn run_command(
    line: &str,
    measurer: &RefCell<Measurer>,
    camera: &ScriptedCamera,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&cmd) = parts.first() else {
        return Ok(());
    };
    match cmd {
        "start" => {
            if let Err(e) = pollster::block_on(start(measurer, camera)) {
                log::warn!("[camera] {}", e);
            }
        }
        "orient" => measurer.borrow().on_orientation_sample(
            optional_number(&parts, 1)?,
            optional_number(&parts, 2)?,
            optional_number(&parts, 3)?,
        ),
        "capture" => report(out, measurer.borrow_mut().capture_point())?,
        "tap" => {
            let at = DVec2::new(number(&parts, 1)?, number(&parts, 2)?);
            report(out, measurer.borrow_mut().on_tap(at))?;
        }
        "reset" => measurer.borrow_mut().reset(),
        "resize" => measurer
            .borrow_mut()
            .on_resize(SurfaceSize::new(number(&parts, 1)?, number(&parts, 2)?)),
        "tick" => {
            let m = measurer.borrow();
            if m.is_active() {
                let mut list = DrawList::new();
                m.render_tick(&mut list);
                print_draw_list(out, &list)?;
            } else {
                writeln!(out, "  (inactive, no frame)")?;
            }
        }
        "status" => {}
        other => bail!("unknown command: {}", other),
    }
    print_status(out, &measurer.borrow())?;
    Ok(())
}

fn report(out: &mut impl Write, outcome: CaptureOutcome) -> io::Result<()> {
    match outcome {
        CaptureOutcome::Ignored => writeln!(out, "  capture ignored"),
        CaptureOutcome::FirstPoint(p) => {
            writeln!(out, "  first point ({:.1},{:.1})", p.position.x, p.position.y)
        }
        CaptureOutcome::Measured(m) => writeln!(
            out,
            "  {:.1} px x {:.3} -> {} m",
            m.pixel_distance,
            m.factor,
            m.meters_text()
        ),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;
    let config = MeasurerConfig::from_names(args.variant.as_deref(), args.capture.as_deref())?;
    let measurer = RefCell::new(Measurer::new(
        config,
        OrientationCell::new(),
        SurfaceSize::new(args.width, args.height),
    ));
    let camera = ScriptedCamera { deny: args.deny };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_status(&mut out, &measurer.borrow())?;
    for (n, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(e) = run_command(line, &measurer, &camera, &mut out) {
            log::error!("line {}: {:#}", n + 1, e);
        }
    }
    Ok(())
}
