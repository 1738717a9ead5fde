//! Application session: menu dispatch and the interactive driver.

use std::io::Write;

use crate::error::{PlotError, Result};
use crate::input::{parse_optional, parse_required, LineSource};
use crate::menu::{self, MenuChoice};
use crate::plot;
use crate::presets::{DEMO_CURVE, PRESETS};
use crate::quadratic::{CurveSpec, Domain, DEFAULT_DOMAIN};
use crate::render::Renderer;

/// Printed when the session is interrupted.
pub const CLOSING_MESSAGE: &str = "Program sonlandırıldı!";

/// Printed when an interactive entry is not a number.
pub const INVALID_NUMBER_MESSAGE: &str = "Hata: Lütfen geçerli sayılar girin!";

/// Printed when the entered x range is empty or reversed.
pub const INVALID_DOMAIN_MESSAGE: &str =
    "Hata: X ekseni minimum değeri maksimum değerden küçük olmalı!";

/// One plotting session.
///
/// Reads answers from `L`, draws through `R` and writes prompts and messages
/// to `W`.
#[derive(Debug)]
pub struct App<L, R, W> {
    lines: L,
    renderer: R,
    out: W,
    samples: usize,
}

impl<L: LineSource, R: Renderer, W: Write> App<L, R, W> {
    /// Create a session sampling each curve at `samples` points.
    pub fn new(lines: L, renderer: R, out: W, samples: usize) -> Self {
        Self {
            lines,
            renderer,
            out,
            samples,
        }
    }

    /// Show the menu, run the selected driver, and turn an interrupt anywhere
    /// along the way into the closing message.
    pub fn run(&mut self) -> Result<()> {
        match self.dispatch() {
            Err(PlotError::Interrupted) => {
                tracing::info!("session interrupted");
                writeln!(self.out, "\n{}", CLOSING_MESSAGE)?;
                self.out.flush()?;
                Ok(())
            }
            other => other,
        }
    }

    fn dispatch(&mut self) -> Result<()> {
        menu::write_menu(&mut self.out)?;
        let selection = self.prompt(menu::PROMPT)?;

        let choice = match MenuChoice::parse(&selection) {
            Some(choice) => choice,
            None => {
                tracing::warn!(%selection, "invalid menu selection, using default");
                writeln!(self.out, "{}", menu::INVALID_CHOICE)?;
                MenuChoice::DefaultCurve
            }
        };
        tracing::info!(?choice, "menu selection");

        match choice {
            MenuChoice::DefaultCurve => self.plot_single(&CurveSpec::default()),
            MenuChoice::DemoCurve => self.plot_single(&DEMO_CURVE),
            MenuChoice::MultiCurve => self.plot_multi(),
            MenuChoice::Interactive => self.run_interactive(),
        }
    }

    /// Plot one curve with its vertex.
    pub fn plot_single(&mut self, spec: &CurveSpec) -> Result<()> {
        let figure = plot::single_curve_figure(spec, self.samples)?;
        self.renderer.show(&figure)
    }

    /// Plot every preset on one chart.
    pub fn plot_multi(&mut self) -> Result<()> {
        let figure = plot::multi_curve_figure(&PRESETS, self.samples)?;
        self.renderer.show(&figure)
    }

    /// Ask for a curve and plot it. A bad entry prints one error line and
    /// ends the driver without plotting.
    pub fn run_interactive(&mut self) -> Result<()> {
        writeln!(self.out, "Parabol Çizici - İnteraktif Mod")?;
        writeln!(self.out, "y = ax² + bx + c formülü kullanılacak")?;
        writeln!(self.out, "{}", "-".repeat(40))?;

        let spec = match self.read_curve() {
            Ok(spec) => spec,
            Err(PlotError::InvalidInput { field, value }) => {
                tracing::warn!(%field, %value, "rejected interactive input");
                writeln!(self.out, "{}", INVALID_NUMBER_MESSAGE)?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        match self.plot_single(&spec) {
            Err(err @ PlotError::InvalidDomain { .. }) => {
                tracing::warn!(%err, "rejected interactive domain");
                writeln!(self.out, "{}", INVALID_DOMAIN_MESSAGE)?;
                Ok(())
            }
            other => other,
        }
    }

    /// Prompt for a, b, c and the optional x bounds, stopping at the first
    /// invalid entry.
    pub fn read_curve(&mut self) -> Result<CurveSpec> {
        let raw = self.prompt("a katsayısını girin (x²'nin katsayısı): ")?;
        let a = parse_required("a", &raw)?;
        let raw = self.prompt("b katsayısını girin (x'in katsayısı): ")?;
        let b = parse_required("b", &raw)?;
        let raw = self.prompt("c sabitini girin (sabit terim): ")?;
        let c = parse_required("c", &raw)?;

        let raw = self.prompt("X ekseni minimum değeri (varsayılan -10): ")?;
        let x_min = parse_optional("x_min", &raw, DEFAULT_DOMAIN.x_min)?;
        let raw = self.prompt("X ekseni maksimum değeri (varsayılan 10): ")?;
        let x_max = parse_optional("x_max", &raw, DEFAULT_DOMAIN.x_max)?;

        Ok(CurveSpec::new(a, b, c).with_domain(Domain::new(x_min, x_max)))
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.lines.read_line()
    }
}
